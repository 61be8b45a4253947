//! Request middleware.
//!
//! Purpose: cross-cutting request lifecycle concerns such as trace
//! correlation and cross-origin access.

pub mod cors;
pub mod trace;

pub use cors::Cors;
pub use trace::Trace;
