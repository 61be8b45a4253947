//! Driven adapters implementing the domain ports.

pub mod id_generator;
pub mod persistence;

pub use id_generator::AtomicIdGenerator;
