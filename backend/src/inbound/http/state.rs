//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{IdGenerator, UserService};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// User use cases behind the driving port.
    pub users: Arc<dyn UserService>,
    /// Source of identifiers for newly created users.
    pub ids: Arc<dyn IdGenerator>,
}

impl HttpState {
    /// Construct state from the user service and identifier source.
    pub fn new(users: Arc<dyn UserService>, ids: Arc<dyn IdGenerator>) -> Self {
        Self { users, ids }
    }
}
