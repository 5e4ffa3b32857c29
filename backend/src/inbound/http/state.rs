//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they only depend on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::ports::StudentRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Storage contract used by the student endpoints.
    pub students: Arc<dyn StudentRepository>,
}

impl HttpState {
    /// Bundle the port implementations the handlers depend on.
    pub fn new(students: Arc<dyn StudentRepository>) -> Self {
        Self { students }
    }
}
