//! Student record service: domain model, HTTP adapters, and SQLite storage.
//!
//! The crate follows a hexagonal layout: [`domain`] owns the entity model,
//! the error taxonomy, and the `StudentRepository` port; [`inbound::http`]
//! adapts HTTP requests onto the port; [`outbound::persistence`] implements
//! it against an embedded SQLite file.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod outbound;

pub use doc::ApiDoc;
