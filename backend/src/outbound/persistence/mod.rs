//! SQLite persistence adapters backed by sqlx.
//!
//! Concrete implementations of the domain repository ports against a
//! file-backed SQLite database.
//!
//! # Architecture
//!
//! - **Thin adapters**: repository implementations only translate between
//!   SQLite rows and domain types. No business logic resides here.
//! - **Named-column binding**: inserts and selects both name their columns,
//!   so the read path can never drift out of step with the write path.
//! - **Pool as the only lock**: the shared [`sqlx::SqlitePool`] serialises
//!   concurrent access; no application-level locking is layered on top.
//! - **Strongly typed errors**: all driver errors are mapped to the port
//!   error taxonomy.

mod pool;
mod sqlite_student_repository;

pub use pool::{PoolConfig, StorageSetupError, connect};
pub use sqlite_student_repository::SqliteStudentRepository;
