//! Domain primitives for the student record service.
//!
//! Purpose: define the entity model, the transport-agnostic error taxonomy,
//! and the persistence ports the inbound adapters depend on. Types here know
//! nothing about HTTP or SQLite; adapters translate at the edges.
//!
//! Public surface:
//! - [`Student`] / [`NewStudent`] — the entity model and its validated
//!   input shape.
//! - [`Error`] / [`ErrorCode`] — tagged error payload mapped to responses
//!   by the inbound layer.
//! - [`ports`] — the hexagonal boundary (`StudentRepository`).

pub mod error;
pub mod ports;
pub mod student;

pub use self::error::{Error, ErrorCode};
pub use self::student::{
    AGE_MAX, AGE_MIN, FieldViolation, NAME_MAX, NewStudent, Student, StudentValidationError,
    ViolationCode,
};
