//! Domain ports for the hexagonal boundary.
//!
//! Handlers depend on these traits only; concrete engines live in
//! `outbound` and are substituted freely in tests.

mod student_repository;

#[cfg(test)]
pub use student_repository::MockStudentRepository;
pub use student_repository::{StudentRepository, StudentRepositoryError};
