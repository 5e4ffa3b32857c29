//! Port abstraction for student persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::error::Error;
use crate::domain::student::{NewStudent, Student};

/// Persistence errors raised by student repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StudentRepositoryError {
    /// No row matched the requested id.
    #[error("no student found with id {id}")]
    NotFound {
        /// Identifier that matched nothing.
        id: i64,
    },
    /// Repository connection could not be established.
    #[error("student repository connection failed: {message}")]
    Connection {
        /// Driver-level description of the failure.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("student repository query failed: {message}")]
    Query {
        /// Driver-level description of the failure.
        message: String,
    },
}

impl StudentRepositoryError {
    /// Create a not-found error for the given id.
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage contract for the `students` table.
///
/// One concrete engine exists (`SqliteStudentRepository`), but the seam is
/// first-class: handlers only ever see this trait, and handler tests mock
/// it. Empty result sets from [`StudentRepository::list`] are a valid
/// outcome, not an error; id-keyed operations report a missing row as
/// [`StudentRepositoryError::NotFound`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Persist a new student row and return the generated id.
    async fn create(&self, student: &NewStudent) -> Result<i64, StudentRepositoryError>;

    /// Fetch a student by id.
    async fn find_by_id(&self, id: i64) -> Result<Student, StudentRepositoryError>;

    /// Fetch all students in unspecified order.
    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError>;

    /// Replace the mutable fields of an existing row.
    async fn update(&self, id: i64, student: &NewStudent) -> Result<(), StudentRepositoryError>;

    /// Delete a row by id.
    async fn delete(&self, id: i64) -> Result<(), StudentRepositoryError>;
}

impl From<StudentRepositoryError> for Error {
    fn from(err: StudentRepositoryError) -> Self {
        match &err {
            StudentRepositoryError::NotFound { .. } => Self::not_found(err.to_string()),
            StudentRepositoryError::Connection { .. } | StudentRepositoryError::Query { .. } => {
                Self::internal(err.to_string())
            }
        }
    }
}
