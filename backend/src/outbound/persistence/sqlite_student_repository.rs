//! SQLite-backed `StudentRepository` implementation using sqlx.
//!
//! A thin adapter: each contract call executes exactly one prepared
//! statement and maps the outcome onto the port error taxonomy. Zero
//! affected rows on update/delete is the sole not-found signal; there is no
//! prior existence check.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePool;
use tracing::debug;

use crate::domain::ports::{StudentRepository, StudentRepositoryError};
use crate::domain::{NewStudent, Student};

/// sqlx-backed implementation of the `StudentRepository` port.
#[derive(Clone)]
pub struct SqliteStudentRepository {
    pool: SqlitePool,
}

impl SqliteStudentRepository {
    /// Create a repository over an initialised pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Row shape decoded by column name, never by position.
#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: i64,
    name: String,
    email: String,
    age: i64,
}

impl From<StudentRow> for Student {
    fn from(row: StudentRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            age: row.age,
        }
    }
}

/// Map driver errors to the port error taxonomy.
///
/// Driver detail is logged rather than embedded in messages that travel
/// towards clients.
fn map_sqlx_error(error: sqlx::Error) -> StudentRepositoryError {
    debug!(error = %error, "sqlite operation failed");
    match error {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StudentRepositoryError::connection("database connection error")
        }
        sqlx::Error::Database(err) => StudentRepositoryError::query(err.message().to_owned()),
        _ => StudentRepositoryError::query("database error"),
    }
}

#[async_trait]
impl StudentRepository for SqliteStudentRepository {
    async fn create(&self, student: &NewStudent) -> Result<i64, StudentRepositoryError> {
        let result = sqlx::query("INSERT INTO students (name, email, age) VALUES (?1, ?2, ?3)")
            .bind(student.name())
            .bind(student.email())
            .bind(student.age())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(result.last_insert_rowid())
    }

    async fn find_by_id(&self, id: i64) -> Result<Student, StudentRepositoryError> {
        let row: Option<StudentRow> =
            sqlx::query_as("SELECT id, name, email, age FROM students WHERE id = ?1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        row.map(Student::from)
            .ok_or(StudentRepositoryError::NotFound { id })
    }

    async fn list(&self) -> Result<Vec<Student>, StudentRepositoryError> {
        let rows: Vec<StudentRow> = sqlx::query_as("SELECT id, name, email, age FROM students")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        Ok(rows.into_iter().map(Student::from).collect())
    }

    async fn update(
        &self,
        id: i64,
        student: &NewStudent,
    ) -> Result<(), StudentRepositoryError> {
        let result =
            sqlx::query("UPDATE students SET name = ?1, email = ?2, age = ?3 WHERE id = ?4")
                .bind(student.name())
                .bind(student.email())
                .bind(student.age())
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(StudentRepositoryError::NotFound { id });
        }
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), StudentRepositoryError> {
        let result = sqlx::query("DELETE FROM students WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;
        if result.rows_affected() == 0 {
            return Err(StudentRepositoryError::NotFound { id });
        }
        Ok(())
    }
}
