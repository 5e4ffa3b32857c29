//! SQLite pool setup and schema bootstrap.
//!
//! Opening the pool and preparing the schema happen once, at startup.
//! Failure here is fatal: the process cannot serve requests without its
//! storage, so errors propagate out of `main`.

use std::path::{Path, PathBuf};
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

/// Idempotent schema statement defining the `students` table.
const CREATE_STUDENTS_TABLE: &str = "CREATE TABLE IF NOT EXISTS students (\
     id INTEGER PRIMARY KEY AUTOINCREMENT, \
     name TEXT NOT NULL, \
     age INTEGER NOT NULL, \
     email TEXT NOT NULL)";

/// Errors raised while opening the database file or preparing its schema.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageSetupError {
    /// The database file could not be opened or created.
    #[error("failed to open database at {path}: {message}")]
    Open {
        /// Path the service attempted to open.
        path: String,
        /// Driver-level description of the failure.
        message: String,
    },
    /// The idempotent schema statement failed.
    #[error("failed to prepare schema: {message}")]
    Schema {
        /// Driver-level description of the failure.
        message: String,
    },
}

/// Configuration for the SQLite connection pool.
#[derive(Debug, Clone)]
pub struct PoolConfig {
    storage_path: PathBuf,
    max_connections: u32,
    acquire_timeout: Duration,
}

impl PoolConfig {
    /// Create a configuration pointing at the given database file.
    ///
    /// Defaults: 5 connections, 30 second acquire timeout.
    pub fn new(storage_path: impl Into<PathBuf>) -> Self {
        Self {
            storage_path: storage_path.into(),
            max_connections: 5,
            acquire_timeout: Duration::from_secs(30),
        }
    }

    /// Set the maximum number of pooled connections.
    pub fn with_max_connections(mut self, max_connections: u32) -> Self {
        self.max_connections = max_connections;
        self
    }

    /// Set the connection checkout timeout.
    pub fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Path of the database file.
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }
}

/// Open (or create) the database file and ensure the `students` table
/// exists.
///
/// # Errors
/// Returns [`StorageSetupError::Open`] when the file cannot be opened or
/// created, and [`StorageSetupError::Schema`] when the create-table
/// statement fails.
pub async fn connect(config: &PoolConfig) -> Result<SqlitePool, StorageSetupError> {
    let options = SqliteConnectOptions::new()
        .filename(config.storage_path())
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_with(options)
        .await
        .map_err(|err| StorageSetupError::Open {
            path: config.storage_path().display().to_string(),
            message: err.to_string(),
        })?;

    sqlx::query(CREATE_STUDENTS_TABLE)
        .execute(&pool)
        .await
        .map_err(|err| StorageSetupError::Schema {
            message: err.to_string(),
        })?;

    Ok(pool)
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn connect_creates_the_database_file() {
        let dir = TempDir::new().expect("temp dir");
        let path = dir.path().join("students.db");
        let pool = connect(&PoolConfig::new(&path)).await.expect("connect");
        pool.close().await;
        assert!(path.exists());
    }

    #[tokio::test]
    async fn schema_bootstrap_is_idempotent() {
        let dir = TempDir::new().expect("temp dir");
        let config = PoolConfig::new(dir.path().join("students.db"));

        let first = connect(&config).await.expect("first connect");
        sqlx::query("INSERT INTO students (name, email, age) VALUES (?1, ?2, ?3)")
            .bind("Alice")
            .bind("alice@example.com")
            .bind(21_i64)
            .execute(&first)
            .await
            .expect("insert");
        first.close().await;

        // Reopening must keep existing rows intact.
        let second = connect(&config).await.expect("second connect");
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM students")
            .fetch_one(&second)
            .await
            .expect("count");
        assert_eq!(count.0, 1);
    }

    #[tokio::test]
    async fn connect_fails_for_unusable_paths() {
        let dir = TempDir::new().expect("temp dir");
        // A directory is not a valid database file.
        let err = connect(&PoolConfig::new(dir.path()))
            .await
            .expect_err("directory path");
        assert!(matches!(err, StorageSetupError::Open { .. }));
    }
}
