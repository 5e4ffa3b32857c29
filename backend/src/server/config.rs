//! Service configuration loaded via OrthoConfig.
//!
//! Settings merge CLI arguments, `STUDENT_API_*` environment variables, and
//! an optional configuration file. `main` loads them exactly once and
//! threads the values into component constructors; no component consults
//! ambient process state afterwards.

use std::path::PathBuf;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_STORAGE_PATH: &str = "students.db";
const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:8080";

/// Configuration values for the student API process.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STUDENT_API")]
pub struct AppSettings {
    /// Path to the SQLite database file (created on first start).
    pub storage_path: Option<PathBuf>,
    /// Address and port the HTTP server binds to.
    pub listen_addr: Option<String>,
}

impl AppSettings {
    /// Return the configured storage path, falling back to the default.
    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_PATH))
    }

    /// Return the configured listen address, falling back to the default.
    pub fn listen_addr(&self) -> String {
        self.listen_addr
            .clone()
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_owned())
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for configuration fallbacks.

    use super::*;

    #[test]
    fn defaults_apply_when_fields_are_absent() {
        let settings = AppSettings {
            storage_path: None,
            listen_addr: None,
        };
        assert_eq!(settings.storage_path(), PathBuf::from(DEFAULT_STORAGE_PATH));
        assert_eq!(settings.listen_addr(), DEFAULT_LISTEN_ADDR);
    }

    #[test]
    fn explicit_values_win_over_defaults() {
        let settings = AppSettings {
            storage_path: Some(PathBuf::from("/var/lib/students.db")),
            listen_addr: Some("0.0.0.0:9090".to_owned()),
        };
        assert_eq!(settings.storage_path(), PathBuf::from("/var/lib/students.db"));
        assert_eq!(settings.listen_addr(), "0.0.0.0:9090");
    }
}
