//! Error types
//!
//! Monitor operations are total and never fail. Errors only arise at the
//! edges: invalid settings, terminal I/O, exporting, and logging setup.

use std::io;
use std::path::PathBuf;

/// Settings the dashboard refuses to run with
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("{timer} interval must be greater than zero")]
    ZeroInterval { timer: &'static str },

    #[error("history length must be at least 1")]
    EmptyHistory,

    #[error("core count must be at least 1")]
    NoCores,

    #[error("invalid total memory {0} MB, must be a positive number")]
    InvalidMemory(f64),
}

/// Top-level application error
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),

    #[error("failed to export to {}: {source}", .path.display())]
    Export { path: PathBuf, source: io::Error },

    #[error("failed to set up logging: {0}")]
    Logging(String),
}

/// Result type for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        assert_eq!(
            ConfigError::ZeroInterval { timer: "process" }.to_string(),
            "process interval must be greater than zero"
        );
        assert_eq!(
            DashboardError::from(ConfigError::NoCores).to_string(),
            "invalid configuration: core count must be at least 1"
        );
    }

    #[test]
    fn test_export_error_names_path() {
        let err = DashboardError::Export {
            path: PathBuf::from("out.csv"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        assert_eq!(err.to_string(), "failed to export to out.csv: denied");
    }
}
