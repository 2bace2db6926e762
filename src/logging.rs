//! Tracing subscriber setup
//!
//! The dashboard owns the terminal while it runs, so logs only go to a file
//! in interactive mode. Non-interactive runs may log to stderr instead.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::constants::APP_NAME;
use crate::error::{DashboardError, DashboardResult};

/// Where log lines should be written
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget<'a> {
    /// No subscriber is installed
    Disabled,
    Stderr,
    File(&'a Path),
}

/// Maps the `-v` count to a level: info, then debug, then trace.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Builds the filter, letting `RUST_LOG` override the `-v` level.
fn build_filter(verbose: u8) -> DashboardResult<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(format!("{}={}", APP_NAME, level_for(verbose)))
            .map_err(|e| DashboardError::Logging(e.to_string())),
    }
}

/// Installs the global subscriber for `target`.
pub fn init_logging(target: LogTarget<'_>, verbose: u8) -> DashboardResult<()> {
    let filter = match target {
        LogTarget::Disabled => return Ok(()),
        _ => build_filter(verbose)?,
    };

    let installed = match target {
        LogTarget::File(path) => {
            let file = File::create(path).map_err(|e| {
                DashboardError::Logging(format!("cannot open {}: {}", path.display(), e))
            })?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init()
        }
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init(),
    };

    installed.map_err(|e| DashboardError::Logging(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), Level::INFO);
        assert_eq!(level_for(1), Level::DEBUG);
        assert_eq!(level_for(2), Level::TRACE);
        assert_eq!(level_for(9), Level::TRACE);
    }

    #[test]
    fn test_disabled_installs_nothing() {
        assert!(init_logging(LogTarget::Disabled, 3).is_ok());
    }

    #[test]
    fn test_unwritable_log_file_is_reported() {
        let path = Path::new("/nonexistent-dir/sysmon_dash/dash.log");
        let err = init_logging(LogTarget::File(path), 0);
        assert!(matches!(err, Err(DashboardError::Logging(msg)) if msg.contains("cannot open")));
    }
}
