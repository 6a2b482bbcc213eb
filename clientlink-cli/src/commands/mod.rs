//! CLI command implementations

pub mod billing;
pub mod doctor;
pub mod files;
pub mod latency;
pub mod logs;
pub mod search;
pub mod status;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clientlink_core::domain::result::Result as CoreResult;
use clientlink_core::{ActivityLog, ClientLinkContext, EntryPoint};

/// Environment override for the data directory
const DATA_DIR_ENV: &str = "CLIENTLINK_DIR";

/// Get the activity log for CLI operations
///
/// Returns None if the log fails to open (shouldn't block operations)
pub fn get_logger() -> Option<ActivityLog> {
    let data_dir = get_data_dir().ok()?;
    std::fs::create_dir_all(&data_dir).ok()?;
    ActivityLog::open(&data_dir, EntryPoint::Cli, env!("CARGO_PKG_VERSION")).ok()
}

/// Drop a failed log write (logging should never break the app)
fn ignore_log_failure(result: Result<()>) {
    if let Err(e) = result {
        tracing::debug!(error = %e, "activity log write failed");
    }
}

/// Record how a backend call went and hand its result to anyhow
pub fn track<T>(
    logger: &Option<ActivityLog>,
    command: &str,
    integration: &str,
    result: CoreResult<T>,
) -> Result<T> {
    match result {
        Ok(value) => {
            if let Some(log) = logger {
                ignore_log_failure(log.log_command(command, integration));
            }
            Ok(value)
        }
        Err(e) => {
            if let Some(log) = logger {
                ignore_log_failure(log.log_error(command, integration, &e));
            }
            Err(e.into())
        }
    }
}

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    dirs::home_dir()
        .map(|home| home.join(".clientlink"))
        .ok_or_else(|| anyhow!("Could not find home directory; set {}", DATA_DIR_ENV))
}

/// Get or create the clientlink context
pub fn get_context() -> Result<ClientLinkContext> {
    let data_dir = get_data_dir()?;

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    ClientLinkContext::new(&data_dir).context("Failed to initialize clientlink context")
}
