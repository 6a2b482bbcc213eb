//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "app": { "simulateLatency": true },
//!   "latency": { "searchMs": 300, "uploadMs": 2000 }
//! }
//! ```
//! Missing keys fall back to defaults; unknown keys are preserved on save.

use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::services::latency::{Latency, Operation};

const SETTINGS_FILE: &str = "settings.json";

/// Environment override for `app.simulateLatency`
pub const SIMULATE_LATENCY_ENV: &str = "CLIENTLINK_SIMULATE_LATENCY";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    latency: LatencySettings,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    simulate_latency: bool,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Per-operation delay overrides in milliseconds.
///
/// `None` means the operation's simulated default.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatencySettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list_files_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_payments_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_payments_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_invoices_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_invoices_ms: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_summary_ms: Option<u64>,
}

impl LatencySettings {
    pub fn override_for(&self, op: Operation) -> Option<u64> {
        match op {
            Operation::Search => self.search_ms,
            Operation::ListFiles => self.list_files_ms,
            Operation::DownloadUrl => self.download_url_ms,
            Operation::Upload => self.upload_ms,
            Operation::CustomerPayments => self.customer_payments_ms,
            Operation::ProjectPayments => self.project_payments_ms,
            Operation::CustomerInvoices => self.customer_invoices_ms,
            Operation::ProjectInvoices => self.project_invoices_ms,
            Operation::CustomerSummary => self.customer_summary_ms,
        }
    }
}

/// Clientlink configuration (simplified view of settings)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub simulate_latency: bool,
    pub latency: LatencySettings,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

/// Parse a boolean-ish environment value
fn parse_flag(value: &str) -> Option<bool> {
    match value.trim() {
        "true" | "1" | "yes" | "TRUE" | "YES" => Some(true),
        "false" | "0" | "no" | "FALSE" | "NO" => Some(false),
        _ => None,
    }
}

/// Read settings.json; a missing or malformed file yields defaults.
///
/// A malformed file is replaced on the next save, so say so.
fn read_settings(path: &Path) -> Result<SettingsFile> {
    if !path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content).unwrap_or_else(|e| {
        warn!(
            path = %path.display(),
            error = %e,
            "settings file is not valid JSON, using defaults; saving will overwrite it"
        );
        SettingsFile::default()
    }))
}

impl Config {
    /// Load config from the data directory
    ///
    /// Latency simulation can be enabled via:
    /// 1. `app.simulateLatency` in settings.json
    /// 2. Environment variable CLIENTLINK_SIMULATE_LATENCY (takes precedence)
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let raw = read_settings(&settings_path)?;

        let simulate_latency = std::env::var(SIMULATE_LATENCY_ENV)
            .ok()
            .as_deref()
            .and_then(parse_flag)
            .unwrap_or(raw.app.simulate_latency);

        Ok(Self {
            simulate_latency,
            latency: raw.latency.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the data directory
    /// Preserves settings this crate doesn't manage
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        let settings_path = data_dir.join(SETTINGS_FILE);

        let mut settings = read_settings(&settings_path)?;

        settings.app.simulate_latency = self.simulate_latency;
        settings.latency = self.latency.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    pub fn enable_latency(&mut self) {
        self.simulate_latency = true;
    }

    pub fn disable_latency(&mut self) {
        self.simulate_latency = false;
    }

    /// Delay table for the services: nothing unless simulation is on
    pub fn latency(&self) -> Latency {
        if !self.simulate_latency {
            return Latency::none();
        }
        Operation::ALL.iter().fold(Latency::none(), |latency, op| {
            let delay = self
                .latency
                .override_for(*op)
                .map(Duration::from_millis)
                .unwrap_or_else(|| op.simulated_delay());
            latency.with(*op, delay)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag(" 0 "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn test_missing_file_means_no_latency() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.latency, LatencySettings::default());
        if !config.simulate_latency {
            assert!(config.latency().is_none());
        }
    }

    #[test]
    fn test_overrides_apply_when_simulating() {
        let mut config = Config::default();
        config.enable_latency();
        config.latency.search_ms = Some(5);
        config.latency.upload_ms = Some(0);

        let latency = config.latency();
        assert_eq!(latency.delay_for(Operation::Search), Duration::from_millis(5));
        assert_eq!(latency.delay_for(Operation::Upload), Duration::ZERO);
        assert_eq!(latency.delay_for(Operation::ListFiles), Duration::from_millis(1200));

        config.disable_latency();
        assert!(config.latency().is_none());
    }

    #[test]
    fn test_malformed_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(&path, "{ not json").unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert_eq!(config.latency, LatencySettings::default());

        config.latency.search_ms = Some(1);
        config.save(dir.path()).unwrap();
        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["latency"]["searchMs"], 1);
    }

    #[test]
    fn test_save_preserves_unknown_keys() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(SETTINGS_FILE);
        std::fs::write(
            &path,
            r#"{"app": {"theme": "dark"}, "extra": 1, "latency": {"searchMs": 10}}"#,
        )
        .unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        assert_eq!(config.latency.search_ms, Some(10));
        config.latency.upload_ms = Some(50);
        config.save(dir.path()).unwrap();

        let saved: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["app"]["theme"], "dark");
        assert_eq!(saved["extra"], 1);
        assert_eq!(saved["latency"]["searchMs"], 10);
        assert_eq!(saved["latency"]["uploadMs"], 50);
    }
}
