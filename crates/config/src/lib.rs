pub mod notifier;
pub mod schema;

pub use notifier::{ConfigNotifier, Listener};
pub use schema::{GlobalConfig, IndicatorConfig, MeterConfig, ThemeConfig};

use meter_core::{MeterError, Result};
use std::path::{Path, PathBuf};

/// Load configuration from a TOML file.  Returns `MeterConfig::default()`
/// if the file doesn't exist so the indicators always have sensible
/// palettes and intervals.
pub fn load(path: impl AsRef<Path>) -> Result<MeterConfig> {
    let path = path.as_ref();
    if !path.exists() {
        tracing::warn!(
            "Config file not found at '{}'; using defaults.",
            path.display()
        );
        return Ok(MeterConfig::default());
    }

    let raw = std::fs::read_to_string(path)
        .map_err(|e| MeterError::Config(format!("cannot read '{}': {e}", path.display())))?;

    toml::from_str(&raw).map_err(|e| MeterError::Config(format!("TOML parse error: {e}")))
}

/// Return the default config path, honouring `$XDG_CONFIG_HOME`.
pub fn default_path() -> PathBuf {
    let base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        });
    base.join("meter").join("meter.toml")
}
