use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, info};

use sw_core::WheelConfig;

/// Load a [`WheelConfig`] from a TOML file, falling back to defaults
/// when the file does not exist. A present-but-invalid file is an
/// error: silently ignoring a broken config hides real mistakes.
pub fn load_config_or_default(path: &Path) -> Result<WheelConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(WheelConfig::default());
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: WheelConfig = toml::from_str(&raw)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("invalid config in {}", path.display()))?;
    info!(path = %path.display(), "config loaded");
    Ok(config)
}
