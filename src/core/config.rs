use crate::models::config::GateConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Load a config file. A missing file yields defaults.
pub fn load(path: &Path) -> Result<GateConfig> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no config file, using defaults");
        return Ok(GateConfig::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    parse(&content).with_context(|| format!("parse config {}", path.display()))
}

pub fn parse(content: &str) -> Result<GateConfig> {
    Ok(toml::from_str(content)?)
}
