//! Store and config path resolution.

use crate::constants;
use crate::models::config::GateConfig;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatePaths {
    pub store: PathBuf,
}

impl GatePaths {
    /// Resolve the store from the CLI/env value, then the config file, then the default.
    pub fn resolve(store_arg: Option<PathBuf>, config: &GateConfig) -> Self {
        let store = store_arg
            .or_else(|| config.store.path.clone())
            .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_STORE_FILE));
        Self { store }
    }
}

/// Config file location and whether the caller named it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub explicit: bool,
}

impl ConfigLocation {
    pub fn resolve(config_arg: Option<PathBuf>) -> Self {
        match config_arg {
            Some(path) => Self {
                path,
                explicit: true,
            },
            None => Self {
                path: PathBuf::from(constants::DEFAULT_CONFIG_FILE),
                explicit: false,
            },
        }
    }
}

impl std::fmt::Display for GatePaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "gate@{}", self.store.display())
    }
}
