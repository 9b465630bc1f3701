//! Gate configuration file model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GateConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub prompt: PromptSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreSection {
    /// Credential record location; relative paths resolve against the working directory.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PromptSection {
    /// Hide typed secrets.
    #[serde(default = "default_mask_input")]
    pub mask_input: bool,
}

impl Default for PromptSection {
    fn default() -> Self {
        Self {
            mask_input: default_mask_input(),
        }
    }
}

fn default_mask_input() -> bool {
    true
}
