//! Storage configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// State file configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the JSON state file
    #[serde(default = "default_path")]
    pub path: PathBuf,
    /// Write indented JSON
    #[serde(default)]
    pub pretty: bool,
}

fn default_path() -> PathBuf {
    PathBuf::from("data/tutor-state.json")
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            pretty: false,
        }
    }
}
