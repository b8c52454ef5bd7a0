//! Hardware configuration loading
//!
//! The configuration file is a YAML document with a top-level `hardware`
//! mapping of declaration-name to declaration. Declaration order is
//! preserved: it determines resolution order and the line order of the
//! emitted env file.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::debug;

use crate::declaration::HardwareDeclaration;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse hardware config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("Missing mandatory fields for hardware '{declaration}': {fields:?}")]
    MissingFields {
        declaration: String,
        fields: Vec<&'static str>,
    },
}

/// Top-level hardware configuration document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HardwareConfig {
    /// Declared hardware entries, in file order
    pub hardware: IndexMap<String, HardwareDeclaration>,
}

impl HardwareConfig {
    /// Parse a configuration from a YAML string
    ///
    /// Unknown device types and unknown declaration fields are rejected
    /// here, before any device enumeration happens.
    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        let config: HardwareConfig = serde_yaml::from_str(content)?;
        Ok(config)
    }

    /// Load a configuration from a YAML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(
            path = %path.display(),
            entries = config.hardware.len(),
            "Loaded hardware config"
        );
        Ok(config)
    }
}
