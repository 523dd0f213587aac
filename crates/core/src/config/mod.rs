//! Converter option defaults loaded from JSON or YAML.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{Architecture, BinaryMode, SourceLanguage, TextEncoding};

/// Serializable option set. Missing fields fall back to the defaults
/// (`x86-64`, `c`, `ascii`, `text`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    pub architecture: Architecture,
    pub language: SourceLanguage,
    pub encoding: TextEncoding,
    pub mode: BinaryMode,
}

/// Load a config file; `.json` files are parsed as JSON, anything else as YAML.
pub fn load_config(path: impl AsRef<Path>) -> Result<ConverterConfig> {
    let path = path.as_ref();
    let bytes = fs::read(path)
        .with_context(|| format!("Failed to read config at {}", path.display()))?;

    if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_slice(&bytes).context("Failed to parse config JSON")
    } else {
        serde_yaml::from_slice(&bytes).context("Failed to parse config YAML")
    }
}
