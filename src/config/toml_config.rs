use crate::core::Credential;
use crate::utils::error::{AocError, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional settings file, e.g.
///
/// ```toml
/// session = "53616c7465645f5f..."
/// base_url = "https://adventofcode.com"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub session: Option<Credential>,
    pub base_url: Option<String>,
}

impl FileConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| AocError::ConfigError {
            message: format!("Failed to read config file {}: {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}
