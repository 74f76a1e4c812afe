//! Configuration for impress-dict
//!
//! Options for the prune pass and the index writer. Loadable from TOML or
//! JSON:
//!
//! ```toml
//! [writer]
//! stylesheet = "style.css"
//!
//! [prune]
//! warn_ambiguous = true
//! drop_empty_entries = true
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DictError, Result};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DictConfig {
    pub writer: WriterConfig,
    pub prune: PruneConfig,
}

/// Index writer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    /// Stylesheet referenced from the document head
    pub stylesheet: String,
}

impl Default for WriterConfig {
    fn default() -> Self {
        Self {
            stylesheet: "style.css".to_string(),
        }
    }
}

/// Prune pass configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PruneConfig {
    /// Report collisions between two rank-0 orthographies
    pub warn_ambiguous: bool,
    /// Discard entries left without orthographies
    pub drop_empty_entries: bool,
}

impl Default for PruneConfig {
    fn default() -> Self {
        Self {
            warn_ambiguous: true,
            drop_empty_entries: true,
        }
    }
}

impl DictConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config_dir>/impress-dict/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("impress-dict").join("config.toml"))
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load and validate a config file. `.json` files are read as JSON,
    /// anything else as TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => Self::from_json(&contents)?,
            _ => Self::from_toml(&contents)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Load the file at [`DictConfig::default_path`], falling back to
    /// defaults when it does not exist.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(path),
            _ => Ok(Self::default()),
        }
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let stylesheet = self.writer.stylesheet.trim();
        if stylesheet.is_empty() {
            return Err(DictError::Config(
                "writer.stylesheet must not be empty".to_string(),
            ));
        }
        if stylesheet.contains('"') {
            return Err(DictError::Config(
                "writer.stylesheet must not contain quotes".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DictConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.writer.stylesheet, "style.css");
        assert!(config.prune.warn_ambiguous);
        assert!(config.prune.drop_empty_entries);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = DictConfig::from_toml("[prune]\nwarn_ambiguous = false\n").unwrap();
        assert!(!config.prune.warn_ambiguous);
        assert!(config.prune.drop_empty_entries);
        assert_eq!(config.writer.stylesheet, "style.css");
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = DictConfig::default();
        config.writer.stylesheet = "kindle.css".to_string();
        let toml = config.to_toml().unwrap();
        assert_eq!(DictConfig::from_toml(&toml).unwrap(), config);
    }

    #[test]
    fn test_json_serialization() {
        let config = DictConfig::default();
        let json = config.to_json().unwrap();
        assert_eq!(DictConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_stylesheet() {
        let mut config = DictConfig::default();
        config.writer.stylesheet = "  ".to_string();
        assert!(config.validate().is_err());

        config.writer.stylesheet = "a\"b.css".to_string();
        assert!(config.validate().is_err());
    }
}
