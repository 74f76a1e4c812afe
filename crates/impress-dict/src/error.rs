//! Error types for loading, configuring and writing dictionaries

/// Errors surfaced by the fallible parts of the crate
///
/// Deduplication itself never fails; these cover the I/O and parsing
/// boundaries around it.
#[derive(Debug, thiserror::Error)]
pub enum DictError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("Invalid entry #{index} ({label}): {reason}")]
    InvalidEntry {
        index: usize,
        label: String,
        reason: String,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DictError>;
