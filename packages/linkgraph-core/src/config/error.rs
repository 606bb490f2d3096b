//! Configuration error types

use thiserror::Error;

/// Configuration error type
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing version field in YAML
    #[error("Missing 'version' field in configuration file. Add 'version: 1' to the top of your YAML file.")]
    MissingVersion,

    /// Unsupported version
    #[error("Unsupported configuration version {found}. Supported versions: {}", supported.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", "))]
    UnsupportedVersion { found: u64, supported: Vec<u32> },

    /// Required string field is blank
    #[error("Field '{field}' must not be empty")]
    EmptyField { field: &'static str },

    /// Attribute column listed more than once
    #[error("Attribute column '{0}' is listed more than once")]
    DuplicateAttributeColumn(String),

    /// Attribute column names the source or target column
    #[error("Attribute column '{column}' is already the {role} column")]
    AttributeShadowsEndpoint { column: String, role: &'static str },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Configuration result type
pub type ConfigResult<T> = Result<T, ConfigError>;
