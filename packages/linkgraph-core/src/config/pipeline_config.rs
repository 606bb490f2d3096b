//! Pipeline configuration
//!
//! Two ways in:
//!
//! ```rust,ignore
//! // Builder
//! let config = PipelineConfig::new("text", "user")
//!     .source_processing(ExtractionMode::MentionsFreetext)
//!     .graph_type(GraphType::DirectedMulti)
//!     .attribute_columns(["lang"]);
//!
//! // YAML (version: 1)
//! let config = PipelineConfig::from_yaml("network.yaml")?;
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigFileV1;
use super::validation::Validatable;
use crate::features::export::ExportFormat;
use crate::features::extraction::ExtractionMode;
use crate::features::graph_builder::{AttributeConflictPolicy, GraphType};
use crate::shared::constants::SUPPORTED_CONFIG_VERSIONS;

/// Side-loaded attribute table settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AttributeTableConfig {
    /// Column holding node keys, matched case-insensitively
    pub key_column: String,
}

/// Everything one pipeline run needs besides the data itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    pub source_column: String,
    pub target_column: String,

    #[serde(default)]
    pub source_processing: ExtractionMode,
    #[serde(default)]
    pub target_processing: ExtractionMode,

    /// Columns copied onto edges and source nodes
    #[serde(default)]
    pub attribute_columns: Vec<String>,

    #[serde(default)]
    pub graph_type: GraphType,
    #[serde(default)]
    pub export_format: ExportFormat,
    #[serde(default)]
    pub conflict_policy: AttributeConflictPolicy,

    /// Leading input lines skipped before the header row
    #[serde(default)]
    pub skip_rows: usize,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute_table: Option<AttributeTableConfig>,
}

impl PipelineConfig {
    /// Defaults for everything except the two designated columns
    pub fn new(source_column: impl Into<String>, target_column: impl Into<String>) -> Self {
        Self {
            source_column: source_column.into(),
            target_column: target_column.into(),
            source_processing: ExtractionMode::default(),
            target_processing: ExtractionMode::default(),
            attribute_columns: Vec::new(),
            graph_type: GraphType::default(),
            export_format: ExportFormat::default(),
            conflict_policy: AttributeConflictPolicy::default(),
            skip_rows: 0,
            attribute_table: None,
        }
    }

    pub fn source_processing(mut self, mode: ExtractionMode) -> Self {
        self.source_processing = mode;
        self
    }

    pub fn target_processing(mut self, mode: ExtractionMode) -> Self {
        self.target_processing = mode;
        self
    }

    pub fn attribute_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attribute_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn graph_type(mut self, graph_type: GraphType) -> Self {
        self.graph_type = graph_type;
        self
    }

    pub fn export_format(mut self, format: ExportFormat) -> Self {
        self.export_format = format;
        self
    }

    pub fn conflict_policy(mut self, policy: AttributeConflictPolicy) -> Self {
        self.conflict_policy = policy;
        self
    }

    pub fn skip_rows(mut self, rows: usize) -> Self {
        self.skip_rows = rows;
        self
    }

    pub fn attribute_table(mut self, key_column: impl Into<String>) -> Self {
        self.attribute_table = Some(AttributeTableConfig {
            key_column: key_column.into(),
        });
        self
    }

    /// Validate and return self
    pub fn build(self) -> ConfigResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Load from a YAML file (schema v1) and validate
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse YAML text (schema v1) and validate
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(content)?;

        let found = value
            .get("version")
            .and_then(serde_yaml::Value::as_u64)
            .ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_CONFIG_VERSIONS.iter().any(|&v| u64::from(v) == found) {
            return Err(ConfigError::UnsupportedVersion {
                found,
                supported: SUPPORTED_CONFIG_VERSIONS.to_vec(),
            });
        }

        let file: ConfigFileV1 = serde_yaml::from_value(value)?;
        file.pipeline.build()
    }

    /// Serialize as a versioned YAML document
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: 1,
            pipeline: self.clone(),
        };
        Ok(serde_yaml::to_string(&file)?)
    }

    /// One-line human-readable summary
    pub fn describe(&self) -> String {
        format!(
            "{} ({}) -> {} ({}), {}, {} attribute column(s), {} export",
            self.source_column,
            self.source_processing,
            self.target_column,
            self.target_processing,
            self.graph_type,
            self.attribute_columns.len(),
            self.export_format
        )
    }
}
