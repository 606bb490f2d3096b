//! Configuration I/O
//!
//! YAML schema types. Loading and saving live in pipeline_config.rs.

use serde::{Deserialize, Serialize};

use super::pipeline_config::PipelineConfig;

/// YAML Schema v1
///
/// ```yaml
/// version: 1
/// pipeline:
///   source_column: text
///   target_column: user
///   source_processing: mentions-freetext
///   graph_type: directed-multi
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: u32,

    pub pipeline: PipelineConfig,
}
