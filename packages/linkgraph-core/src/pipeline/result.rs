//! Pipeline result types

use serde::{Deserialize, Serialize};

use crate::features::attribute_mapping::MappingReport;
use crate::features::expansion::ExpansionStats;
use crate::features::export::ExportArtifact;
use crate::features::graph_builder::GraphStats;

/// Counters collected over one run, serializable for `--json` output
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunStats {
    /// Input rows read
    pub rows: usize,
    pub expansion: ExpansionStats,
    pub graph: GraphStats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<MappingReport>,
}

#[derive(Debug, Clone)]
pub struct PipelineResult {
    pub stats: RunStats,
    pub artifact: ExportArtifact,
}
