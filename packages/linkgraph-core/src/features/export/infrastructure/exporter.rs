// Graph Exporter
//
// Dispatches on `ExportFormat`. Tabular export always succeeds for a valid
// graph (an edge-less graph yields header-only edges); GEXF refuses an
// edge-less graph with `ExportError::EmptyGraph`.

use tracing::info;

use super::gexf_writer::to_gexf;
use super::tabular::to_tables;
use crate::features::export::domain::{ExportArtifact, ExportError, ExportFormat};
use crate::features::graph_builder::LinkGraph;

pub fn export(graph: &LinkGraph, format: ExportFormat) -> Result<ExportArtifact, ExportError> {
    let artifact = match format {
        ExportFormat::Tabular => ExportArtifact::Tabular(to_tables(graph)?),
        ExportFormat::Gexf => ExportArtifact::Gexf(to_gexf(graph)?),
    };

    info!(
        format = %format,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "exported graph"
    );
    Ok(artifact)
}
