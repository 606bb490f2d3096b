//! Error types for linkgraph-core
//!
//! Each layer owns a `thiserror` enum; `LinkgraphError` unifies them for
//! callers that drive the whole crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::export::ExportError;
use crate::features::graph_builder::GraphBuilderError;
use crate::pipeline::PipelineError;
use linkgraph_table::TableError;

/// Main error type for linkgraph operations
#[derive(Debug, Error)]
pub enum LinkgraphError {
    /// Invalid or unreadable configuration
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Input shape or stage failure
    #[error("Pipeline error: {0}")]
    Pipeline(#[from] PipelineError),

    /// Rendering or parsing an output artifact
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Dataset reading or table writing
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// Graph assembly
    #[error("Graph error: {0}")]
    Graph(#[from] GraphBuilderError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LinkgraphError {
    /// The graph had no edges when an interchange document was requested
    pub fn is_empty_graph(&self) -> bool {
        matches!(
            self,
            LinkgraphError::Export(ExportError::EmptyGraph)
                | LinkgraphError::Pipeline(PipelineError::Export(ExportError::EmptyGraph))
        )
    }
}

/// Result type alias for linkgraph operations
pub type Result<T> = std::result::Result<T, LinkgraphError>;
