//! Pipeline errors
//!
//! Input-shape errors are raised before expansion, so a failed run never
//! leaves a partial graph behind.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::export::ExportError;
use crate::features::graph_builder::GraphBuilderError;
use linkgraph_table::TableError;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// A configured column is absent from its dataset
    #[error("Input has no {role} column '{column}'. Available columns: {}", available.join(", "))]
    MissingColumn {
        role: &'static str,
        column: String,
        available: Vec<String>,
    },

    /// An attribute table was supplied but the configuration names no key column
    #[error("An attribute table was supplied without 'attribute_table.key_column' in the configuration")]
    MissingKeyColumnConfig,

    /// A stage that needs the graph ran before `build`
    #[error("No graph has been built for the current configuration")]
    NoGraph,

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Graph assembly failed: {0}")]
    GraphBuilder(#[from] GraphBuilderError),

    #[error("Export failed: {0}")]
    Export(#[from] ExportError),
}

impl PipelineError {
    pub fn missing_column(role: &'static str, column: impl Into<String>, available: &[String]) -> Self {
        PipelineError::MissingColumn {
            role,
            column: column.into(),
            available: available.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_column_message() {
        let err = PipelineError::missing_column("source", "text", &["user".to_string(), "date".to_string()]);
        assert_eq!(
            err.to_string(),
            "Input has no source column 'text'. Available columns: user, date"
        );
    }
}
