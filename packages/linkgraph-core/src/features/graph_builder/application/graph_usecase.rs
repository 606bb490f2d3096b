//! Graph Builder UseCase

use crate::features::graph_builder::domain::{GraphStats, GraphType, LinkGraph};
use crate::features::graph_builder::infrastructure::{GraphAssembler, GraphBuilderError};
use crate::shared::models::EdgeCandidate;

/// Graph Builder UseCase Trait
pub trait GraphBuilderUseCase: Send + Sync {
    fn build_graph(
        &self,
        candidates: &[EdgeCandidate],
        graph_type: GraphType,
        attribute_columns: &[String],
    ) -> Result<GraphBuildResult, GraphBuilderError>;
}

#[derive(Debug, Clone)]
pub struct GraphBuildResult {
    pub graph: LinkGraph,
    pub stats: GraphStats,
}

/// Graph Builder UseCase Implementation
#[derive(Debug, Default)]
pub struct GraphBuilderUseCaseImpl {
    assembler: GraphAssembler,
}

impl GraphBuilderUseCaseImpl {
    pub fn new(assembler: GraphAssembler) -> Self {
        Self { assembler }
    }
}

impl GraphBuilderUseCase for GraphBuilderUseCaseImpl {
    fn build_graph(
        &self,
        candidates: &[EdgeCandidate],
        graph_type: GraphType,
        attribute_columns: &[String],
    ) -> Result<GraphBuildResult, GraphBuilderError> {
        let graph = self
            .assembler
            .assemble(candidates, graph_type, attribute_columns)?;
        let stats = graph.stats();
        Ok(GraphBuildResult { graph, stats })
    }
}
