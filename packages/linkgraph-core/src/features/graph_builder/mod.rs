// Graph Builder - Edge Candidates to Attributed Network
//
// ## Architecture
// - Domain: `LinkGraph` (petgraph-backed), `GraphType`, conflict policy
// - Infrastructure: `GraphAssembler`
// - Application: `GraphBuilderUseCase` (assembly + stats for display)

pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-export application layer
pub use application::{GraphBuildResult, GraphBuilderUseCase, GraphBuilderUseCaseImpl};

// Re-exports
pub use domain::{
    AttributeConflictPolicy, EdgeInsertion, EdgeView, GraphEdge, GraphNode, GraphStats, GraphType,
    LinkGraph,
};

pub use infrastructure::{GraphAssembler, GraphBuilderError};
