/*
 * linkgraph - networks from tabular data
 *
 * Feature-First Hexagonal Architecture:
 * - shared/    : Common models (ExtractedValue, Record, EdgeCandidate)
 * - features/  : Vertical slices (extraction → expansion → graph_builder → attribute_mapping → export)
 * - pipeline/  : Orchestration over an explicit per-run context
 * - config/    : Typed, versioned YAML configuration
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared models and constants
pub mod shared;

/// Feature modules (pipeline stages)
pub mod features;

/// Pipeline orchestration
pub mod pipeline;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ConfigError, PipelineConfig, Validatable};
pub use errors::{LinkgraphError, Result};
pub use features::attribute_mapping::{AttributeMapper, MappingReport};
pub use features::expansion::{ExpansionStats, RecordExpander};
pub use features::export::{export, read_gexf, ExportArtifact, ExportError, ExportFormat};
pub use features::extraction::{ColumnExtractor, ExtractionMode};
pub use features::graph_builder::{
    AttributeConflictPolicy, GraphAssembler, GraphStats, GraphType, LinkGraph,
};
pub use pipeline::{Pipeline, PipelineContext, PipelineError, PipelineResult, RunStats};
pub use shared::constants::NO_DATA;
pub use shared::models::{EdgeCandidate, ExtractedValue, Record};

pub use linkgraph_table::{Dataset, Table};
