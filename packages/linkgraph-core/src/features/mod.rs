//! Feature modules, one per pipeline stage
//!
//! Each feature follows the same layering:
//! - domain/         - types and invariants
//! - application/    - use cases (where a stage has more than one caller)
//! - infrastructure/ - the working implementation

// Raw column → node identities
pub mod extraction;

// List-valued rows → scalar edge candidates
pub mod expansion;

// Edge candidates → LinkGraph
pub mod graph_builder;

// Side-loaded node attributes
pub mod attribute_mapping;

// Tables / GEXF
pub mod export;
