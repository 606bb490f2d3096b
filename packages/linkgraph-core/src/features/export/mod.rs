// Graph Export
//
// Renders a `LinkGraph` as a node/edge table pair or a GEXF document, and
// reads GEXF back.
//
// ## Architecture
// - Domain: `ExportFormat`, `ExportArtifact`, `ExportError`
// - Infrastructure: tabular renderer, GEXF writer/reader, `export` dispatch

pub mod domain;
pub mod infrastructure;

pub use domain::{ExportArtifact, ExportError, ExportFormat, TabularExport};
pub use infrastructure::{export, read_gexf, to_gexf, to_tables};
