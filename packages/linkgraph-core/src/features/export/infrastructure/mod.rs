// Export Infrastructure

pub mod exporter;
pub mod gexf_reader;
pub mod gexf_writer;
pub mod tabular;

pub use exporter::export;
pub use gexf_reader::read_gexf;
pub use gexf_writer::{to_gexf, GEXF_NAMESPACE, GEXF_VERSION};
pub use tabular::{edge_table, node_table, to_tables};
