// Attribute Mapping
//
// Side-loads node attributes from a second table, joined on a key column.

pub mod infrastructure;

pub use infrastructure::{AttributeMapper, MappingReport};
