//! Infrastructure adapters for tabular data
//!
//! - `delimited`: CSV reading/writing

pub mod delimited;

pub use delimited::{parse_csv, preview_lines, read_csv, write_table, write_table_to, ReadOptions};
