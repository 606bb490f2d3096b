//! linkgraph-table - tabular input and output for linkgraph
//!
//! Owns everything that touches delimited files so the graph pipeline only
//! ever sees in-memory data.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use linkgraph_table::{read_csv, write_table, Dataset, ReadOptions};
//!
//! // 1. Look at the raw head of the file to decide how many lines to skip
//! let head = linkgraph_table::preview_lines("tweets.csv", 10)?;
//!
//! // 2. Read the dataset
//! let dataset = read_csv("tweets.csv", &ReadOptions::default().skip_rows(2))?;
//!
//! // 3. Merge several exports of the same source
//! let merged = Dataset::merge([dataset, read_csv("more.csv", &ReadOptions::default())?]);
//!
//! // 4. Persist node / edge tables
//! write_table("nodes.csv", &node_table)?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, TableError};

pub use domain::{Dataset, Row, Table};
pub use infrastructure::{
    parse_csv, preview_lines, read_csv, write_table, write_table_to, ReadOptions,
};
