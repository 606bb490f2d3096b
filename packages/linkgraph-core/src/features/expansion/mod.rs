// Record Expansion
//
// Converts rows with list-valued endpoints into one scalar edge candidate
// per (source, target) combination and filters out invalid rows.

pub mod infrastructure;

pub use infrastructure::{ExpansionStats, RecordExpander};
