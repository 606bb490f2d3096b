// Expansion Infrastructure

pub mod expander;

pub use expander::{ExpansionStats, RecordExpander};
