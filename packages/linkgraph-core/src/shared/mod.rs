//! Shared models and constants used across feature slices

pub mod constants;
pub mod models;

pub use models::{AttrMap, AttrValues, EdgeCandidate, ExtractedValue, Record};
