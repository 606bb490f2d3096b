//! Shared data models
//!
//! - `ExtractedValue`: scalar / list / missing cell after extraction
//! - `Record`: one row with source, target and attribute values
//! - `EdgeCandidate`: scalar edge row produced by expansion

pub mod record;
pub mod value;

pub use record::{AttrMap, AttrValues, EdgeCandidate, Record};
pub use value::ExtractedValue;
