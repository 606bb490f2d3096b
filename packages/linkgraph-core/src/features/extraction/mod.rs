// Entity Extraction
//
// Turns a raw text column into node identities: the cell itself, or the
// hashtags / mentions / URL hosts found in it.
//
// ## Architecture
// - Domain: `ExtractionMode`
// - Infrastructure: token patterns and the column extractor

pub mod domain;
pub mod infrastructure;

pub use domain::ExtractionMode;
pub use infrastructure::{extract_value, ColumnExtractor};
