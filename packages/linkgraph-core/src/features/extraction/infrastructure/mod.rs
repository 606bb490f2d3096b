// Extraction Infrastructure

pub mod extractor;
pub mod patterns;

pub use extractor::{extract_value, ColumnExtractor};
