//! Pipeline configuration
//!
//! - `PipelineConfig`: builder API plus versioned YAML (`version: 1`)
//! - `Validatable`: shape checks run on `build()` and on every YAML load
//!
//! # Example
//!
//! ```yaml
//! version: 1
//! pipeline:
//!   source_column: text
//!   target_column: user
//!   source_processing: mentions-freetext
//!   attribute_columns: [lang]
//!   graph_type: directed-multi
//!   export_format: gexf
//!   attribute_table:
//!     key_column: handle
//! ```

pub mod error;
pub mod io;
pub mod pipeline_config;
pub mod validation;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigFileV1;
pub use pipeline_config::{AttributeTableConfig, PipelineConfig};
pub use validation::Validatable;
