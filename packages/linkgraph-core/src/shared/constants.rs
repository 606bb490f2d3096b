//! Well-known names and values

/// Attribute value written for nodes with no matching attribute-table row
pub const NO_DATA: &str = "No Data";

/// Node table headers
pub const NODE_ID_COLUMN: &str = "Id";
pub const NODE_LABEL_COLUMN: &str = "Label";

/// Edge table headers
pub const EDGE_SOURCE_COLUMN: &str = "Source";
pub const EDGE_TARGET_COLUMN: &str = "Target";

/// Raw lines shown when previewing an input file
pub const PREVIEW_LINES: usize = 10;

/// Configuration file schema versions this build understands
pub const SUPPORTED_CONFIG_VERSIONS: &[u32] = &[1];
