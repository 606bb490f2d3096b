// Export Domain Models

use linkgraph_table::{write_table, Table, TableError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    /// Node table + edge table
    #[default]
    Tabular,
    /// GEXF interchange document
    #[serde(alias = "interchange-document")]
    Gexf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Tabular => "tabular",
            ExportFormat::Gexf => "gexf",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "tabular" | "csv" => Ok(ExportFormat::Tabular),
            "gexf" | "interchange-document" => Ok(ExportFormat::Gexf),
            _ => Err(format!(
                "Unknown export format '{}'. Valid formats: tabular, gexf",
                s
            )),
        }
    }
}

/// Node table + edge table pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabularExport {
    pub nodes: Table,
    pub edges: Table,
}

impl TabularExport {
    /// Write both tables as CSV files
    pub fn write(&self, nodes_path: impl AsRef<Path>, edges_path: impl AsRef<Path>) -> Result<(), TableError> {
        write_table(nodes_path, &self.nodes)?;
        write_table(edges_path, &self.edges)
    }
}

/// Rendered graph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportArtifact {
    Tabular(TabularExport),
    Gexf(String),
}

impl ExportArtifact {
    pub fn format(&self) -> ExportFormat {
        match self {
            ExportArtifact::Tabular(_) => ExportFormat::Tabular,
            ExportArtifact::Gexf(_) => ExportFormat::Gexf,
        }
    }
}

/// Export errors
#[derive(Debug, Error)]
pub enum ExportError {
    /// GEXF export of a graph with no edges is not offered
    #[error("Graph has no edges; GEXF export is unavailable for an edge-less graph")]
    EmptyGraph,

    /// XML writing or parsing failed
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// Malformed XML attribute
    #[error("XML attribute error: {0}")]
    XmlAttribute(#[from] quick_xml::events::attributes::AttrError),

    /// Well-formed XML that is not a usable GEXF graph
    #[error("Invalid GEXF document: {0}")]
    InvalidDocument(String),

    /// Table construction or writing failed
    #[error("Table error: {0}")]
    Table(#[from] TableError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
