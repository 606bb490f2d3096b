//! Error types for linkgraph-table

use std::fmt;
use thiserror::Error;

/// Table error kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Delimited text could not be parsed
    Parse,
    /// A designated column does not exist in the dataset
    ColumnNotFound,
    /// Row width does not match the header
    Schema,
    /// Encoding errors (non UTF-8 input)
    Encoding,
    /// I/O errors
    IO,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::ColumnNotFound => "column_not_found",
            ErrorKind::Schema => "schema",
            ErrorKind::Encoding => "encoding",
            ErrorKind::IO => "io",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Table error type
#[derive(Debug, Error)]
#[error("[{kind}] {message}")]
pub struct TableError {
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
    pub kind: ErrorKind,
    pub message: String,
}

impl TableError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn column_not_found(column: impl Into<String>, available: &[String]) -> Self {
        Self::new(
            ErrorKind::ColumnNotFound,
            format!(
                "Column not found: '{}' (available: {})",
                column.into(),
                available.join(", ")
            ),
        )
    }

    pub fn schema(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Schema, message)
    }

    pub fn encoding(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Encoding, message)
    }
}

impl From<std::io::Error> for TableError {
    fn from(err: std::io::Error) -> Self {
        TableError::new(ErrorKind::IO, format!("I/O error: {}", err)).with_source(err)
    }
}

impl From<csv::Error> for TableError {
    fn from(err: csv::Error) -> Self {
        let message = match err.position() {
            Some(pos) => format!("CSV error at line {}: {}", pos.line(), err),
            None => format!("CSV error: {}", err),
        };
        TableError::parse(message).with_source(err)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, TableError>;
