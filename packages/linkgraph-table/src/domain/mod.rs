//! Domain layer for tabular data
//!
//! # Domain Models
//!
//! - `Dataset`: rows of named, possibly-missing text cells (pipeline input)
//! - `Row`: borrowed view of one dataset row
//! - `Table`: fully populated header + body grid (pipeline output)
//!
//! # Examples
//!
//! ```rust
//! use linkgraph_table::Dataset;
//!
//! let mut dataset = Dataset::new(vec!["from".to_string(), "to".to_string()]);
//! dataset
//!     .push_row(vec![Some("alice".to_string()), None])
//!     .unwrap();
//!
//! assert_eq!(dataset.len(), 1);
//! assert_eq!(dataset.column("to").unwrap(), vec![None]);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::{Result, TableError};

// ═══════════════════════════════════════════════════════════════════════════
// Dataset
// ═══════════════════════════════════════════════════════════════════════════

/// In-memory tabular dataset
///
/// Every row has exactly `columns.len()` cells. A cell is `None` when the
/// source file had no value for it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Dataset {
    /// Create an empty dataset with the given header
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Create a dataset from a header and rows, checking row widths
    pub fn from_rows(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Result<Self> {
        let mut dataset = Self::new(columns);
        for row in rows {
            dataset.push_row(row)?;
        }
        Ok(dataset)
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<Option<String>>) -> Result<()> {
        if row.len() != self.columns.len() {
            return Err(TableError::schema(format!(
                "row {} has {} fields, header has {}",
                self.rows.len() + 1,
                row.len(),
                self.columns.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// All values of one column, in row order
    pub fn column(&self, name: &str) -> Result<Vec<Option<&str>>> {
        let idx = self
            .column_index(name)
            .ok_or_else(|| TableError::column_not_found(name, &self.columns))?;
        Ok(self.rows.iter().map(|row| row[idx].as_deref()).collect())
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        self.rows.iter().map(move |values| Row {
            columns: &self.columns,
            values,
        })
    }

    /// Merge datasets by column union
    ///
    /// Columns keep first-seen order; rows keep input order. Cells for columns
    /// a dataset does not have are missing.
    pub fn merge(datasets: impl IntoIterator<Item = Dataset>) -> Dataset {
        let datasets: Vec<Dataset> = datasets.into_iter().collect();

        let mut columns: Vec<String> = Vec::new();
        let mut positions: HashMap<String, usize> = HashMap::new();
        for dataset in &datasets {
            for column in &dataset.columns {
                if !positions.contains_key(column) {
                    positions.insert(column.clone(), columns.len());
                    columns.push(column.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(datasets.iter().map(Dataset::len).sum());
        for dataset in datasets {
            let mapping: Vec<usize> = dataset.columns.iter().map(|c| positions[c]).collect();
            for row in dataset.rows {
                let mut merged = vec![None; columns.len()];
                for (value, &target) in row.into_iter().zip(&mapping) {
                    merged[target] = value;
                }
                rows.push(merged);
            }
        }

        Dataset { columns, rows }
    }
}

/// Borrowed view of one dataset row
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    columns: &'a [String],
    values: &'a [Option<String>],
}

impl<'a> Row<'a> {
    /// Cell value by column name; `None` when the column is unknown or the cell is missing
    pub fn get(&self, column: &str) -> Option<&'a str> {
        self.columns
            .iter()
            .position(|c| c == column)
            .and_then(|idx| self.values[idx].as_deref())
    }

    pub fn values(&self) -> &'a [Option<String>] {
        self.values
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Table
// ═══════════════════════════════════════════════════════════════════════════

/// Output grid: a header plus fully populated rows
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) -> Result<()> {
        if row.len() != self.headers.len() {
            return Err(TableError::schema(format!(
                "table row has {} fields, header has {}",
                row.len(),
                self.headers.len()
            )));
        }
        self.rows.push(row);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }
}
