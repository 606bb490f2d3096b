// Attribute Mapper
//
// Joins a side-loaded attribute table onto existing nodes by lowercased key.
// Every node ends with the same attribute fields: matched nodes get the row's
// values, unmatched nodes get `NO_DATA`.

use ahash::AHashMap;
use linkgraph_table::{Dataset, TableError};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::features::graph_builder::LinkGraph;
use crate::shared::constants::NO_DATA;

/// Outcome of one mapping run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingReport {
    /// Attribute fields written to every node
    pub fields: Vec<String>,
    pub matched: usize,
    pub unmatched: usize,
}

/// Joins attribute tables onto graph nodes
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeMapper;

impl AttributeMapper {
    pub fn new() -> Self {
        Self
    }

    /// Merge `table` onto the nodes of `graph`
    ///
    /// Fails before touching the graph when `key_column` is absent. Rows with
    /// a missing key are ignored; when keys repeat, the last row wins. A
    /// matched row's missing cell is written as an empty value.
    pub fn map_attributes(
        &self,
        graph: &mut LinkGraph,
        table: &Dataset,
        key_column: &str,
    ) -> Result<MappingReport, TableError> {
        let key_idx = table
            .column_index(key_column)
            .ok_or_else(|| TableError::column_not_found(key_column, table.columns()))?;

        let fields: Vec<(usize, String)> = table
            .columns()
            .iter()
            .enumerate()
            .filter(|(idx, _)| *idx != key_idx)
            .map(|(idx, name)| (idx, name.clone()))
            .collect();

        let mut lookup: AHashMap<String, usize> = AHashMap::new();
        let mut duplicates = 0usize;
        for (row_idx, row) in table.rows().enumerate() {
            if let Some(key) = row.values()[key_idx].as_deref() {
                if lookup.insert(key.to_lowercase(), row_idx).is_some() {
                    duplicates += 1;
                }
            }
        }
        if duplicates > 0 {
            warn!(duplicates, key_column, "attribute table has repeated keys; last row wins");
        }

        let rows: Vec<_> = table.rows().collect();
        let mut report = MappingReport {
            fields: fields.iter().map(|(_, name)| name.clone()).collect(),
            ..MappingReport::default()
        };

        for node in graph.nodes_mut() {
            match lookup.get(&node.id.to_lowercase()) {
                Some(&row_idx) => {
                    let values = rows[row_idx].values();
                    for (idx, name) in &fields {
                        let value = values[*idx].clone().unwrap_or_default();
                        node.attrs.insert(name.clone(), value);
                    }
                    report.matched += 1;
                }
                None => {
                    for (_, name) in &fields {
                        node.attrs.insert(name.clone(), NO_DATA.to_string());
                    }
                    report.unmatched += 1;
                }
            }
        }

        info!(
            key_column,
            fields = report.fields.len(),
            matched = report.matched,
            unmatched = report.unmatched,
            "mapped node attributes"
        );
        Ok(report)
    }
}
