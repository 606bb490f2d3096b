//! Node / edge table rendering
//!
//! Node table: `Id, Label, <node attributes...>`
//! Edge table: `Source, Target, <edge attributes...>`
//!
//! Attribute columns are the sorted union of names across the graph; cells
//! for attributes an element lacks are empty. Parallel-edge keys are not
//! emitted.

use linkgraph_table::Table;

use crate::features::export::domain::{ExportError, TabularExport};
use crate::features::graph_builder::LinkGraph;
use crate::shared::constants::{
    EDGE_SOURCE_COLUMN, EDGE_TARGET_COLUMN, NODE_ID_COLUMN, NODE_LABEL_COLUMN,
};

pub fn to_tables(graph: &LinkGraph) -> Result<TabularExport, ExportError> {
    Ok(TabularExport {
        nodes: node_table(graph)?,
        edges: edge_table(graph)?,
    })
}

pub fn node_table(graph: &LinkGraph) -> Result<Table, ExportError> {
    let attr_names: Vec<&str> = graph.node_attribute_names().into_iter().collect();

    let mut headers = vec![NODE_ID_COLUMN.to_string(), NODE_LABEL_COLUMN.to_string()];
    headers.extend(attr_names.iter().map(|name| name.to_string()));
    let mut table = Table::new(headers);

    for node in graph.nodes() {
        let mut row = vec![node.id.clone(), node.id.clone()];
        row.extend(
            attr_names
                .iter()
                .map(|name| node.attrs.get(*name).cloned().unwrap_or_default()),
        );
        table.push_row(row)?;
    }

    Ok(table)
}

pub fn edge_table(graph: &LinkGraph) -> Result<Table, ExportError> {
    let attr_names: Vec<&str> = graph.edge_attribute_names().into_iter().collect();

    let mut headers = vec![EDGE_SOURCE_COLUMN.to_string(), EDGE_TARGET_COLUMN.to_string()];
    headers.extend(attr_names.iter().map(|name| name.to_string()));
    let mut table = Table::new(headers);

    for edge in graph.edges() {
        let mut row = vec![edge.source.to_string(), edge.target.to_string()];
        row.extend(
            attr_names
                .iter()
                .map(|name| edge.attrs.get(*name).cloned().unwrap_or_default()),
        );
        table.push_row(row)?;
    }

    Ok(table)
}
