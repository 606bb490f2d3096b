//! Test data builders

use linkgraph_core::shared::models::AttrMap;
use linkgraph_core::{Dataset, GraphType, LinkGraph};

/// Builder for in-memory datasets; empty strings become missing cells
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl DatasetBuilder {
    pub fn new(columns: &[&str]) -> Self {
        Self {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row(mut self, cells: &[&str]) -> Self {
        self.rows.push(
            cells
                .iter()
                .map(|cell| (!cell.is_empty()).then(|| cell.to_string()))
                .collect(),
        );
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::from_rows(self.columns, self.rows).unwrap()
    }
}

/// Builder for graphs assembled directly, bypassing the pipeline
#[derive(Debug)]
pub struct GraphBuilder {
    graph: LinkGraph,
}

impl GraphBuilder {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph: LinkGraph::new(graph_type),
        }
    }

    pub fn edge(mut self, source: &str, target: &str) -> Self {
        self.graph.add_edge(source, target, AttrMap::new());
        self
    }

    pub fn edge_with(mut self, source: &str, target: &str, attrs: &[(&str, &str)]) -> Self {
        let attrs = attrs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        self.graph.add_edge(source, target, attrs);
        self
    }

    pub fn node_attr(mut self, id: &str, name: &str, value: &str) -> Self {
        self.graph.ensure_node(id);
        if let Some(node) = self.graph.node_mut(id) {
            node.attrs.insert(name.to_string(), value.to_string());
        }
        self
    }

    pub fn build(self) -> LinkGraph {
        self.graph
    }
}
