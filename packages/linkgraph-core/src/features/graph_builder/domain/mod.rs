// Graph Builder Domain Models
//
// `LinkGraph` wraps a petgraph `DiGraph` and enforces the network invariants
// itself, so every producer (assembler, GEXF reader) gets the same rules:
// - node identity is the string id, one node per id
// - no self-loops, no blank endpoints
// - simple types collapse repeated pairs (undirected: in either direction)
// - multi types keep parallel edges, keyed per endpoint pair

use ahash::AHashMap;
use petgraph::graph::{DiGraph, EdgeIndex, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::shared::models::AttrMap;

// ============================================================
// Graph Type
// ============================================================

/// Directedness and multiplicity of the network
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphType {
    #[default]
    DirectedSimple,
    UndirectedSimple,
    DirectedMulti,
    UndirectedMulti,
}

impl GraphType {
    pub const ALL: [GraphType; 4] = [
        GraphType::DirectedSimple,
        GraphType::UndirectedSimple,
        GraphType::DirectedMulti,
        GraphType::UndirectedMulti,
    ];

    pub fn from_flags(directed: bool, multi: bool) -> Self {
        match (directed, multi) {
            (true, false) => GraphType::DirectedSimple,
            (false, false) => GraphType::UndirectedSimple,
            (true, true) => GraphType::DirectedMulti,
            (false, true) => GraphType::UndirectedMulti,
        }
    }

    pub fn is_directed(&self) -> bool {
        matches!(self, GraphType::DirectedSimple | GraphType::DirectedMulti)
    }

    pub fn is_multi(&self) -> bool {
        matches!(self, GraphType::DirectedMulti | GraphType::UndirectedMulti)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::DirectedSimple => "directed-simple",
            GraphType::UndirectedSimple => "undirected-simple",
            GraphType::DirectedMulti => "directed-multi",
            GraphType::UndirectedMulti => "undirected-multi",
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown graph type '{}'. Valid types: {}",
                    s,
                    Self::ALL.map(|t| t.as_str()).join(", ")
                )
            })
    }
}

// ============================================================
// Attribute Conflict Policy
// ============================================================

/// What to do when a source node receives a different value for an
/// attribute it already has
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AttributeConflictPolicy {
    /// Later rows overwrite earlier ones
    #[default]
    LastWriteWins,
    /// The first value seen is kept
    KeepFirst,
    /// Conflicting values abort assembly
    Reject,
}

impl AttributeConflictPolicy {
    pub const ALL: [AttributeConflictPolicy; 3] = [
        AttributeConflictPolicy::LastWriteWins,
        AttributeConflictPolicy::KeepFirst,
        AttributeConflictPolicy::Reject,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AttributeConflictPolicy::LastWriteWins => "last-write-wins",
            AttributeConflictPolicy::KeepFirst => "keep-first",
            AttributeConflictPolicy::Reject => "reject",
        }
    }
}

impl FromStr for AttributeConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.as_str() == normalized)
            .ok_or_else(|| {
                format!(
                    "Unknown conflict policy '{}'. Valid policies: {}",
                    s,
                    Self::ALL.map(|p| p.as_str()).join(", ")
                )
            })
    }
}

// ============================================================
// Nodes and Edges
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    pub id: String,
    #[serde(default)]
    pub attrs: AttrMap,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Parallel-edge key, unique per endpoint pair (always 0 in simple graphs)
    pub key: usize,
    #[serde(default)]
    pub attrs: AttrMap,
}

/// Borrowed view of one edge with resolved endpoint ids
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeView<'a> {
    pub source: &'a str,
    pub target: &'a str,
    pub key: usize,
    pub attrs: &'a AttrMap,
}

/// Outcome of `LinkGraph::add_edge`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeInsertion {
    /// A new edge was created with this key
    Inserted { key: usize },
    /// A simple graph already had this edge; attributes were merged into it
    Collapsed,
    /// Self-loop or blank endpoint
    Rejected,
}

/// Node and edge counts, for display
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

// ============================================================
// LinkGraph
// ============================================================

/// Attributed network built from tabular data
///
/// Nodes and edges iterate in insertion order.
#[derive(Debug, Clone)]
pub struct LinkGraph {
    graph_type: GraphType,
    graph: DiGraph<GraphNode, GraphEdge>,
    index: AHashMap<String, NodeIndex>,
}

impl LinkGraph {
    pub fn new(graph_type: GraphType) -> Self {
        Self {
            graph_type,
            graph: DiGraph::new(),
            index: AHashMap::new(),
        }
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.node_count(),
            edges: self.edge_count(),
        }
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.index.get(id).map(|&idx| &self.graph[idx])
    }

    pub fn node_mut(&mut self, id: &str) -> Option<&mut GraphNode> {
        let idx = *self.index.get(id)?;
        Some(&mut self.graph[idx])
    }

    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.graph.node_weights()
    }

    pub fn nodes_mut(&mut self) -> impl Iterator<Item = &mut GraphNode> {
        self.graph.node_weights_mut()
    }

    pub fn edges(&self) -> impl Iterator<Item = EdgeView<'_>> {
        self.graph.edge_references().map(move |edge| EdgeView {
            source: &self.graph[edge.source()].id,
            target: &self.graph[edge.target()].id,
            key: edge.weight().key,
            attrs: &edge.weight().attrs,
        })
    }

    /// Edges sharing this edge identity (both directions when undirected)
    pub fn edges_between(&self, source: &str, target: &str) -> Vec<EdgeView<'_>> {
        match (self.index.get(source), self.index.get(target)) {
            (Some(&a), Some(&b)) => self
                .connecting(a, b)
                .into_iter()
                .filter_map(|idx| self.view(idx))
                .collect(),
            _ => Vec::new(),
        }
    }

    pub fn has_edge(&self, source: &str, target: &str) -> bool {
        !self.edges_between(source, target).is_empty()
    }

    /// Sorted union of node attribute names
    pub fn node_attribute_names(&self) -> BTreeSet<&str> {
        self.nodes()
            .flat_map(|node| node.attrs.keys().map(String::as_str))
            .collect()
    }

    /// Sorted union of edge attribute names
    pub fn edge_attribute_names(&self) -> BTreeSet<&str> {
        self.graph
            .edge_weights()
            .flat_map(|edge| edge.attrs.keys().map(String::as_str))
            .collect()
    }

    /// Node for `id`, created if absent; `None` for a blank id
    pub fn ensure_node(&mut self, id: &str) -> Option<NodeIndex> {
        if id.trim().is_empty() {
            return None;
        }
        if let Some(&idx) = self.index.get(id) {
            return Some(idx);
        }
        let idx = self.graph.add_node(GraphNode {
            id: id.to_string(),
            attrs: AttrMap::new(),
        });
        self.index.insert(id.to_string(), idx);
        Some(idx)
    }

    /// Insert an edge under this graph type's identity rules
    ///
    /// Endpoints are created on demand. In simple graphs an existing edge
    /// absorbs `attrs` (later values overwrite earlier ones).
    pub fn add_edge(&mut self, source: &str, target: &str, attrs: AttrMap) -> EdgeInsertion {
        if source == target || source.trim().is_empty() || target.trim().is_empty() {
            return EdgeInsertion::Rejected;
        }
        let (a, b) = match (self.ensure_node(source), self.ensure_node(target)) {
            (Some(a), Some(b)) => (a, b),
            _ => return EdgeInsertion::Rejected,
        };

        let existing = self.connecting(a, b);

        if !self.graph_type.is_multi() {
            if let Some(&idx) = existing.first() {
                self.graph[idx].attrs.extend(attrs);
                return EdgeInsertion::Collapsed;
            }
        }

        let used: BTreeSet<usize> = existing.iter().map(|&idx| self.graph[idx].key).collect();
        let key = (0..).find(|k| !used.contains(k)).unwrap_or(used.len());
        self.graph.add_edge(a, b, GraphEdge { key, attrs });
        EdgeInsertion::Inserted { key }
    }

    fn connecting(&self, a: NodeIndex, b: NodeIndex) -> Vec<EdgeIndex> {
        let mut found: Vec<EdgeIndex> = self.graph.edges_connecting(a, b).map(|e| e.id()).collect();
        if !self.graph_type.is_directed() && a != b {
            found.extend(self.graph.edges_connecting(b, a).map(|e| e.id()));
        }
        // petgraph yields the newest edge first; callers expect insertion order
        found.sort();
        found
    }

    fn view(&self, idx: EdgeIndex) -> Option<EdgeView<'_>> {
        let (a, b) = self.graph.edge_endpoints(idx)?;
        let edge = self.graph.edge_weight(idx)?;
        Some(EdgeView {
            source: &self.graph[a].id,
            target: &self.graph[b].id,
            key: edge.key,
            attrs: &edge.attrs,
        })
    }
}
