//! Custom assertions for graph verification

use linkgraph_core::LinkGraph;

pub fn assert_counts(graph: &LinkGraph, nodes: usize, edges: usize) {
    assert_eq!(
        (graph.node_count(), graph.edge_count()),
        (nodes, edges),
        "Expected {nodes} nodes / {edges} edges. Nodes: {:?}",
        graph.nodes().map(|n| n.id.as_str()).collect::<Vec<_>>()
    );
}

pub fn assert_has_edge(graph: &LinkGraph, source: &str, target: &str) {
    assert!(
        graph.has_edge(source, target),
        "Expected edge {source} -> {target}, edges: {:?}",
        edge_pairs(graph)
    );
}

pub fn assert_no_self_loops(graph: &LinkGraph) {
    for edge in graph.edges() {
        assert_ne!(edge.source, edge.target, "self-loop on '{}'", edge.source);
    }
}

pub fn node_ids(graph: &LinkGraph) -> Vec<&str> {
    graph.nodes().map(|n| n.id.as_str()).collect()
}

pub fn edge_pairs(graph: &LinkGraph) -> Vec<(&str, &str)> {
    graph.edges().map(|e| (e.source, e.target)).collect()
}
