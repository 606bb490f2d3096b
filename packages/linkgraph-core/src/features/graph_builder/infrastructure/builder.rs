// Graph Assembler - Main Entry Point
//
// Converts expanded edge candidates → LinkGraph:
// - nodes in first-seen order (source before target)
// - edges per the graph type's identity rules
// - selected attribute columns copied onto the edge and the source node

use tracing::{debug, info};

use crate::features::graph_builder::domain::{
    AttributeConflictPolicy, EdgeInsertion, GraphType, LinkGraph,
};
use crate::shared::models::{AttrMap, EdgeCandidate};

// ============================================================
// Graph Assembler
// ============================================================

/// Builds a `LinkGraph` from edge candidates
///
/// ## Usage
/// ```text
/// let assembler = GraphAssembler::new(AttributeConflictPolicy::LastWriteWins);
/// let graph = assembler.assemble(&candidates, GraphType::DirectedSimple, &columns)?;
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphAssembler {
    conflict_policy: AttributeConflictPolicy,
}

impl GraphAssembler {
    pub fn new(conflict_policy: AttributeConflictPolicy) -> Self {
        Self { conflict_policy }
    }

    pub fn conflict_policy(&self) -> AttributeConflictPolicy {
        self.conflict_policy
    }

    /// Build a fresh graph
    ///
    /// Empty input yields an empty graph. Only `attribute_columns` are copied
    /// from each candidate; missing values are skipped.
    pub fn assemble(
        &self,
        candidates: &[EdgeCandidate],
        graph_type: GraphType,
        attribute_columns: &[String],
    ) -> Result<LinkGraph, GraphBuilderError> {
        let mut graph = LinkGraph::new(graph_type);
        let mut collapsed = 0usize;

        for candidate in candidates {
            let attrs: AttrMap = candidate
                .selected_attributes(attribute_columns)
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();

            match graph.add_edge(&candidate.source, &candidate.target, attrs.clone()) {
                EdgeInsertion::Rejected => {
                    // Self-loop or blank endpoint that bypassed expansion
                    debug!(
                        source = %candidate.source,
                        target = %candidate.target,
                        "skipped invalid edge candidate"
                    );
                    continue;
                }
                EdgeInsertion::Collapsed => collapsed += 1,
                EdgeInsertion::Inserted { .. } => {}
            }

            if !attrs.is_empty() {
                self.write_source_attributes(&mut graph, &candidate.source, attrs)?;
            }
        }

        info!(
            graph_type = %graph_type,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            collapsed,
            "assembled graph"
        );
        Ok(graph)
    }

    fn write_source_attributes(
        &self,
        graph: &mut LinkGraph,
        source: &str,
        attrs: AttrMap,
    ) -> Result<(), GraphBuilderError> {
        let policy = self.conflict_policy;
        let node = graph
            .node_mut(source)
            .ok_or_else(|| GraphBuilderError::MissingNode(source.to_string()))?;

        for (name, value) in attrs {
            match node.attrs.get(&name).cloned() {
                None => {
                    node.attrs.insert(name, value);
                }
                Some(existing) if existing == value => {}
                Some(existing) => match policy {
                    AttributeConflictPolicy::LastWriteWins => {
                        node.attrs.insert(name, value);
                    }
                    AttributeConflictPolicy::KeepFirst => {}
                    AttributeConflictPolicy::Reject => {
                        return Err(GraphBuilderError::AttributeConflict {
                            node: source.to_string(),
                            attribute: name,
                            existing,
                            incoming: value,
                        });
                    }
                },
            }
        }
        Ok(())
    }
}

// ============================================================
// Error Types
// ============================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphBuilderError {
    #[error(
        "Conflicting values for attribute '{attribute}' on node '{node}': '{existing}' vs '{incoming}'"
    )]
    AttributeConflict {
        node: String,
        attribute: String,
        existing: String,
        incoming: String,
    },

    #[error("Node '{0}' missing after edge insertion")]
    MissingNode(String),
}

// ============================================================
// Tests
// ============================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_input_is_empty_graph() {
        let graph = GraphAssembler::default()
            .assemble(&[], GraphType::UndirectedMulti, &[])
            .unwrap();
        assert_eq!(graph.node_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.graph_type(), GraphType::UndirectedMulti);
    }

    #[test]
    fn test_attributes_land_on_source_node_and_edge() {
        let candidates = vec![EdgeCandidate::new("alice", "bob")
            .with_attribute("lang", "en")
            .with_attribute("ignored", "x")];

        let graph = GraphAssembler::default()
            .assemble(&candidates, GraphType::DirectedSimple, &columns(&["lang"]))
            .unwrap();

        let alice = graph.node("alice").unwrap();
        assert_eq!(alice.attrs.get("lang").map(String::as_str), Some("en"));
        assert!(!alice.attrs.contains_key("ignored"));
        assert!(graph.node("bob").unwrap().attrs.is_empty());

        let edge = graph.edges().next().unwrap();
        assert_eq!(edge.attrs.get("lang").map(String::as_str), Some("en"));
    }

    #[test]
    fn test_last_write_wins_by_default() {
        let candidates = vec![
            EdgeCandidate::new("a", "b").with_attribute("lang", "en"),
            EdgeCandidate::new("a", "c").with_attribute("lang", "fr"),
        ];
        let graph = GraphAssembler::default()
            .assemble(&candidates, GraphType::DirectedSimple, &columns(&["lang"]))
            .unwrap();
        assert_eq!(graph.node("a").unwrap().attrs["lang"], "fr");
    }

    #[test]
    fn test_keep_first_policy() {
        let candidates = vec![
            EdgeCandidate::new("a", "b").with_attribute("lang", "en"),
            EdgeCandidate::new("a", "c").with_attribute("lang", "fr"),
        ];
        let graph = GraphAssembler::new(AttributeConflictPolicy::KeepFirst)
            .assemble(&candidates, GraphType::DirectedSimple, &columns(&["lang"]))
            .unwrap();
        assert_eq!(graph.node("a").unwrap().attrs["lang"], "en");
    }

    #[test]
    fn test_reject_policy_reports_conflict() {
        let candidates = vec![
            EdgeCandidate::new("a", "b").with_attribute("lang", "en"),
            EdgeCandidate::new("a", "c").with_attribute("lang", "en"),
            EdgeCandidate::new("a", "d").with_attribute("lang", "fr"),
        ];
        let err = GraphAssembler::new(AttributeConflictPolicy::Reject)
            .assemble(&candidates, GraphType::DirectedSimple, &columns(&["lang"]))
            .unwrap_err();

        assert_eq!(
            err,
            GraphBuilderError::AttributeConflict {
                node: "a".into(),
                attribute: "lang".into(),
                existing: "en".into(),
                incoming: "fr".into(),
            }
        );
    }

    #[test]
    fn test_missing_attribute_does_not_overwrite() {
        let mut second = EdgeCandidate::new("a", "c");
        second.attributes.push(("lang".to_string(), None));
        let candidates = vec![EdgeCandidate::new("a", "b").with_attribute("lang", "en"), second];

        let graph = GraphAssembler::new(AttributeConflictPolicy::Reject)
            .assemble(&candidates, GraphType::DirectedSimple, &columns(&["lang"]))
            .unwrap();
        assert_eq!(graph.node("a").unwrap().attrs["lang"], "en");
    }

    #[test]
    fn test_multi_edges_keep_their_own_attributes() {
        let candidates = vec![
            EdgeCandidate::new("a", "b").with_attribute("id", "1"),
            EdgeCandidate::new("a", "b").with_attribute("id", "2"),
        ];
        let graph = GraphAssembler::default()
            .assemble(&candidates, GraphType::DirectedMulti, &columns(&["id"]))
            .unwrap();

        let ids: Vec<&str> = graph
            .edges_between("a", "b")
            .iter()
            .map(|e| e.attrs["id"].as_str())
            .collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
