//! GEXF document reader
//!
//! Reads documents produced by `gexf_writer` back into a `LinkGraph`, and
//! accepts plain GEXF 1.2 from other tools: when the meta description carries
//! no graph type, directedness comes from `defaultedgetype` and multiplicity
//! from the presence of parallel edges.

use std::collections::HashSet;

use ahash::AHashMap;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use super::gexf_writer::GRAPH_TYPE_PREFIX;
use crate::features::export::domain::ExportError;
use crate::features::graph_builder::{EdgeInsertion, GraphType, LinkGraph};
use crate::shared::models::AttrMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum AttrClass {
    Node,
    Edge,
}

#[derive(Debug, Default)]
struct GexfState {
    titles: AHashMap<(AttrClass, String), String>,
    declaring: Option<AttrClass>,
    in_description: bool,
    declared_type: Option<GraphType>,
    directed: Option<bool>,
    nodes: Vec<(String, AttrMap)>,
    edges: Vec<(String, String, AttrMap)>,
    owner: Option<AttrClass>,
}

impl GexfState {
    fn open(&mut self, element: &BytesStart<'_>, has_children: bool) -> Result<(), ExportError> {
        match element.local_name().as_ref() {
            b"graph" => {
                let edge_type = attribute(element, "defaultedgetype")?;
                self.directed = Some(edge_type.as_deref() == Some("directed"));
            }
            b"attributes" if has_children => {
                self.declaring = match attribute(element, "class")?.as_deref() {
                    Some("edge") => Some(AttrClass::Edge),
                    _ => Some(AttrClass::Node),
                };
            }
            b"attribute" => {
                if let Some(class) = self.declaring {
                    let id = required(element, "attribute", "id")?;
                    let title = attribute(element, "title")?.unwrap_or_else(|| id.clone());
                    self.titles.insert((class, id), title);
                }
            }
            b"description" => self.in_description = has_children,
            b"node" => {
                let id = required(element, "node", "id")?;
                self.nodes.push((id, AttrMap::new()));
                self.owner = has_children.then_some(AttrClass::Node);
            }
            b"edge" => {
                let source = required(element, "edge", "source")?;
                let target = required(element, "edge", "target")?;
                self.edges.push((source, target, AttrMap::new()));
                self.owner = has_children.then_some(AttrClass::Edge);
            }
            b"attvalue" => {
                let Some(owner) = self.owner else {
                    return Ok(());
                };
                let id = required(element, "attvalue", "for")?;
                let value = attribute(element, "value")?.unwrap_or_default();
                let name = self.titles.get(&(owner, id.clone())).cloned().unwrap_or(id);
                let attrs = match owner {
                    AttrClass::Node => self.nodes.last_mut().map(|(_, attrs)| attrs),
                    AttrClass::Edge => self.edges.last_mut().map(|(_, _, attrs)| attrs),
                };
                if let Some(attrs) = attrs {
                    attrs.insert(name, value);
                }
            }
            _ => {}
        }
        Ok(())
    }

    fn close(&mut self, name: &[u8]) {
        match name {
            b"attributes" => self.declaring = None,
            b"description" => self.in_description = false,
            b"node" | b"edge" => self.owner = None,
            _ => {}
        }
    }

    fn description(&mut self, text: &str) {
        for token in text.split_whitespace() {
            if let Some(value) = token.strip_prefix(GRAPH_TYPE_PREFIX) {
                match value.parse::<GraphType>() {
                    Ok(graph_type) => self.declared_type = Some(graph_type),
                    Err(e) => warn!(error = %e, "ignoring graph type in GEXF description"),
                }
            }
        }
    }

    fn graph_type(&self) -> GraphType {
        if let Some(graph_type) = self.declared_type {
            return graph_type;
        }
        let directed = self.directed.unwrap_or(false);
        let mut seen = HashSet::new();
        let multi = self.edges.iter().any(|(source, target, _)| {
            let pair = if directed || source <= target {
                (source.as_str(), target.as_str())
            } else {
                (target.as_str(), source.as_str())
            };
            !seen.insert(pair)
        });
        GraphType::from_flags(directed, multi)
    }

    fn into_graph(self) -> LinkGraph {
        let mut graph = LinkGraph::new(self.graph_type());

        for (id, attrs) in self.nodes {
            if graph.ensure_node(&id).is_none() {
                warn!("skipping GEXF node with blank id");
                continue;
            }
            if let Some(node) = graph.node_mut(&id) {
                node.attrs.extend(attrs);
            }
        }

        for (source, target, attrs) in self.edges {
            if graph.add_edge(&source, &target, attrs) == EdgeInsertion::Rejected {
                warn!(%source, %target, "skipping GEXF self-loop or blank endpoint");
            }
        }

        graph
    }
}

fn attribute(element: &BytesStart<'_>, name: &str) -> Result<Option<String>, ExportError> {
    match element.try_get_attribute(name)? {
        Some(attr) => Ok(Some(attr.unescape_value()?.into_owned())),
        None => Ok(None),
    }
}

fn required(element: &BytesStart<'_>, tag: &str, name: &str) -> Result<String, ExportError> {
    attribute(element, name)?
        .ok_or_else(|| ExportError::InvalidDocument(format!("<{}> without '{}' attribute", tag, name)))
}

/// Parse a GEXF document into a `LinkGraph`
pub fn read_gexf(document: &str) -> Result<LinkGraph, ExportError> {
    let mut reader = Reader::from_str(document);
    let mut state = GexfState::default();
    let mut saw_root = false;

    loop {
        match reader.read_event()? {
            Event::Start(element) => {
                saw_root |= element.local_name().as_ref() == b"gexf";
                state.open(&element, true)?;
            }
            Event::Empty(element) => state.open(&element, false)?,
            Event::End(element) => state.close(element.local_name().as_ref()),
            Event::Text(text) if state.in_description => {
                let text = text.unescape()?;
                state.description(&text);
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !saw_root {
        return Err(ExportError::InvalidDocument("missing <gexf> root element".into()));
    }

    let graph = state.into_graph();
    debug!(
        graph_type = %graph.graph_type(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "parsed GEXF document"
    );
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::export::infrastructure::gexf_writer::to_gexf;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_reads_back_written_document() {
        let mut graph = LinkGraph::new(GraphType::DirectedMulti);
        let mut attrs = AttrMap::new();
        attrs.insert("lang".into(), "<en>".into());
        graph.add_edge("alice", "bob", attrs);
        graph.add_edge("alice", "bob", AttrMap::new());
        graph
            .node_mut("bob")
            .unwrap()
            .attrs
            .insert("followers".into(), "No Data".into());

        let parsed = read_gexf(&to_gexf(&graph).unwrap()).unwrap();

        assert_eq!(parsed.graph_type(), GraphType::DirectedMulti);
        assert_eq!(parsed.stats(), graph.stats());
        assert_eq!(parsed.node("bob").unwrap().attrs["followers"], "No Data");
        let between = parsed.edges_between("alice", "bob");
        assert_eq!(between.len(), 2);
        assert_eq!(between[0].attrs["lang"], "<en>");
        assert!(between[1].attrs.is_empty());
    }

    #[test]
    fn test_infers_type_without_description() {
        let doc = r#"<?xml version="1.0" encoding="UTF-8"?>
<gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
  <graph defaultedgetype="undirected">
    <nodes>
      <node id="a" label="a"/>
      <node id="b" label="b"/>
    </nodes>
    <edges>
      <edge id="0" source="a" target="b"/>
      <edge id="1" source="b" target="a"/>
    </edges>
  </graph>
</gexf>"#;

        let graph = read_gexf(doc).unwrap();
        assert_eq!(graph.graph_type(), GraphType::UndirectedMulti);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_edge_without_target_is_invalid() {
        let doc = r#"<gexf><graph><edges><edge id="0" source="a"/></edges></graph></gexf>"#;
        assert!(matches!(read_gexf(doc), Err(ExportError::InvalidDocument(_))));
    }

    #[test]
    fn test_non_gexf_root_is_invalid() {
        assert!(matches!(
            read_gexf("<graphml></graphml>"),
            Err(ExportError::InvalidDocument(_))
        ));
    }
}
