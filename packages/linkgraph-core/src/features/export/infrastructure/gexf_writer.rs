//! GEXF 1.2 document writer
//!
//! ```text
//! <gexf xmlns="http://www.gexf.net/1.2draft" version="1.2">
//!   <meta><creator/><description>graph_type=directed-multi</description></meta>
//!   <graph mode="static" defaultedgetype="directed">
//!     <attributes class="node">...</attributes>
//!     <attributes class="edge">...</attributes>
//!     <nodes>...</nodes>
//!     <edges>...</edges>
//!   </graph>
//! </gexf>
//! ```
//!
//! GEXF has no multigraph flag, so the graph type is recorded in the meta
//! description and read back by `gexf_reader`.

use std::io::Write;

use ahash::AHashMap;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use tracing::debug;

use crate::features::export::domain::ExportError;
use crate::features::graph_builder::LinkGraph;
use crate::shared::models::AttrMap;

pub const GEXF_NAMESPACE: &str = "http://www.gexf.net/1.2draft";
pub const GEXF_VERSION: &str = "1.2";
pub const GEXF_CREATOR: &str = "linkgraph";
pub const GRAPH_TYPE_PREFIX: &str = "graph_type=";

/// Render `graph` as a GEXF document
///
/// Fails with `ExportError::EmptyGraph` when the graph has no edges.
pub fn to_gexf(graph: &LinkGraph) -> Result<String, ExportError> {
    if graph.edge_count() == 0 {
        return Err(ExportError::EmptyGraph);
    }

    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(
        BytesStart::new("gexf").with_attributes([("xmlns", GEXF_NAMESPACE), ("version", GEXF_VERSION)]),
    ))?;

    start(&mut writer, "meta")?;
    text_element(&mut writer, "creator", GEXF_CREATOR)?;
    text_element(
        &mut writer,
        "description",
        &format!("{}{}", GRAPH_TYPE_PREFIX, graph.graph_type()),
    )?;
    end(&mut writer, "meta")?;

    let edge_type = if graph.graph_type().is_directed() {
        "directed"
    } else {
        "undirected"
    };
    writer.write_event(Event::Start(
        BytesStart::new("graph").with_attributes([("mode", "static"), ("defaultedgetype", edge_type)]),
    ))?;

    let node_attrs: Vec<&str> = graph.node_attribute_names().into_iter().collect();
    let edge_attrs: Vec<&str> = graph.edge_attribute_names().into_iter().collect();
    let node_ids = declare_attributes(&mut writer, "node", &node_attrs)?;
    let edge_ids = declare_attributes(&mut writer, "edge", &edge_attrs)?;

    start(&mut writer, "nodes")?;
    for node in graph.nodes() {
        let mut element = BytesStart::new("node");
        element.push_attribute(("id", node.id.as_str()));
        element.push_attribute(("label", node.id.as_str()));
        write_with_attvalues(&mut writer, element, &node.attrs, &node_ids)?;
    }
    end(&mut writer, "nodes")?;

    start(&mut writer, "edges")?;
    for (idx, edge) in graph.edges().enumerate() {
        let id = idx.to_string();
        let mut element = BytesStart::new("edge");
        element.push_attribute(("id", id.as_str()));
        element.push_attribute(("source", edge.source));
        element.push_attribute(("target", edge.target));
        write_with_attvalues(&mut writer, element, edge.attrs, &edge_ids)?;
    }
    end(&mut writer, "edges")?;

    end(&mut writer, "graph")?;
    end(&mut writer, "gexf")?;

    let document = String::from_utf8(writer.into_inner())
        .map_err(|e| ExportError::InvalidDocument(e.to_string()))?;
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        bytes = document.len(),
        "rendered GEXF document"
    );
    Ok(document)
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), ExportError> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    Ok(())
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), ExportError> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> Result<(), ExportError> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}

/// Write `<attributes class=..>` and return name → attribute id
fn declare_attributes<'a, W: Write>(
    writer: &mut Writer<W>,
    class: &str,
    names: &[&'a str],
) -> Result<AHashMap<&'a str, String>, ExportError> {
    let mut ids = AHashMap::new();
    if names.is_empty() {
        return Ok(ids);
    }

    writer.write_event(Event::Start(
        BytesStart::new("attributes").with_attributes([("class", class), ("mode", "static")]),
    ))?;
    for (idx, name) in names.iter().enumerate() {
        let id = idx.to_string();
        writer.write_event(Event::Empty(BytesStart::new("attribute").with_attributes([
            ("id", id.as_str()),
            ("title", *name),
            ("type", "string"),
        ])))?;
        ids.insert(*name, id);
    }
    end(writer, "attributes")?;

    Ok(ids)
}

fn write_with_attvalues<W: Write>(
    writer: &mut Writer<W>,
    element: BytesStart<'_>,
    attrs: &AttrMap,
    ids: &AHashMap<&str, String>,
) -> Result<(), ExportError> {
    if attrs.is_empty() {
        writer.write_event(Event::Empty(element))?;
        return Ok(());
    }

    let name = String::from_utf8_lossy(element.name().as_ref()).into_owned();
    writer.write_event(Event::Start(element))?;
    start(writer, "attvalues")?;
    for (key, value) in attrs {
        let id = ids
            .get(key.as_str())
            .ok_or_else(|| ExportError::InvalidDocument(format!("undeclared attribute '{}'", key)))?;
        writer.write_event(Event::Empty(
            BytesStart::new("attvalue").with_attributes([("for", id.as_str()), ("value", value.as_str())]),
        ))?;
    }
    end(writer, "attvalues")?;
    end(writer, &name)
}
