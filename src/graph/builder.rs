use std::collections::HashSet;

use super::digraph::Graph;
use super::edge::Edge;
use super::node::Node;
use crate::core::{AttributeMap, GraphDescription};
use crate::error::DotError;

/// Builder turning a [`GraphDescription`] into a renderable [`Graph`]
///
/// Edges may refer to nodes declared anywhere in the description, including
/// other subgraphs, but every endpoint must be declared somewhere. Node names
/// must be non-empty and unique within the graph that declares them.
pub struct GraphBuilder {
    graph: Graph,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            graph: Graph::default(),
        }
    }

    pub fn build(&mut self, description: &GraphDescription) -> Result<(), DotError> {
        let declared = description.node_names();

        let mut graph = Graph::create(description.name.as_str(), description.directed);
        populate(&mut graph, description, &declared)?;

        self.graph = graph;
        Ok(())
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn into_graph(self) -> Graph {
        self.graph
    }
}

fn populate(
    graph: &mut Graph,
    description: &GraphDescription,
    declared: &HashSet<&str>,
) -> Result<(), DotError> {
    apply_attributes(&description.attributes, |name, value| {
        graph.set_attribute(name, value);
    });

    for subgraph_description in &description.subgraphs {
        let mut subgraph = Graph::new(subgraph_description.name.as_str());
        populate(&mut subgraph, subgraph_description, declared)?;
        graph.add_subgraph(subgraph);
    }

    let mut seen_nodes = HashSet::new();
    for node_description in &description.nodes {
        let name = node_description.name.as_str();
        if name.is_empty() {
            return Err(DotError::EmptyNodeName {
                graph: description.name.clone(),
            });
        }
        if !seen_nodes.insert(name) {
            return Err(DotError::DuplicateNode {
                graph: description.name.clone(),
                node: name.to_string(),
            });
        }

        let mut node = Node::create(name, node_description.label.as_deref());
        apply_attributes(&node_description.attributes, |name, value| {
            node.set_attribute(name, value);
        });
        graph.add_node(node);
    }

    for edge_description in &description.edges {
        for endpoint in [&edge_description.from, &edge_description.to] {
            if !declared.contains(endpoint.as_str()) {
                return Err(DotError::UnknownNode {
                    name: endpoint.clone(),
                });
            }
        }

        let mut edge = Edge::between(
            edge_description.from.as_str(),
            edge_description.to.as_str(),
        );
        apply_attributes(&edge_description.attributes, |name, value| {
            edge.set_attribute(name, value);
        });
        graph.link(edge);
    }

    Ok(())
}

fn apply_attributes(attributes: &AttributeMap, mut set: impl FnMut(&str, &str)) {
    for (name, value) in attributes {
        set(name, value);
    }
}
