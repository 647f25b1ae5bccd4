//! Graphs and subgraphs

use std::fmt;
use std::str::FromStr;

use super::attribute::{Attribute, AttributeList};
use super::edge::Edge;
use super::node::Node;
use crate::constants::dot::{DEFAULT_GRAPH_NAME, DIRECTED_EDGE_OP, UNDIRECTED_EDGE_OP};
use crate::error::DotError;
use crate::utils::string::escape_quoted;

/// The DOT keyword that opens a graph body
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GraphType {
    #[default]
    Digraph,
    Graph,
    Subgraph,
}

impl GraphType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GraphType::Digraph => "digraph",
            GraphType::Graph => "graph",
            GraphType::Subgraph => "subgraph",
        }
    }

    /// Operator joining edge endpoints in a graph of this type
    ///
    /// A subgraph has no direction of its own and takes the operator of the
    /// graph it is nested in.
    pub fn edge_operator(&self) -> &'static str {
        match self {
            GraphType::Graph => UNDIRECTED_EDGE_OP,
            GraphType::Digraph | GraphType::Subgraph => DIRECTED_EDGE_OP,
        }
    }
}

impl fmt::Display for GraphType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GraphType {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "digraph" => Ok(GraphType::Digraph),
            "graph" => Ok(GraphType::Graph),
            "subgraph" => Ok(GraphType::Subgraph),
            other => Err(DotError::InvalidGraphType {
                value: other.to_string(),
            }),
        }
    }
}

/// A complete DOT document, or a subgraph nested inside one
///
/// Subgraphs and nodes are keyed by name; adding one whose name is already
/// present replaces the earlier entry in place. Edges are kept in the order
/// they were linked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    name: String,
    graph_type: GraphType,
    attributes: AttributeList,
    subgraphs: Vec<Graph>,
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new(DEFAULT_GRAPH_NAME)
    }
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            graph_type: GraphType::Digraph,
            attributes: AttributeList::new(),
            subgraphs: Vec::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Creates a `digraph` when `directional` is set, an undirected `graph`
    /// otherwise
    pub fn create(name: impl Into<String>, directional: bool) -> Self {
        let mut graph = Self::new(name);
        graph.graph_type = if directional {
            GraphType::Digraph
        } else {
            GraphType::Graph
        };
        graph
    }

    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_graph_type(&mut self, graph_type: GraphType) -> &mut Self {
        self.graph_type = graph_type;
        self
    }

    pub fn graph_type(&self) -> GraphType {
        self.graph_type
    }

    pub fn is_subgraph(&self) -> bool {
        self.graph_type == GraphType::Subgraph
    }

    pub fn set_attribute(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        self.attributes.set(name, value);
        self
    }

    pub fn with_attribute(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attributes.set(name, value);
        self
    }

    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.get(name)
    }

    pub fn attributes(&self) -> &AttributeList {
        &self.attributes
    }

    /// Nests `graph` inside this one, turning it into a `subgraph`
    pub fn add_subgraph(&mut self, mut graph: Graph) -> &mut Self {
        graph.graph_type = GraphType::Subgraph;
        match self.subgraphs.iter_mut().find(|g| g.name == graph.name) {
            Some(existing) => *existing = graph,
            None => self.subgraphs.push(graph),
        }
        self
    }

    pub fn has_subgraph(&self, name: &str) -> bool {
        self.subgraph(name).is_some()
    }

    pub fn subgraph(&self, name: &str) -> Option<&Graph> {
        self.subgraphs.iter().find(|g| g.name == name)
    }

    pub fn subgraphs(&self) -> impl Iterator<Item = &Graph> {
        self.subgraphs.iter()
    }

    pub fn add_node(&mut self, node: Node) -> &mut Self {
        match self.nodes.iter_mut().find(|n| n.name() == node.name()) {
            Some(existing) => *existing = node,
            None => self.nodes.push(node),
        }
        self
    }

    /// Looks up a node declared directly in this graph
    pub fn node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name() == name)
    }

    pub fn node_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.name() == name)
    }

    /// Looks up a node in this graph or, depth first, in any nested subgraph
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.node(name)
            .or_else(|| self.subgraphs.iter().find_map(|g| g.find_node(name)))
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn link(&mut self, edge: Edge) -> &mut Self {
        self.edges.push(edge);
        self
    }

    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    /// Number of nodes declared in this graph and all nested subgraphs
    pub fn node_count(&self) -> usize {
        self.nodes.len() + self.subgraphs.iter().map(Graph::node_count).sum::<usize>()
    }

    /// Number of edges linked in this graph and all nested subgraphs
    pub fn edge_count(&self) -> usize {
        self.edges.len() + self.subgraphs.iter().map(Graph::edge_count).sum::<usize>()
    }

    fn write_dot(&self, f: &mut fmt::Formatter<'_>, edge_operator: &str) -> fmt::Result {
        writeln!(
            f,
            "{} \"{}\" {{",
            self.graph_type,
            escape_quoted(&self.name)
        )?;

        let mut separator = "";
        for subgraph in &self.subgraphs {
            f.write_str(separator)?;
            subgraph.write_dot(f, edge_operator)?;
            separator = "\n";
        }
        for attribute in &self.attributes {
            write!(f, "{separator}{attribute}")?;
            separator = "\n";
        }
        for edge in &self.edges {
            write!(f, "{separator}{}", edge.display_with(edge_operator))?;
            separator = "\n";
        }
        for node in &self.nodes {
            write!(f, "{separator}{node}")?;
            separator = "\n";
        }

        write!(f, "\n}}")
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_dot(f, self.graph_type.edge_operator())
    }
}
