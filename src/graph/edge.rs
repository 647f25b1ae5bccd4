//! Directed links between nodes

use std::fmt;

use super::attribute::{Attribute, AttributeList};
use super::node::Node;
use crate::constants::dot::DIRECTED_EDGE_OP;
use crate::utils::string::escape_quoted;

/// A link from one node to another
///
/// Only the node names are kept, so an edge stays valid when the nodes it was
/// created from are later moved into a graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    from: String,
    to: String,
    attributes: AttributeList,
}

impl Edge {
    pub fn new(from: &Node, to: &Node) -> Self {
        Self::between(from.name(), to.name())
    }

    pub fn create(from: &Node, to: &Node) -> Self {
        Self::new(from, to)
    }

    /// Creates an edge from bare node names
    pub fn between(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            attributes: AttributeList::new(),
        }
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
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

    /// Renders the edge with `operator` (`->` or `--`) between its endpoints
    ///
    /// The plain `Display` impl always uses `->`; a [`Graph`](super::Graph)
    /// picks the operator that matches its own type.
    pub fn display_with<'a>(&'a self, operator: &'a str) -> EdgeDisplay<'a> {
        EdgeDisplay {
            edge: self,
            operator,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.display_with(DIRECTED_EDGE_OP), f)
    }
}

/// An [`Edge`] paired with the operator it is rendered with
pub struct EdgeDisplay<'a> {
    edge: &'a Edge,
    operator: &'a str,
}

impl fmt::Display for EdgeDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\"{}\" {} \"{}\" [\n{}\n]",
            escape_quoted(&self.edge.from),
            self.operator,
            escape_quoted(&self.edge.to),
            self.edge.attributes
        )
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_edge_without_attributes() {
        let edge = Edge::new(&Node::new("A"), &Node::new("B"));
        assert_eq!(edge.to_string(), "\"A\" -> \"B\" [\n\n]");
    }

    #[test]
    fn test_edge_keeps_node_names() {
        let from = Node::with_label("app", "Application");
        let to = Node::new("core");
        let edge = Edge::create(&from, &to);

        assert_eq!(edge.from(), "app");
        assert_eq!(edge.to(), "core");
    }

    #[test]
    fn test_edge_attributes() {
        let mut edge = Edge::between("A", "B");
        edge.set_attribute("ArrowHead", "empty")
            .set_attribute("style", "dashed");

        assert_eq!(edge.attribute("arrowhead").unwrap().value(), "empty");
        assert_eq!(
            edge.to_string(),
            "\"A\" -> \"B\" [\narrowhead=\"empty\"\nstyle=\"dashed\"\n]"
        );
    }

    #[test]
    fn test_edge_names_are_escaped() {
        let edge = Edge::between("My\\Class", "say \"hi\"");
        assert_eq!(
            edge.to_string(),
            "\"My\\Class\" -> \"say \\\"hi\\\"\" [\n\n]"
        );
    }

    #[test]
    fn test_edge_names_match_node_names() {
        let a = Node::new("Ns\\A");
        let b = Node::new("Ns\\B");
        let edge = Edge::new(&a, &b);

        assert_eq!(a.to_string(), "Ns\\A [\n\n]");
        assert_eq!(edge.to_string(), "\"Ns\\A\" -> \"Ns\\B\" [\n\n]");
    }

    #[test]
    fn test_display_with_undirected_operator() {
        let edge = Edge::between("A", "B").with_attribute("color", "red");
        assert_eq!(
            edge.display_with("--").to_string(),
            "\"A\" -- \"B\" [\ncolor=\"red\"\n]"
        );
    }
}
