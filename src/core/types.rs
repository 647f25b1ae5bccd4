//! Core type definitions
//!
//! This module contains the plain data structures read from graph description
//! files and produced by validation, with minimal logic - focusing on data
//! representation.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::dot::DEFAULT_GRAPH_NAME;

/// Attribute map as written in a description; sorted so output is stable
pub type AttributeMap = BTreeMap<String, String>;

/// A graph as described in a TOML or JSON file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GraphDescription {
    #[serde(default = "default_graph_name")]
    pub name: String,
    #[serde(default = "default_directed")]
    pub directed: bool,
    #[serde(default)]
    pub attributes: AttributeMap,
    #[serde(default)]
    pub nodes: Vec<NodeDescription>,
    #[serde(default)]
    pub edges: Vec<EdgeDescription>,
    #[serde(default)]
    pub subgraphs: Vec<GraphDescription>,
}

impl Default for GraphDescription {
    fn default() -> Self {
        Self {
            name: default_graph_name(),
            directed: default_directed(),
            attributes: AttributeMap::new(),
            nodes: Vec::new(),
            edges: Vec::new(),
            subgraphs: Vec::new(),
        }
    }
}

impl GraphDescription {
    /// Names of all nodes declared in this graph and, recursively, its
    /// subgraphs
    pub fn node_names(&self) -> HashSet<&str> {
        let mut names = HashSet::new();
        self.collect_node_names(&mut names);
        names
    }

    fn collect_node_names<'a>(&'a self, names: &mut HashSet<&'a str>) {
        names.extend(self.nodes.iter().map(|n| n.name.as_str()));
        for subgraph in &self.subgraphs {
            subgraph.collect_node_names(names);
        }
    }
}

fn default_graph_name() -> String {
    DEFAULT_GRAPH_NAME.to_string()
}

fn default_directed() -> bool {
    true
}

/// A node entry of a description
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct NodeDescription {
    pub name: String,
    pub label: Option<String>,
    #[serde(default)]
    pub attributes: AttributeMap,
}

/// An edge entry of a description, referring to nodes by name
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EdgeDescription {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub attributes: AttributeMap,
}

/// A problem found while validating a description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    EmptyGraphName,
    EmptyNodeName { graph: String },
    DuplicateNode { graph: String, node: String },
    DuplicateSubgraph { graph: String, subgraph: String },
    UnknownEdgeEndpoint { graph: String, from: String, to: String, missing: String },
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationIssue::EmptyGraphName => write!(f, "a graph or subgraph has an empty name"),
            ValidationIssue::EmptyNodeName { graph } => {
                write!(f, "graph '{graph}' declares a node with an empty name")
            }
            ValidationIssue::DuplicateNode { graph, node } => {
                write!(f, "graph '{graph}' declares node '{node}' more than once")
            }
            ValidationIssue::DuplicateSubgraph { graph, subgraph } => {
                write!(f, "graph '{graph}' declares subgraph '{subgraph}' more than once")
            }
            ValidationIssue::UnknownEdgeEndpoint {
                graph,
                from,
                to,
                missing,
            } => write!(
                f,
                "edge '{from}' -> '{to}' in graph '{graph}' refers to unknown node '{missing}'"
            ),
        }
    }
}
