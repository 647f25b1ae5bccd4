//! # DOT Graph Model
//!
//! This module provides an in-memory model of a Graphviz document and its
//! serialization to the DOT language. Every type renders itself through
//! [`std::fmt::Display`], so `to_string()` yields the exact DOT text.
//!
//! ## Components
//!
//! ### Model
//! - **Attribute**: a single `key=value` pair
//! - **AttributeList**: the open-ended attribute set of a node, edge or graph
//! - **Node**: a named vertex
//! - **Edge**: a link between two named nodes
//! - **Graph**: a `digraph`, `graph` or `subgraph` holding all of the above
//!
//! ### Building
//! - **GraphBuilder**: turns a parsed graph description into a [`Graph`]
//!
//! ## Example
//!
//! ```
//! use graphviz_dot::graph::{Edge, Graph, Node};
//!
//! let parent = Node::with_label("Parent", "Base class").with_attribute("shape", "box");
//! let child = Node::create("Child", None).with_attribute("url", "child.html");
//!
//! let mut graph = Graph::new("classes");
//! graph
//!     .set_attribute("rankdir", "BT")
//!     .link(Edge::new(&child, &parent).with_attribute("arrowhead", "empty"))
//!     .add_node(parent)
//!     .add_node(child);
//!
//! let dot = graph.to_string();
//! assert!(dot.starts_with("digraph \"classes\" {"));
//! assert!(dot.contains("label=\"Base class\""));
//! assert!(dot.contains("URL=\"child.html\""));
//! assert!(dot.contains("\"Child\" -> \"Parent\" [\narrowhead=\"empty\"\n]"));
//! ```
//!
//! ## Escaping
//!
//! Attribute values are emitted verbatim inside double quotes. Values that
//! start with `<` are treated as HTML-like labels and are not quoted at all.

mod attribute;
mod builder;
mod digraph;
mod edge;
mod node;

pub use attribute::{Attribute, AttributeList};
pub use builder::GraphBuilder;
pub use digraph::{Graph, GraphType};
pub use edge::{Edge, EdgeDisplay};
pub use node::Node;
