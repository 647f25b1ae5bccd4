//! # graphviz-dot - Build Graphviz DOT Documents
//!
//! graphviz-dot models a Graphviz graph in memory (nodes, edges, subgraphs
//! and their attributes) and serializes it to the DOT language. It is meant
//! for documentation generators that describe class and namespace
//! relationships and hand the resulting text to the `dot` executable.
//!
//! ## Main Components
//!
//! - **Graph**: The DOT model ([`graph::Attribute`], [`graph::Node`],
//!   [`graph::Edge`], [`graph::Graph`]) and the builder that creates it from a
//!   description
//! - **Core**: Plain data types for graph description files
//! - **Validator**: Collects every problem in a description
//! - **Reports**: Human-readable and JSON validation reports
//!
//! ## Usage
//!
//! ### Building a Graph in Code
//!
//! ```
//! use graphviz_dot::graph::{Edge, Graph, Node};
//!
//! let mut node = Node::new("Foo");
//! node.set_attribute("Shape", "record")
//!     .set_attribute("url", "Foo.html");
//! assert_eq!(node.to_string(), "Foo [\nshape=\"record\"\nURL=\"Foo.html\"\n]");
//!
//! let bar = Node::with_label("Bar", "<<b>Bar</b>>");
//! assert_eq!(bar.to_string(), "Bar [\nlabel=<<b>Bar</b>>\n]");
//!
//! let mut graph = Graph::default();
//! graph
//!     .link(Edge::new(&node, &bar))
//!     .add_node(node)
//!     .add_node(bar);
//! assert!(graph.to_string().starts_with("digraph \"G\" {"));
//! ```
//!
//! ### Rendering a Description File
//!
//! ```no_run
//! use std::path::Path;
//!
//! use graphviz_dot::core::GraphDescription;
//! use graphviz_dot::graph::GraphBuilder;
//! use graphviz_dot::validator::DescriptionValidator;
//! use miette::IntoDiagnostic;
//!
//! # fn main() -> miette::Result<()> {
//! let description = GraphDescription::parse_file(Path::new("classes.toml"))?;
//!
//! let mut validator = DescriptionValidator::new();
//! validator.validate(&description);
//! for issue in validator.issues() {
//!     eprintln!("{issue}");
//! }
//!
//! let mut builder = GraphBuilder::new();
//! builder.build(&description)?;
//! std::fs::write("classes.dot", builder.graph().to_string()).into_diagnostic()?;
//! # Ok(())
//! # }
//! ```

// Private modules
mod constants;
mod description_parser;
mod utils;

// Public modules
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod core;
pub mod error;
pub mod executors;
pub mod graph;
pub mod reports;
pub mod validator;

pub use description_parser::DescriptionFormat;

// Main entry point for the library
pub fn run() -> miette::Result<()> {
    use clap::Parser;

    use crate::cli::Cli;
    use crate::commands::execute_command;

    let cli = Cli::parse();

    execute_command(cli.command)
}
