use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::common::{FormatArgs, InputArgs};

#[derive(Parser)]
#[command(
    name = "graphviz-dot",
    about = "Turn graph descriptions into Graphviz DOT documents",
    long_about = "graphviz-dot reads a TOML or JSON description of nodes, edges and subgraphs \
                  and writes the equivalent Graphviz DOT document, ready to be handed to the \
                  `dot` executable for rendering.",
    subcommand_required = true,
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the DOT document for a graph description
    ///
    /// Parses the description, resolves every edge against the declared
    /// nodes and prints the resulting DOT text.
    #[command(
        long_about = "Convert a graph description into DOT. Nodes, edges and subgraphs are \
                      emitted in the order they are declared; attributes inside each entry are \
                      emitted in key order. Edges must refer to nodes declared somewhere in the \
                      description, otherwise rendering stops with an error."
    )]
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// Output file (stdout if not specified)
        #[arg(short, long, env = "GRAPHVIZ_DOT_OUTPUT")]
        output: Option<PathBuf>,
    },

    /// Check a graph description for problems
    ///
    /// Reports every duplicate or unnamed node and every edge that points at
    /// an undeclared node, instead of stopping at the first one.
    #[command(
        long_about = "Validate a graph description without rendering it. All problems are \
                      collected and reported together, either for humans or as JSON for other \
                      tools."
    )]
    Validate {
        #[command(flatten)]
        input: InputArgs,

        #[command(flatten)]
        format: FormatArgs,

        /// Exit with error code if problems are found
        #[arg(long, env = "GRAPHVIZ_DOT_ERROR_ON_ISSUES")]
        error_on_issues: bool,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}
