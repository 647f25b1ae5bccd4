use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid TOML syntax in '{file}'")]
#[diagnostic(
    code(graphviz_dot::toml_parse_error),
    help("Check the TOML syntax near the highlighted position")
)]
pub struct TomlParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("syntax error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: toml::de::Error,
}

#[derive(Error, Debug, Diagnostic)]
#[error("Invalid JSON in '{file}'")]
#[diagnostic(
    code(graphviz_dot::json_parse_error),
    help("Check the JSON syntax and field names near the highlighted position")
)]
pub struct JsonParseError {
    pub file: String,
    #[source_code]
    pub source_code: NamedSource<String>,
    #[label("error here")]
    pub span: Option<SourceSpan>,
    #[source]
    pub source: serde_json::Error,
}

#[derive(Error, Debug, Diagnostic)]
pub enum DotError {
    #[error("Failed to read file '{path}'")]
    #[diagnostic(
        code(graphviz_dot::io_error),
        help("Check if the file exists and you have read permissions")
    )]
    FileReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    #[diagnostic(transparent)]
    TomlParseError(Box<TomlParseError>),

    #[error(transparent)]
    #[diagnostic(transparent)]
    JsonParseError(Box<JsonParseError>),

    #[error("Unsupported description format for '{path}'")]
    #[diagnostic(
        code(graphviz_dot::unsupported_format),
        help("Graph descriptions must use a .toml or .json extension")
    )]
    UnsupportedFormat { path: PathBuf },

    #[error("Invalid graph type '{value}'")]
    #[diagnostic(
        code(graphviz_dot::invalid_graph_type),
        help("Use one of: digraph, graph, subgraph")
    )]
    InvalidGraphType { value: String },

    #[error("Edge refers to unknown node '{name}'")]
    #[diagnostic(
        code(graphviz_dot::unknown_node),
        help("Declare the node before linking it, or run `validate` to list every problem")
    )]
    UnknownNode { name: String },

    #[error("Graph '{graph}' declares a node with an empty name")]
    #[diagnostic(
        code(graphviz_dot::empty_node_name),
        help("Every node needs a non-empty name to be referenced in DOT")
    )]
    EmptyNodeName { graph: String },

    #[error("Node '{node}' is declared more than once in graph '{graph}'")]
    #[diagnostic(
        code(graphviz_dot::duplicate_node),
        help("Merge the declarations into one node, or run `validate` to list every problem")
    )]
    DuplicateNode { graph: String, node: String },

    #[error("JSON serialization error")]
    #[diagnostic(
        code(graphviz_dot::json_error),
        help("This is likely an internal error - please report it")
    )]
    Json(#[from] serde_json::Error),

    #[error("String formatting error")]
    #[diagnostic(
        code(graphviz_dot::fmt_error),
        help("This is likely an internal error - please report it")
    )]
    Fmt(#[from] std::fmt::Error),

    #[error("IO error")]
    #[diagnostic(
        code(graphviz_dot::io_error),
        help("Check file permissions and disk space")
    )]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    #[diagnostic(
        code(graphviz_dot::config_error),
        help("Check your command arguments and configuration")
    )]
    ConfigurationError { message: String },
}
