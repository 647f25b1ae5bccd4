//! Configuration constants for graphviz-dot
//!
//! This module contains the fixed values used throughout the crate: DOT
//! keywords and attribute names the renderer treats specially, plus CLI
//! defaults.

/// DOT language details
pub mod dot {
    /// Graph name used when none is given
    pub const DEFAULT_GRAPH_NAME: &str = "G";

    /// Attribute holding the text Graphviz displays for a node
    pub const LABEL_KEY: &str = "label";

    /// Hyperlink attribute as callers usually spell it
    pub const URL_KEY: &str = "url";

    /// Hyperlink attribute as Graphviz requires it
    pub const URL_KEY_RENDERED: &str = "URL";

    /// Values starting with this are HTML-like labels and are emitted unquoted
    pub const RAW_VALUE_PREFIX: char = '<';

    /// Edge operator inside a `digraph`
    pub const DIRECTED_EDGE_OP: &str = "->";

    /// Edge operator inside an undirected `graph`
    pub const UNDIRECTED_EDGE_OP: &str = "--";
}

/// Description file handling
pub mod description {
    pub const TOML_EXTENSION: &str = "toml";
    pub const JSON_EXTENSION: &str = "json";
}

/// Output formatting configuration
pub mod output {
    /// Default report format when not specified
    pub const DEFAULT_FORMAT: &str = "human";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_constants() {
        assert_eq!(dot::DEFAULT_GRAPH_NAME, "G");
        assert_eq!(dot::URL_KEY.to_uppercase(), dot::URL_KEY_RENDERED);
    }

    #[test]
    fn test_output_constants() {
        assert_eq!(output::DEFAULT_FORMAT, "human");
    }
}
