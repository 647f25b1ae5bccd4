use std::path::Path;

use miette::{NamedSource, SourceOffset, SourceSpan};

use crate::constants::description::{JSON_EXTENSION, TOML_EXTENSION};
use crate::core::GraphDescription;
use crate::error::{DotError, JsonParseError, TomlParseError};

/// On-disk syntax of a graph description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DescriptionFormat {
    Toml,
    Json,
}

impl DescriptionFormat {
    /// Picks the format from the file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self, DotError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some(TOML_EXTENSION) => Ok(DescriptionFormat::Toml),
            Some(JSON_EXTENSION) => Ok(DescriptionFormat::Json),
            _ => Err(DotError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

impl GraphDescription {
    pub fn parse_file(path: &Path) -> Result<Self, DotError> {
        let format = DescriptionFormat::from_path(path)?;
        let content = std::fs::read_to_string(path).map_err(|e| DotError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse_str(&content, format, &path.display().to_string())
    }

    /// Parses description text; `origin` names the source in diagnostics
    pub fn parse_str(
        content: &str,
        format: DescriptionFormat,
        origin: &str,
    ) -> Result<Self, DotError> {
        match format {
            DescriptionFormat::Toml => toml::from_str(content).map_err(|e| {
                let span = e
                    .span()
                    .map(|span| SourceSpan::new(span.start.into(), span.end - span.start));

                DotError::TomlParseError(Box::new(TomlParseError {
                    file: origin.to_string(),
                    source_code: NamedSource::new(origin, content.to_string()),
                    span,
                    source: e,
                }))
            }),
            DescriptionFormat::Json => serde_json::from_str(content).map_err(|e| {
                // serde_json reports line 0 when it has no position
                let span = (e.line() > 0).then(|| {
                    SourceSpan::new(
                        SourceOffset::from_location(content, e.line(), e.column().max(1)),
                        1,
                    )
                });

                DotError::JsonParseError(Box::new(JsonParseError {
                    file: origin.to_string(),
                    source_code: NamedSource::new(origin, content.to_string()),
                    span,
                    source: e,
                }))
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::path::PathBuf;

    use tempfile::Builder;

    use super::*;

    fn write_description(extension: &str, content: &str) -> tempfile::NamedTempFile {
        let mut file = Builder::new()
            .suffix(&format!(".{extension}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            DescriptionFormat::from_path(Path::new("classes.toml")).unwrap(),
            DescriptionFormat::Toml
        );
        assert_eq!(
            DescriptionFormat::from_path(Path::new("classes.JSON")).unwrap(),
            DescriptionFormat::Json
        );
        assert!(matches!(
            DescriptionFormat::from_path(Path::new("classes.yaml")),
            Err(DotError::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            DescriptionFormat::from_path(Path::new("classes")),
            Err(DotError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn test_parse_toml_file() {
        let file = write_description(
            "toml",
            r#"
name = "classes"

[attributes]
rankdir = "LR"

[[nodes]]
name = "Foo"
label = "Foo class"

[nodes.attributes]
shape = "record"

[[nodes]]
name = "Bar"

[[edges]]
from = "Foo"
to = "Bar"

[edges.attributes]
arrowhead = "empty"

[[subgraphs]]
name = "cluster_ns"
"#,
        );

        let description = GraphDescription::parse_file(file.path()).unwrap();

        assert_eq!(description.name, "classes");
        assert!(description.directed);
        assert_eq!(description.attributes["rankdir"], "LR");
        assert_eq!(description.nodes.len(), 2);
        assert_eq!(description.nodes[0].label.as_deref(), Some("Foo class"));
        assert_eq!(description.nodes[0].attributes["shape"], "record");
        assert_eq!(description.edges[0].attributes["arrowhead"], "empty");
        assert_eq!(description.subgraphs[0].name, "cluster_ns");
    }

    #[test]
    fn test_parse_json_file() {
        let file = write_description(
            "json",
            r#"{
  "name": "deps",
  "directed": false,
  "nodes": [{"name": "A"}, {"name": "B", "label": "Bee"}],
  "edges": [{"from": "A", "to": "B"}]
}"#,
        );

        let description = GraphDescription::parse_file(file.path()).unwrap();

        assert_eq!(description.name, "deps");
        assert!(!description.directed);
        assert_eq!(description.nodes[1].label.as_deref(), Some("Bee"));
        assert_eq!(description.edges[0].from, "A");
    }

    #[test]
    fn test_invalid_toml_has_span() {
        let err = GraphDescription::parse_str("name = ", DescriptionFormat::Toml, "bad.toml")
            .unwrap_err();

        match err {
            DotError::TomlParseError(inner) => {
                assert_eq!(inner.file, "bad.toml");
                assert!(inner.span.is_some());
            }
            other => panic!("Expected TomlParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_invalid_json_has_span() {
        let err = GraphDescription::parse_str(
            "{\n  \"nodes\": [\n    {\"nam\": \"A\"}\n  ]\n}",
            DescriptionFormat::Json,
            "bad.json",
        )
        .unwrap_err();

        match err {
            DotError::JsonParseError(inner) => {
                assert_eq!(inner.file, "bad.json");
                assert!(inner.span.is_some());
            }
            other => panic!("Expected JsonParseError, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_file() {
        let err = GraphDescription::parse_file(&PathBuf::from("/nonexistent/graph.toml"))
            .unwrap_err();

        assert!(matches!(err, DotError::FileReadError { .. }));
    }
}
