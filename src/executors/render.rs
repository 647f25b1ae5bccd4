//! Render command executor

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::config::RenderConfig;
use crate::core::GraphDescription;
use crate::executors::CommandExecutor;
use crate::graph::GraphBuilder;
use crate::utils::string::pluralize;

pub struct RenderExecutor;

impl CommandExecutor for RenderExecutor {
    type Config = RenderConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Rendering {}...",
            style("📊").cyan(),
            style(config.input.display()).bold()
        );

        // Determine output destination
        let mut output_writer: Box<dyn Write> = if let Some(output_path) = config.output.as_ref()
        {
            Box::new(BufWriter::new(
                File::create(output_path)
                    .into_diagnostic()
                    .wrap_err_with(|| {
                        format!("Failed to create output file '{}'", output_path.display())
                    })?,
            ))
        } else {
            Box::new(io::stdout())
        };

        render_description(&config.input, output_writer.as_mut())?;
        output_writer
            .flush()
            .into_diagnostic()
            .wrap_err("Failed to flush DOT output")?;

        if let Some(output_path) = config.output {
            eprintln!(
                "{} Graph written to {}",
                style("✓").green(),
                style(output_path.display()).bold()
            );
        }

        Ok(())
    }
}

/// Parses the description at `input` and writes its DOT document to `output`
pub fn render_description(input: &Path, output: &mut dyn Write) -> Result<()> {
    let description =
        GraphDescription::parse_file(input).wrap_err("Failed to read graph description")?;

    let mut builder = GraphBuilder::new();
    builder
        .build(&description)
        .wrap_err("Failed to build graph")?;

    let graph = builder.graph();
    let node_count = graph.node_count();
    let edge_count = graph.edge_count();
    eprintln!(
        "  {} {} {}, {} {}",
        style("→").dim(),
        style(node_count).yellow(),
        pluralize("node", node_count),
        style(edge_count).yellow(),
        pluralize("edge", edge_count)
    );

    writeln!(output, "{graph}")
        .into_diagnostic()
        .wrap_err("Failed to write DOT output")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::Builder;

    use super::*;

    #[test]
    fn test_render_description() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(
            br#"
name = "classes"

[[nodes]]
name = "A"
label = "Alpha"

[[nodes]]
name = "B"

[[edges]]
from = "A"
to = "B"
"#,
        )
        .unwrap();

        let mut output = Vec::new();
        render_description(file.path(), &mut output).unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "digraph \"classes\" {\n\"A\" -> \"B\" [\n\n]\nA [\nlabel=\"Alpha\"\n]\nB [\n\n]\n}\n"
        );
    }

    #[test]
    fn test_render_unknown_node_fails() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(br#"{"edges": [{"from": "A", "to": "B"}]}"#)
            .unwrap();

        let mut output = Vec::new();
        let result = render_description(file.path(), &mut output);

        assert!(result.is_err());
        assert!(output.is_empty());
    }
}
