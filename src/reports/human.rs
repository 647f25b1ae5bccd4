//! Human-readable console report generation

use std::fmt::Write;

use console::style;

use super::ReportGenerator;
use crate::error::DotError;
use crate::utils::string::pluralize;
use crate::validator::DescriptionValidator;

pub struct HumanReportGenerator;

impl Default for HumanReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HumanReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for HumanReportGenerator {
    fn generate_report(&self, validator: &DescriptionValidator) -> Result<String, DotError> {
        let mut output = String::new();

        writeln!(
            output,
            "{} Checked {} {}, {} {} and {} {}",
            style("📦").blue(),
            style(validator.node_count()).yellow(),
            pluralize("node", validator.node_count()),
            style(validator.edge_count()).yellow(),
            pluralize("edge", validator.edge_count()),
            style(validator.subgraph_count()).yellow(),
            pluralize("subgraph", validator.subgraph_count())
        )?;

        if !validator.has_issues() {
            writeln!(
                output,
                "\n{} No problems found. The description is ready to render.",
                style("✅").green().bold()
            )?;
            return Ok(output);
        }

        writeln!(
            output,
            "\n{} Found {} {}:\n",
            style("❌").red().bold(),
            style(validator.issue_count()).red().bold(),
            pluralize("problem", validator.issue_count())
        )?;

        for issue in validator.issues() {
            writeln!(output, "  {} {}", style("•").dim(), issue)?;
        }

        Ok(output)
    }
}
