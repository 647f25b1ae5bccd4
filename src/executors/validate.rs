//! Validate command executor

use console::style;
use miette::{IntoDiagnostic, Result, WrapErr};

use crate::cli::OutputFormat;
use crate::config::ValidateConfig;
use crate::core::GraphDescription;
use crate::executors::CommandExecutor;
use crate::reports::{HumanReportGenerator, JsonReportGenerator, ReportGenerator};
use crate::validator::DescriptionValidator;

pub struct ValidateExecutor;

impl CommandExecutor for ValidateExecutor {
    type Config = ValidateConfig;

    fn execute(config: Self::Config) -> Result<()> {
        eprintln!(
            "{} Validating {}...\n",
            style("🔍").cyan(),
            style(config.input.display()).bold()
        );

        let description = GraphDescription::parse_file(&config.input)
            .wrap_err("Failed to read graph description")?;

        let mut validator = DescriptionValidator::new();
        validator.validate(&description);

        // Generate report based on format
        let report_result = match config.format {
            OutputFormat::Human => HumanReportGenerator::new().generate_report(&validator),
            OutputFormat::Json => JsonReportGenerator::new().generate_report(&validator),
        };

        match report_result {
            Ok(report) => print!("{report}"),
            Err(e) => {
                return Err(e)
                    .into_diagnostic()
                    .wrap_err("Failed to generate report");
            }
        }

        // Exit with error code if problems found and requested
        if config.error_on_issues && validator.has_issues() {
            std::process::exit(1);
        }

        Ok(())
    }
}
