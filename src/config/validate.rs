//! Validate command configuration

use std::path::PathBuf;

use crate::cli::OutputFormat;
use crate::common::missing_field;

/// Configuration for the validate command
///
/// This struct contains all options for checking a graph description and
/// reporting the problems found in it.
#[derive(Debug, Clone)]
pub struct ValidateConfig {
    /// Graph description to read
    pub input: PathBuf,
    /// Output format for the report
    pub format: OutputFormat,
    /// Whether to exit with error code if problems are found
    pub error_on_issues: bool,
}

impl ValidateConfig {
    pub fn builder() -> ValidateConfigBuilder {
        ValidateConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct ValidateConfigBuilder {
    input: Option<PathBuf>,
    format: Option<OutputFormat>,
    error_on_issues: Option<bool>,
}

impl ValidateConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            format: None,
            error_on_issues: None,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_error_on_issues(mut self, error_on_issues: bool) -> Self {
        self.error_on_issues = Some(error_on_issues);
        self
    }
}

impl crate::common::ConfigBuilder for ValidateConfigBuilder {
    type Config = ValidateConfig;

    fn build(self) -> Result<Self::Config, crate::error::DotError> {
        Ok(ValidateConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            format: self.format.ok_or_else(|| missing_field("format"))?,
            error_on_issues: self
                .error_on_issues
                .ok_or_else(|| missing_field("error_on_issues"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;

    #[test]
    fn test_build_validate_config() {
        let config = ValidateConfig::builder()
            .with_input(PathBuf::from("classes.json"))
            .with_format(OutputFormat::Json)
            .with_error_on_issues(true)
            .build()
            .unwrap();

        assert_eq!(config.format, OutputFormat::Json);
        assert!(config.error_on_issues);
    }

    #[test]
    fn test_missing_input_is_an_error() {
        let result = ValidateConfig::builder()
            .with_format(OutputFormat::Human)
            .with_error_on_issues(false)
            .build();

        assert!(result.is_err());
    }
}
