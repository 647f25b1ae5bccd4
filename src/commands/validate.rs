//! Validate command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::ValidateConfig;
use crate::error::DotError;

impl FromCommand for ValidateConfig {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Validate {
                input,
                format,
                error_on_issues,
            } => ValidateConfig::builder()
                .with_input(input.input)
                .with_format(format.format)
                .with_error_on_issues(error_on_issues)
                .build(),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for ValidateConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(ValidateConfig);

/// Execute the validate command for checking a graph description
pub fn execute_validate_command(command: Commands) -> Result<()> {
    let config = ValidateConfig::from_command(command)
        .wrap_err("Failed to parse validate command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::validate::ValidateExecutor;
    ValidateExecutor::execute(config)
}
