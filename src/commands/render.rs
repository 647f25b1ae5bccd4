//! Render command implementation

use miette::{Result, WrapErr};

use crate::cli::Commands;
use crate::common::{ConfigBuilder, FromCommand};
use crate::config::RenderConfig;
use crate::error::DotError;

impl FromCommand for RenderConfig {
    fn from_command(command: Commands) -> Result<Self, DotError> {
        match command {
            Commands::Render { input, output } => RenderConfig::builder()
                .with_input(input.input)
                .with_output(output)
                .build(),
            _ => Err(DotError::ConfigurationError {
                message: "Invalid command type for RenderConfig".to_string(),
            }),
        }
    }
}

crate::impl_try_from_command!(RenderConfig);

/// Execute the render command for writing a DOT document
pub fn execute_render_command(command: Commands) -> Result<()> {
    let config = RenderConfig::from_command(command)
        .wrap_err("Failed to parse render command configuration")?;

    use crate::executors::CommandExecutor;
    use crate::executors::render::RenderExecutor;
    RenderExecutor::execute(config)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::cli::OutputFormat;
    use crate::common::{FormatArgs, InputArgs};

    #[test]
    fn test_render_config_from_command() {
        let command = Commands::Render {
            input: InputArgs {
                input: PathBuf::from("classes.toml"),
            },
            output: Some(PathBuf::from("classes.dot")),
        };

        let config = RenderConfig::try_from(command).unwrap();
        assert_eq!(config.input, PathBuf::from("classes.toml"));
        assert_eq!(config.output, Some(PathBuf::from("classes.dot")));
    }

    #[test]
    fn test_wrong_command_is_rejected() {
        let command = Commands::Validate {
            input: InputArgs {
                input: PathBuf::from("classes.toml"),
            },
            format: FormatArgs {
                format: OutputFormat::Human,
            },
            error_on_issues: false,
        };

        assert!(RenderConfig::from_command(command).is_err());
    }
}
