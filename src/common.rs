//! Common functionality shared across commands

use std::path::PathBuf;

use clap::Args;

/// Input arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Graph description file (.toml or .json)
    #[arg(value_name = "INPUT", env = "GRAPHVIZ_DOT_INPUT")]
    pub input: PathBuf,
}

/// Common output format arguments
#[derive(Args, Debug, Clone)]
pub struct FormatArgs {
    /// Output format
    #[arg(
        short,
        long,
        value_enum,
        default_value = crate::constants::output::DEFAULT_FORMAT,
        env = "GRAPHVIZ_DOT_FORMAT"
    )]
    pub format: crate::cli::OutputFormat,
}

/// Generic builder trait for configuration objects
pub trait ConfigBuilder: Sized {
    type Config;

    /// Build the configuration, returning an error if validation fails
    fn build(self) -> Result<Self::Config, crate::error::DotError>;
}

/// Trait for configurations that can be created from CLI commands
/// This trait simplifies command-to-config conversions
pub trait FromCommand: Sized {
    /// The command variant that this config can be created from
    fn from_command(command: crate::cli::Commands) -> Result<Self, crate::error::DotError>;
}

/// Macro to implement `TryFrom<Commands>` using [`FromCommand`] trait
#[macro_export]
macro_rules! impl_try_from_command {
    ($config:ty) => {
        impl std::convert::TryFrom<$crate::cli::Commands> for $config {
            type Error = $crate::error::DotError;

            fn try_from(command: $crate::cli::Commands) -> Result<Self, Self::Error> {
                <$config as $crate::common::FromCommand>::from_command(command)
            }
        }
    };
}

/// Builds the error reported when a required builder field was never set
pub(crate) fn missing_field(field: &str) -> crate::error::DotError {
    crate::error::DotError::ConfigurationError {
        message: format!("Missing required field: {field}"),
    }
}
