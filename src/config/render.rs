//! Render command configuration

use std::path::PathBuf;

use crate::common::missing_field;

/// Configuration for the render command
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Graph description to read
    pub input: PathBuf,
    /// Where to write the DOT document (stdout when `None`)
    pub output: Option<PathBuf>,
}

impl RenderConfig {
    pub fn builder() -> RenderConfigBuilder {
        RenderConfigBuilder::new()
    }
}

#[derive(Default)]
pub struct RenderConfigBuilder {
    input: Option<PathBuf>,
    output: Option<Option<PathBuf>>,
}

impl RenderConfigBuilder {
    pub fn new() -> Self {
        Self {
            input: None,
            output: None,
        }
    }

    pub fn with_input(mut self, input: PathBuf) -> Self {
        self.input = Some(input);
        self
    }

    pub fn with_output(mut self, output: Option<PathBuf>) -> Self {
        self.output = Some(output);
        self
    }
}

impl crate::common::ConfigBuilder for RenderConfigBuilder {
    type Config = RenderConfig;

    fn build(self) -> Result<Self::Config, crate::error::DotError> {
        Ok(RenderConfig {
            input: self.input.ok_or_else(|| missing_field("input"))?,
            output: self.output.ok_or_else(|| missing_field("output"))?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ConfigBuilder;
    use crate::error::DotError;

    #[test]
    fn test_build_render_config() {
        let config = RenderConfig::builder()
            .with_input(PathBuf::from("classes.toml"))
            .with_output(None)
            .build()
            .unwrap();

        assert_eq!(config.input, PathBuf::from("classes.toml"));
        assert!(config.output.is_none());
    }

    #[test]
    fn test_missing_output_is_an_error() {
        let result = RenderConfig::builder()
            .with_input(PathBuf::from("classes.toml"))
            .build();

        assert!(matches!(
            result,
            Err(DotError::ConfigurationError { message }) if message.contains("output")
        ));
    }
}
