//! # Configuration Module
//!
//! This module provides configuration structures for all graphviz-dot
//! commands. Each command has its own config module with a builder for easy
//! construction.
//!
//! ## Command Configurations
//!
//! - **RenderConfig**: Configuration for the `render` command that writes DOT
//! - **ValidateConfig**: Configuration for the `validate` command that reports
//!   problems in a description
//!
//! ## Example
//!
//! ```
//! use graphviz_dot::cli::OutputFormat;
//! use graphviz_dot::common::ConfigBuilder;
//! use graphviz_dot::config::{RenderConfig, ValidateConfig};
//!
//! let render = RenderConfig::builder()
//!     .with_input("classes.toml".into())
//!     .with_output(Some("classes.dot".into()))
//!     .build()
//!     .unwrap();
//! assert!(render.output.is_some());
//!
//! let validate = ValidateConfig::builder()
//!     .with_input("classes.toml".into())
//!     .with_format(OutputFormat::Json)
//!     .with_error_on_issues(true)
//!     .build()
//!     .unwrap();
//! assert!(validate.error_on_issues);
//! ```

pub mod render;
pub mod validate;

pub use render::RenderConfig;
pub use validate::ValidateConfig;
