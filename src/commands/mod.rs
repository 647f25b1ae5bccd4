//! Command implementations for the graphviz-dot CLI
//!
//! This module contains the implementations for each CLI command:
//! - render: Write the DOT document for a graph description
//! - validate: Check a graph description for problems

pub mod render;
pub mod validate;

use miette::Result;

use crate::cli::Commands;

/// Execute a command based on CLI input
pub fn execute_command(command: Commands) -> Result<()> {
    match &command {
        Commands::Render { .. } => render::execute_render_command(command),
        Commands::Validate { .. } => validate::execute_validate_command(command),
    }
}
