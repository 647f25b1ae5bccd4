//! Report generation modules for different output formats
//!
//! This module contains report generators for validation results:
//! - human: Human-readable console output
//! - json: JSON format for programmatic use

pub mod human;
pub mod json;

use crate::error::DotError;
use crate::validator::DescriptionValidator;

/// Common trait for all report generators
pub trait ReportGenerator {
    /// Generate a report from validation results
    fn generate_report(&self, validator: &DescriptionValidator) -> Result<String, DotError>;
}

// Re-export for convenience
pub use human::HumanReportGenerator;
pub use json::JsonReportGenerator;
