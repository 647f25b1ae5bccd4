//! JSON format report generation

use serde_json::json;

use super::ReportGenerator;
use crate::error::DotError;
use crate::validator::DescriptionValidator;

pub struct JsonReportGenerator;

impl Default for JsonReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonReportGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl ReportGenerator for JsonReportGenerator {
    fn generate_report(&self, validator: &DescriptionValidator) -> Result<String, DotError> {
        let report = json!({
            "valid": !validator.has_issues(),
            "issue_count": validator.issue_count(),
            "node_count": validator.node_count(),
            "edge_count": validator.edge_count(),
            "subgraph_count": validator.subgraph_count(),
            "issues": validator.issues(),
        });

        serde_json::to_string_pretty(&report).map_err(DotError::Json)
    }
}
