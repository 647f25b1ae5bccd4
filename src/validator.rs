//! Description validation
//!
//! Unlike [`GraphBuilder`](crate::graph::GraphBuilder), which stops at the
//! first unresolvable edge, the validator walks the whole description and
//! collects every problem so they can be reported together.

use std::collections::HashSet;

use crate::core::{GraphDescription, ValidationIssue};

/// Collects [`ValidationIssue`]s found in a graph description
#[derive(Debug, Default)]
pub struct DescriptionValidator {
    issues: Vec<ValidationIssue>,
    node_count: usize,
    edge_count: usize,
    subgraph_count: usize,
}

impl DescriptionValidator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates `description`, replacing the results of any earlier run
    pub fn validate(&mut self, description: &GraphDescription) {
        *self = Self::default();

        let declared = description.node_names();

        self.visit(description, &declared);
    }

    fn visit(&mut self, description: &GraphDescription, declared: &HashSet<&str>) {
        let graph = &description.name;
        if graph.is_empty() {
            self.issues.push(ValidationIssue::EmptyGraphName);
        }

        let mut seen_nodes = HashSet::new();
        for node in &description.nodes {
            self.node_count += 1;
            if node.name.is_empty() {
                self.issues.push(ValidationIssue::EmptyNodeName {
                    graph: graph.clone(),
                });
            } else if !seen_nodes.insert(node.name.as_str()) {
                self.issues.push(ValidationIssue::DuplicateNode {
                    graph: graph.clone(),
                    node: node.name.clone(),
                });
            }
        }

        for edge in &description.edges {
            self.edge_count += 1;
            // A self-loop to an undeclared node is reported once
            let mut endpoints = vec![&edge.from];
            if edge.to != edge.from {
                endpoints.push(&edge.to);
            }

            for endpoint in endpoints {
                if !declared.contains(endpoint.as_str()) {
                    self.issues.push(ValidationIssue::UnknownEdgeEndpoint {
                        graph: graph.clone(),
                        from: edge.from.clone(),
                        to: edge.to.clone(),
                        missing: endpoint.clone(),
                    });
                }
            }
        }

        let mut seen_subgraphs = HashSet::new();
        for subgraph in &description.subgraphs {
            self.subgraph_count += 1;
            if !subgraph.name.is_empty() && !seen_subgraphs.insert(subgraph.name.as_str()) {
                self.issues.push(ValidationIssue::DuplicateSubgraph {
                    graph: graph.clone(),
                    subgraph: subgraph.name.clone(),
                });
            }
            self.visit(subgraph, declared);
        }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn has_issues(&self) -> bool {
        !self.issues.is_empty()
    }

    pub fn issue_count(&self) -> usize {
        self.issues.len()
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn subgraph_count(&self) -> usize {
        self.subgraph_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AttributeMap, EdgeDescription, NodeDescription};

    fn node(name: &str) -> NodeDescription {
        NodeDescription {
            name: name.to_string(),
            label: None,
            attributes: AttributeMap::new(),
        }
    }

    fn edge(from: &str, to: &str) -> EdgeDescription {
        EdgeDescription {
            from: from.to_string(),
            to: to.to_string(),
            attributes: AttributeMap::new(),
        }
    }

    #[test]
    fn test_valid_description() {
        let description = GraphDescription {
            nodes: vec![node("A"), node("B")],
            edges: vec![edge("A", "B")],
            ..GraphDescription::default()
        };

        let mut validator = DescriptionValidator::new();
        validator.validate(&description);

        assert!(!validator.has_issues());
        assert_eq!(validator.node_count(), 2);
        assert_eq!(validator.edge_count(), 1);
    }

    #[test]
    fn test_collects_every_issue() {
        let description = GraphDescription {
            nodes: vec![node("A"), node("A"), node("")],
            edges: vec![edge("A", "Ghost"), edge("Nope", "Nope")],
            subgraphs: vec![
                GraphDescription {
                    name: "cluster".to_string(),
                    ..GraphDescription::default()
                },
                GraphDescription {
                    name: "cluster".to_string(),
                    ..GraphDescription::default()
                },
            ],
            ..GraphDescription::default()
        };

        let mut validator = DescriptionValidator::new();
        validator.validate(&description);

        assert_eq!(
            validator.issues(),
            &[
                ValidationIssue::DuplicateNode {
                    graph: "G".to_string(),
                    node: "A".to_string(),
                },
                ValidationIssue::EmptyNodeName {
                    graph: "G".to_string(),
                },
                ValidationIssue::UnknownEdgeEndpoint {
                    graph: "G".to_string(),
                    from: "A".to_string(),
                    to: "Ghost".to_string(),
                    missing: "Ghost".to_string(),
                },
                ValidationIssue::UnknownEdgeEndpoint {
                    graph: "G".to_string(),
                    from: "Nope".to_string(),
                    to: "Nope".to_string(),
                    missing: "Nope".to_string(),
                },
                ValidationIssue::DuplicateSubgraph {
                    graph: "G".to_string(),
                    subgraph: "cluster".to_string(),
                },
            ]
        );
        assert_eq!(validator.subgraph_count(), 2);
    }

    #[test]
    fn test_nodes_in_subgraphs_resolve_edges() {
        let description = GraphDescription {
            edges: vec![edge("Inner", "Inner2")],
            subgraphs: vec![GraphDescription {
                name: "cluster_a".to_string(),
                nodes: vec![node("Inner")],
                subgraphs: vec![GraphDescription {
                    name: "cluster_b".to_string(),
                    nodes: vec![node("Inner2")],
                    ..GraphDescription::default()
                }],
                ..GraphDescription::default()
            }],
            ..GraphDescription::default()
        };

        let mut validator = DescriptionValidator::new();
        validator.validate(&description);

        assert!(!validator.has_issues());
        assert_eq!(validator.node_count(), 2);
        assert_eq!(validator.subgraph_count(), 2);
    }

    #[test]
    fn test_empty_subgraph_name() {
        let description = GraphDescription {
            subgraphs: vec![GraphDescription {
                name: String::new(),
                ..GraphDescription::default()
            }],
            ..GraphDescription::default()
        };

        let mut validator = DescriptionValidator::new();
        validator.validate(&description);

        assert_eq!(validator.issues(), &[ValidationIssue::EmptyGraphName]);
    }

    #[test]
    fn test_validate_resets_previous_run() {
        let mut validator = DescriptionValidator::new();
        validator.validate(&GraphDescription {
            edges: vec![edge("X", "Y")],
            ..GraphDescription::default()
        });
        assert!(validator.has_issues());

        validator.validate(&GraphDescription::default());
        assert!(!validator.has_issues());
        assert_eq!(validator.edge_count(), 0);
    }
}
