//! Validation utilities for task graphs.
//!
//! This module checks the structural invariants a task graph relies on.

use crate::graph::SINK;
use crate::{Error, TaskGraph};

/// Result of graph validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether every invariant holds.
    pub is_valid: bool,
    /// List of validation errors, if any.
    pub errors: Vec<Error>,
}

impl ValidationResult {
    /// Create a valid result.
    #[must_use]
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            errors: vec![],
        }
    }

    /// Create an invalid result with errors.
    #[must_use]
    pub fn invalid(errors: Vec<Error>) -> Self {
        Self {
            is_valid: false,
            errors,
        }
    }
}

impl TaskGraph {
    /// Validate the graph structure.
    ///
    /// Checks for:
    /// - Edges leaving the sink
    /// - Root flags that disagree with the incoming edges
    /// - Zero weights, and weights above `max_weight` when a bound is given
    #[must_use]
    pub fn validate(&self, max_weight: Option<u32>) -> ValidationResult {
        let mut errors = Vec::new();

        if self.neighbors(SINK).next().is_some() {
            errors.push(Error::invariant("the sink has outgoing edges"));
        }

        for vertex in 0..self.vertex_count() {
            let has_incoming = self.in_degree(vertex) > 0;
            if has_incoming == self.is_root(vertex) {
                errors.push(Error::invariant(format!(
                    "v{vertex} is_root flag disagrees with its {} incoming edges",
                    self.in_degree(vertex)
                )));
            }
        }

        for (from, to, weight) in self.edges() {
            if weight == 0 || max_weight.is_some_and(|max| weight > max) {
                errors.push(Error::invariant(format!(
                    "edge v{from} -> v{to} has out-of-range weight {weight}"
                )));
            }
        }

        if errors.is_empty() {
            ValidationResult::valid()
        } else {
            ValidationResult::invalid(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeneratorConfig, generate};

    #[test]
    fn test_validate_empty_graph() {
        let graph = TaskGraph::new(0).unwrap();
        let result = graph.validate(None);
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_validate_manual_graph() {
        let mut graph = TaskGraph::new(3).unwrap();
        graph.add_edge(1, 2, 4).unwrap();
        graph.add_edge(2, 0, 9).unwrap();

        assert!(graph.validate(None).is_valid);
        assert!(graph.validate(Some(9)).is_valid);
    }

    #[test]
    fn test_validate_weight_bound() {
        let mut graph = TaskGraph::new(2).unwrap();
        graph.add_edge(1, 2, 12).unwrap();

        let result = graph.validate(Some(10));
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(matches!(
            result.errors[0],
            Error::InvariantViolated { .. }
        ));
    }

    #[test]
    fn test_validate_generated_graph() {
        let config = GeneratorConfig {
            seed: Some(42),
            ..Default::default()
        };
        let max_weight = config.max_weight;
        let (graph, _) = generate(20, config).unwrap();

        let result = graph.validate(Some(max_weight));
        assert!(result.is_valid, "{:?}", result.errors);
    }
}
