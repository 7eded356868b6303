//! Generator configuration.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// Default minimum number of root tasks a generated graph exposes.
pub const MIN_ROOTS: usize = 2;

/// Default inclusive upper bound on a generated edge weight.
pub const MAX_WEIGHT: u32 = 10;

/// Default number of failure draws per task.
pub const FAILURES_PER_VERTEX: usize = 3;

/// How a failure draw between two vertices is recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// A failure `i -> j` only suppresses the edge `i -> j`.
    #[default]
    Directed,
    /// A failure `i -> j` suppresses both `i -> j` and `j -> i`.
    Undirected,
}

impl Orientation {
    /// Whether failures are mirrored across the diagonal.
    #[must_use]
    pub const fn is_symmetric(self) -> bool {
        matches!(self, Self::Undirected)
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for Orientation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "directed" => Ok(Self::Directed),
            "undirected" => Ok(Self::Undirected),
            _ => Err(Error::config(format!("unknown orientation '{s}'"))),
        }
    }
}

/// Settings for random graph generation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeneratorConfig {
    /// Minimum number of root tasks, capped at the task count.
    pub min_roots: usize,

    /// Inclusive upper bound on edge weights; weights are drawn from `1..=max_weight`.
    pub max_weight: u32,

    /// Random failure draws per task. Draws may repeat.
    pub failures_per_vertex: usize,

    /// Whether failures are mirrored.
    pub orientation: Orientation,

    /// Seed for the random source. A fresh seed is drawn when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            min_roots: MIN_ROOTS,
            max_weight: MAX_WEIGHT,
            failures_per_vertex: FAILURES_PER_VERTEX,
            orientation: Orientation::Directed,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Check that the configuration can be honored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `max_weight` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_weight == 0 {
            return Err(Error::config("maxWeight must be at least 1"));
        }
        Ok(())
    }

    /// The configured seed, or a freshly drawn one.
    #[must_use]
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.min_roots, MIN_ROOTS);
        assert_eq!(config.max_weight, MAX_WEIGHT);
        assert_eq!(config.orientation, Orientation::Directed);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_max_weight_rejected() {
        let config = GeneratorConfig {
            max_weight: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_deserialize_partial_toml() {
        let config: GeneratorConfig = toml::from_str(
            r#"
            minRoots = 4
            orientation = "undirected"
            seed = 7
            "#,
        )
        .unwrap();

        assert_eq!(config.min_roots, 4);
        assert_eq!(config.orientation, Orientation::Undirected);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.max_weight, MAX_WEIGHT);
    }

    #[test]
    fn test_serialize_skips_missing_seed() {
        let json = serde_json::to_value(GeneratorConfig::default()).unwrap();
        assert!(json.get("seed").is_none());
        assert_eq!(json["failuresPerVertex"], 3);
        assert_eq!(json["orientation"], "directed");
    }

    #[test]
    fn test_resolve_seed_prefers_configured() {
        let config = GeneratorConfig {
            seed: Some(99),
            ..Default::default()
        };
        assert_eq!(config.resolve_seed(), 99);
    }

    #[test]
    fn test_orientation_parsing() {
        assert_eq!(
            "Undirected".parse::<Orientation>().unwrap(),
            Orientation::Undirected
        );
        assert!("sideways".parse::<Orientation>().is_err());
        assert_eq!(Orientation::Directed.to_string(), "directed");
    }
}
