//! Result of a cheapest-path query.

use serde::{Deserialize, Serialize};

/// Distance sentinel for "the sink cannot be reached".
///
/// Any real accumulated weight stays below it, and `IMPOSSIBLE + IMPOSSIBLE`
/// still fits in a `u64`.
pub const IMPOSSIBLE: u64 = u64::MAX / 2;

/// Cheapest route from one task to the sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Path {
    source: usize,
    weight: u64,
    vertices: Vec<usize>,
}

impl Path {
    pub(crate) const fn new(source: usize, weight: u64, vertices: Vec<usize>) -> Self {
        Self {
            source,
            weight,
            vertices,
        }
    }

    pub(crate) const fn unreachable(source: usize) -> Self {
        Self::new(source, IMPOSSIBLE, Vec::new())
    }

    /// The queried vertex.
    #[must_use]
    pub const fn source(&self) -> usize {
        self.source
    }

    /// Total weight, or [`IMPOSSIBLE`] when the sink is unreachable.
    #[must_use]
    pub const fn weight(&self) -> u64 {
        self.weight
    }

    /// Vertices from the source to the sink. Empty when unreachable.
    #[must_use]
    pub fn vertices(&self) -> &[usize] {
        &self.vertices
    }

    /// Number of vertices on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Whether the path has no vertices, i.e. the sink is unreachable.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether the sink can be reached from the source.
    #[must_use]
    pub const fn is_reachable(&self) -> bool {
        self.weight < IMPOSSIBLE
    }

    /// Consecutive `(from, to)` pairs along the path.
    pub fn hops(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.vertices.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_impossible_does_not_overflow() {
        assert!(IMPOSSIBLE.checked_add(IMPOSSIBLE).is_some());
    }

    #[test]
    fn test_unreachable_path() {
        let path = Path::unreachable(3);
        assert!(!path.is_reachable());
        assert!(path.is_empty());
        assert_eq!(path.weight(), IMPOSSIBLE);
        assert_eq!(path.source(), 3);
        assert_eq!(path.hops().count(), 0);
    }

    #[test]
    fn test_hops() {
        let path = Path::new(1, 6, vec![1, 3, 0]);
        assert_eq!(path.len(), 3);
        assert_eq!(path.hops().collect::<Vec<_>>(), vec![(1, 3), (3, 0)]);
    }
}
