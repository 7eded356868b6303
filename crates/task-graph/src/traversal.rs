//! Traversal types for task graphs.

use petgraph::Directed;
use petgraph::graph::Edges;
use petgraph::visit::EdgeRef;

/// Lazy sequence of `(target, weight)` pairs leaving one vertex.
///
/// Created by [`TaskGraph::neighbors`](crate::TaskGraph::neighbors).
pub struct Neighbors<'a> {
    edges: Edges<'a, u32, Directed>,
}

impl<'a> Neighbors<'a> {
    pub(crate) const fn new(edges: Edges<'a, u32, Directed>) -> Self {
        Self { edges }
    }
}

impl Iterator for Neighbors<'_> {
    type Item = (usize, u32);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges
            .next()
            .map(|edge| (edge.target().index(), *edge.weight()))
    }
}
