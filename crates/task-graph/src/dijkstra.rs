//! Cheapest paths to the sink using Dijkstra's algorithm.
//!
//! Each query selects the next vertex by a linear scan, which costs `O(V²)`
//! but needs no priority queue. Queries only read the graph, so the per-root
//! driver can run them in parallel.

use crate::error::try_filled;
use crate::graph::SINK;
use crate::path::{IMPOSSIBLE, Path};
use crate::{Error, Result, TaskGraph};
use rayon::prelude::*;
use tracing::{debug, instrument};

/// Open vertex with the smallest distance, lowest index on ties.
fn closest_open(distance: &[u64], open: &[bool]) -> Option<usize> {
    // min_by_key keeps the first of equal minima
    distance
        .iter()
        .zip(open)
        .enumerate()
        .filter(|(_, (_, is_open))| **is_open)
        .min_by_key(|(_, (dist, _))| **dist)
        .map(|(vertex, _)| vertex)
}

impl TaskGraph {
    /// Cheapest path from `source` to the sink.
    ///
    /// An unreachable sink is a normal outcome: the returned path has weight
    /// [`IMPOSSIBLE`] and no vertices.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if `source` is outside the graph and
    /// [`Error::Allocation`] if the per-query tables cannot be allocated.
    #[instrument(level = "debug", skip(self))]
    pub fn cheapest_path(&self, source: usize) -> Result<Path> {
        let vertex_count = self.vertex_count();
        if source >= vertex_count {
            return Err(Error::InvalidQuery {
                vertex: source,
                vertex_count,
            });
        }

        let mut distance = try_filled(vertex_count, IMPOSSIBLE, "distance table")?;
        let mut predecessor: Vec<Option<usize>> =
            try_filled(vertex_count, None, "predecessor table")?;
        let mut open = try_filled(vertex_count, true, "open set")?;
        distance[source] = 0;

        while let Some(u) = closest_open(&distance, &open) {
            open[u] = false;
            if distance[u] >= IMPOSSIBLE {
                // Every remaining open vertex is unreachable
                break;
            }
            for (v, weight) in self.neighbors(u) {
                let candidate = distance[u].saturating_add(u64::from(weight));
                if candidate < distance[v] {
                    distance[v] = candidate;
                    predecessor[v] = Some(u);
                }
            }
        }

        let path = extract_path(source, &distance, &predecessor);
        debug!(
            source,
            weight = path.weight(),
            hops = path.len().saturating_sub(1),
            reachable = path.is_reachable(),
            "Computed cheapest path"
        );
        Ok(path)
    }

    /// Cheapest path for every root task, in ascending root order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if a query cannot allocate its tables.
    pub fn root_paths(&self) -> Result<Vec<Path>> {
        self.roots().map(|root| self.cheapest_path(root)).collect()
    }

    /// Same as [`root_paths`](Self::root_paths), running the queries on the
    /// rayon thread pool.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if a query cannot allocate its tables.
    pub fn par_root_paths(&self) -> Result<Vec<Path>> {
        let roots: Vec<usize> = self.roots().collect();
        roots
            .par_iter()
            .map(|&root| self.cheapest_path(root))
            .collect()
    }
}

fn extract_path(source: usize, distance: &[u64], predecessor: &[Option<usize>]) -> Path {
    let weight = distance[SINK];
    if weight >= IMPOSSIBLE {
        return Path::unreachable(source);
    }

    let mut vertices = Vec::new();
    let mut current = Some(SINK);
    while let Some(vertex) = current {
        vertices.push(vertex);
        if vertex == source {
            break;
        }
        current = predecessor[vertex];
    }
    vertices.reverse();

    Path::new(source, weight, vertices)
}
