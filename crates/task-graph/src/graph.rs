//! Weighted task graph backed by petgraph.
//!
//! Vertex slot [`SINK`] stands for successful completion; every other slot is
//! an ordinary task. Edges point from a task to the task (or the sink) it
//! enables, and their weight is the cost of completing that step.

use crate::error::try_filled;
use crate::traversal::Neighbors;
use crate::{Error, Result};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tracing::{debug, trace};

/// Index of the sink vertex ("successful completion").
pub const SINK: usize = 0;

/// First index that denotes an ordinary task.
pub const FIRST_TASK: usize = 1;

/// A vertex of the task graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: Option<String>,
    is_root: bool,
}

impl Task {
    const fn new() -> Self {
        Self {
            name: None,
            is_root: true,
        }
    }

    /// Whether no edge targets this task, i.e. it has no prerequisite.
    ///
    /// The flag starts out `true` and is cleared by the first incoming edge.
    /// It is never set again.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.is_root
    }

    /// Optional human-readable name of the task.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }
}

/// Directed weighted graph of tasks leading to the [`SINK`].
///
/// The vertex set is fixed at construction; only edges are added afterwards.
#[derive(Debug, Clone)]
pub struct TaskGraph {
    graph: DiGraph<Task, u32>,
}

impl TaskGraph {
    /// Create a graph with `task_count` tasks plus the sink.
    ///
    /// Every vertex starts with an empty adjacency list and as a root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`] if the vertex storage cannot be obtained
    /// or the vertex count exceeds what the index type can address.
    pub fn new(task_count: usize) -> Result<Self> {
        let allocation_error = Error::Allocation {
            what: "task graph vertices",
            requested: task_count,
        };
        let slots = task_count
            .checked_add(1)
            .ok_or_else(|| allocation_error.clone())?;
        if u32::try_from(slots).is_err() {
            return Err(allocation_error);
        }

        let tasks = try_filled(slots, Task::new(), "task graph vertices")?;
        let mut graph = DiGraph::with_capacity(slots, 0);
        for task in tasks {
            graph.add_node(task);
        }

        debug!(tasks = task_count, "Created task graph");
        Ok(Self { graph })
    }

    /// Add a directed edge `from -> to` with the given weight.
    ///
    /// The edge lands at the front of `from`'s adjacency list and clears the
    /// root flag of `to`. Self loops are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidVertex`] if `to` is outside the graph or `from`
    /// is the sink or outside the graph, and [`Error::InvalidWeight`] for a
    /// zero weight. The graph is left unchanged in both cases.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) -> Result<()> {
        let vertex_count = self.vertex_count();
        if from < FIRST_TASK || from >= vertex_count || to >= vertex_count {
            return Err(Error::InvalidVertex {
                from,
                to,
                vertex_count,
            });
        }
        if weight == 0 {
            return Err(Error::InvalidWeight { from, to });
        }

        let target = NodeIndex::new(to);
        self.graph.add_edge(NodeIndex::new(from), target, weight);
        self.graph[target].is_root = false;
        trace!(from, to, weight, "Added edge");

        Ok(())
    }

    /// Give a task a human-readable name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidQuery`] if `vertex` is outside the graph.
    pub fn name_task(&mut self, vertex: usize, name: impl Into<String>) -> Result<()> {
        let vertex_count = self.vertex_count();
        let task = self
            .graph
            .node_weight_mut(NodeIndex::new(vertex))
            .ok_or(Error::InvalidQuery {
                vertex,
                vertex_count,
            })?;
        task.name = Some(name.into());
        Ok(())
    }

    /// Get a vertex by index.
    #[must_use]
    pub fn task(&self, vertex: usize) -> Option<&Task> {
        self.graph.node_weight(NodeIndex::new(vertex))
    }

    /// Whether `vertex` exists and has no incoming edge.
    #[must_use]
    pub fn is_root(&self, vertex: usize) -> bool {
        self.task(vertex).is_some_and(Task::is_root)
    }

    /// Number of vertex slots, sink included.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of ordinary tasks (the sink excluded).
    #[must_use]
    pub fn task_count(&self) -> usize {
        self.vertex_count().saturating_sub(1)
    }

    /// Total number of edges across all adjacency lists.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Outgoing `(target, weight)` pairs of `vertex`, most recently added first.
    ///
    /// Yields nothing for a vertex outside the graph. Call again to restart.
    #[must_use]
    pub fn neighbors(&self, vertex: usize) -> Neighbors<'_> {
        Neighbors::new(self.graph.edges(NodeIndex::new(vertex)))
    }

    /// Number of edges targeting `vertex`.
    #[must_use]
    pub fn in_degree(&self, vertex: usize) -> usize {
        self.graph
            .edges_directed(NodeIndex::new(vertex), Direction::Incoming)
            .count()
    }

    /// Tasks without prerequisites, in ascending index order.
    ///
    /// The sink is never reported as a root.
    pub fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        (FIRST_TASK..self.vertex_count()).filter(|&vertex| self.is_root(vertex))
    }

    /// Iterate over every edge as `(from, to, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, u32)> + '_ {
        self.graph
            .edge_references()
            .map(|edge| (edge.source().index(), edge.target().index(), *edge.weight()))
    }

    /// Borrow the underlying petgraph graph, e.g. to run other petgraph algorithms.
    #[must_use]
    pub const fn as_digraph(&self) -> &DiGraph<Task, u32> {
        &self.graph
    }
}
