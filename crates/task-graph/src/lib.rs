//! Weighted task graphs and cheapest paths to completion.
//!
//! This crate models interdependent tasks as a directed weighted graph in
//! which vertex [`SINK`] stands for successful completion. It provides:
//!
//! - [`TaskGraph`]: the graph store, with a root flag per task
//! - [`Generator`]: randomized population that guarantees a minimum number of roots
//! - [`TaskGraph::cheapest_path`]: Dijkstra's algorithm from one task to the sink
//!
//! # Example
//!
//! ```
//! use taskpath_graph::{TaskGraph, SINK};
//!
//! let mut graph = TaskGraph::new(4)?;
//! graph.add_edge(1, 3, 2)?;
//! graph.add_edge(3, 2, 2)?;
//! graph.add_edge(2, 4, 2)?;
//! graph.add_edge(4, SINK, 2)?;
//!
//! let paths = graph.root_paths()?;
//! assert_eq!(paths[0].vertices(), &[1, 3, 2, 4, 0]);
//! assert_eq!(paths[0].weight(), 8);
//! # Ok::<(), taskpath_graph::Error>(())
//! ```

mod config;
mod dijkstra;
mod error;
mod generator;
mod graph;
mod matrix;
mod path;
mod traversal;
mod validation;

pub use config::{FAILURES_PER_VERTEX, GeneratorConfig, MAX_WEIGHT, MIN_ROOTS, Orientation};
pub use error::{Error, Result};
pub use generator::{GenerationReport, Generator, generate};
pub use graph::{FIRST_TASK, SINK, Task, TaskGraph};
pub use matrix::FailureMatrix;
pub use path::{IMPOSSIBLE, Path};
pub use traversal::Neighbors;
pub use validation::ValidationResult;
