//! Randomized population of task graphs.
//!
//! Generation marks random "failures" in a [`FailureMatrix`], forces extra
//! root tasks until the configured minimum is met, and then creates an edge
//! for every pair that was not marked.

use crate::config::GeneratorConfig;
use crate::graph::{FIRST_TASK, SINK};
use crate::matrix::FailureMatrix;
use crate::{Result, TaskGraph};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Summary of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationReport {
    /// Seed used, when generation was seeded through the configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Root tasks produced by the random draws alone.
    pub drawn_roots: usize,
    /// Tasks forced to be roots to reach the minimum.
    pub forced_roots: usize,
    /// Edges added to the graph.
    pub edges_added: usize,
}

/// Populates task graphs according to a [`GeneratorConfig`].
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration is invalid.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this generator honors.
    #[must_use]
    pub const fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Populate `graph` using the configured seed, or a fresh one when unset.
    ///
    /// The seed actually used is recorded in the report so the run can be
    /// reproduced.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::Error::Allocation) if the scratch
    /// matrix cannot be allocated.
    pub fn populate_seeded(&self, graph: &mut TaskGraph) -> Result<GenerationReport> {
        let seed = self.config.resolve_seed();
        debug!(seed, "Seeding graph generator");
        let mut rng = StdRng::seed_from_u64(seed);
        let mut report = self.populate(graph, &mut rng)?;
        report.seed = Some(seed);
        Ok(report)
    }

    /// Populate `graph` with random edges drawn from `rng`.
    ///
    /// Guarantees at least `min_roots` root tasks on a graph without edges,
    /// best-effort capped at the task count: when the graph has fewer tasks
    /// than `min_roots`, every task becomes a root. Edges already present in
    /// `graph` are kept and may clear root flags on their own.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Allocation`](crate::Error::Allocation) if the scratch
    /// matrix cannot be allocated.
    #[instrument(skip_all, fields(tasks = graph.task_count(), orientation = %self.config.orientation))]
    pub fn populate<R: Rng>(&self, graph: &mut TaskGraph, rng: &mut R) -> Result<GenerationReport> {
        let slots = graph.vertex_count();
        let mut matrix = FailureMatrix::new(slots, slots)?;

        // No self loops, and the sink never sources an edge.
        for vertex in 0..slots {
            matrix.set(vertex, vertex, true, false)?;
        }
        matrix.fill_row(SINK)?;

        self.draw_failures(&mut matrix, rng)?;

        let drawn_roots = matrix.full_columns(FIRST_TASK..slots);
        let forced_roots = self.repair_roots(&mut matrix, drawn_roots, rng)?;

        let edges_before = graph.edge_count();
        for from in FIRST_TASK..slots {
            for to in 0..slots {
                if matrix.get(from, to).unwrap_or(true) {
                    continue;
                }
                let weight = rng.random_range(1..=self.config.max_weight);
                graph.add_edge(from, to, weight)?;
            }
        }

        let report = GenerationReport {
            seed: None,
            drawn_roots,
            forced_roots,
            edges_added: graph.edge_count() - edges_before,
        };
        debug!(
            drawn_roots,
            forced_roots,
            edges = report.edges_added,
            "Generated task graph"
        );
        Ok(report)
    }

    fn draw_failures<R: Rng>(&self, matrix: &mut FailureMatrix, rng: &mut R) -> Result<()> {
        let slots = matrix.width();
        let symmetric = self.config.orientation.is_symmetric();
        for from in FIRST_TASK..slots {
            for _ in 0..self.config.failures_per_vertex {
                let to = rng.random_range(0..slots);
                matrix.set(from, to, true, symmetric)?;
            }
        }
        Ok(())
    }

    /// Force random task columns full until `min_roots` is reached.
    ///
    /// Filling a column never changes whether another column is full, so the
    /// candidates are collected once and each is used at most once. Returns
    /// the number of forced columns.
    fn repair_roots<R: Rng>(
        &self,
        matrix: &mut FailureMatrix,
        mut roots: usize,
        rng: &mut R,
    ) -> Result<usize> {
        if roots >= self.config.min_roots {
            return Ok(0);
        }

        let mut open: Vec<usize> = (FIRST_TASK..matrix.width())
            .filter(|&col| !matrix.column_is_full(col))
            .collect();
        let mut forced = 0;
        while roots < self.config.min_roots && !open.is_empty() {
            let col = open.swap_remove(rng.random_range(0..open.len()));
            matrix.fill_column(col)?;
            roots += 1;
            forced += 1;
        }
        if roots < self.config.min_roots {
            debug!(
                roots,
                min_roots = self.config.min_roots,
                "Every task is already a root"
            );
        }
        Ok(forced)
    }
}

/// Build a graph with `task_count` tasks and populate it from `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or storage cannot be
/// allocated.
pub fn generate(task_count: usize, config: GeneratorConfig) -> Result<(TaskGraph, GenerationReport)> {
    let generator = Generator::new(config)?;
    let mut graph = TaskGraph::new(task_count)?;
    let report = generator.populate_seeded(&mut graph)?;
    Ok((graph, report))
}
