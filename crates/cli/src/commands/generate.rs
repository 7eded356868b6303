//! Random graph generation followed by a cheapest-path query per root.

use super::ConfigOverrides;
use crate::errors::{CliError, CliResult};
use crate::render::{OutputFormat, render};
use std::path::Path;
use taskpath_graph::{GeneratorConfig, generate};
use tracing::{info, instrument, warn};

/// Read generator settings from a TOML file.
pub fn load_config(path: &Path) -> CliResult<GeneratorConfig> {
    let src = std::fs::read_to_string(path).map_err(|e| CliError::file_error("read", path, e))?;
    toml::from_str(&src).map_err(|e| {
        CliError::config_parse_error(
            path.display().to_string(),
            src.clone(),
            e.message(),
            e.span().map(Into::into),
        )
    })
}

#[instrument(skip(overrides))]
pub fn execute(
    tasks: usize,
    config_path: Option<&Path>,
    overrides: &ConfigOverrides,
    parallel: bool,
    format: OutputFormat,
) -> CliResult<String> {
    let mut config = match config_path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };
    overrides.apply(&mut config);

    let (graph, report) = generate(tasks, config.clone())?;
    info!(
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        forced_roots = report.forced_roots,
        "Generated task graph"
    );

    let validation = graph.validate(Some(config.max_weight));
    for error in &validation.errors {
        warn!(%error, "Generated graph failed validation");
    }

    let paths = if parallel {
        graph.par_root_paths()?
    } else {
        graph.root_paths()?
    };

    render(format, &graph, &paths, Some(&config), Some(&report))
}
