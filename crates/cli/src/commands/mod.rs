pub mod demo;
pub mod generate;
pub mod version;

use crate::errors::CliResult;
use crate::render::OutputFormat;
use std::path::PathBuf;
use taskpath_graph::{GeneratorConfig, Orientation};
use tracing::instrument;

/// Generator settings given on the command line; they win over the config file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub min_roots: Option<usize>,
    pub max_weight: Option<u32>,
    pub failures_per_vertex: Option<usize>,
    pub orientation: Option<Orientation>,
    pub seed: Option<u64>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut GeneratorConfig) {
        if let Some(min_roots) = self.min_roots {
            config.min_roots = min_roots;
        }
        if let Some(max_weight) = self.max_weight {
            config.max_weight = max_weight;
        }
        if let Some(failures) = self.failures_per_vertex {
            config.failures_per_vertex = failures;
        }
        if let Some(orientation) = self.orientation {
            config.orientation = orientation;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
    }
}

#[derive(Debug, Clone)]
pub enum Command {
    Version,
    Demo,
    Generate {
        tasks: usize,
        config_path: Option<PathBuf>,
        overrides: ConfigOverrides,
        parallel: bool,
    },
}

pub struct CommandExecutor {
    format: OutputFormat,
}

impl CommandExecutor {
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Run `command` and return what should be written to stdout.
    #[instrument(skip(self))]
    pub fn execute(&self, command: Command) -> CliResult<String> {
        match command {
            Command::Version => Ok(version::get_version_info()),
            Command::Demo => demo::execute(self.format),
            Command::Generate {
                tasks,
                config_path,
                overrides,
                parallel,
            } => generate::execute(
                tasks,
                config_path.as_deref(),
                &overrides,
                parallel,
                self.format,
            ),
        }
    }
}
