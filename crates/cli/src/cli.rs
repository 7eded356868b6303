use crate::commands::{Command, ConfigOverrides};
use crate::logging::{LogLevel, TracingFormat};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use taskpath_graph::Orientation;

#[derive(Parser, Debug)]
#[command(name = "taskpath")]
#[command(
    about = "Generate weighted task graphs and find the cheapest path to completion for every root task"
)]
#[command(long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'l',
        long,
        global = true,
        help = "Set logging level",
        default_value = "warn",
        value_enum
    )]
    pub level: LogLevel,

    #[arg(
        long,
        global = true,
        help = "Log output format [default: compact, or json with --json]",
        value_enum
    )]
    pub log_format: Option<TracingFormat>,

    #[arg(long, global = true, help = "Emit results as JSON")]
    pub json: bool,
}

impl Cli {
    /// Log format to install: an explicit `--log-format` wins, then `--json`.
    pub fn tracing_format(&self) -> TracingFormat {
        match (self.log_format, self.json) {
            (Some(format), _) => format,
            (None, true) => TracingFormat::Json,
            (None, false) => TracingFormat::Compact,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "Show version information")]
    Version,
    #[command(about = "Run the built-in five task example")]
    Demo,
    #[command(about = "Generate a random task graph and print the cheapest path for every root")]
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(long, short = 'n', help = "Number of tasks (the sink is added on top)")]
    pub tasks: usize,

    #[arg(long, short = 'c', help = "TOML file with generator settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Random failure draws per task")]
    pub failures: Option<usize>,

    #[arg(long, help = "Failure orientation (directed, undirected)")]
    pub orientation: Option<Orientation>,

    #[arg(long, help = "Seed for the random source")]
    pub seed: Option<u64>,

    #[arg(long, help = "Minimum number of root tasks")]
    pub min_roots: Option<usize>,

    #[arg(long, help = "Largest edge weight")]
    pub max_weight: Option<u32>,

    #[arg(long, help = "Run the per-root queries in parallel")]
    pub parallel: bool,
}

impl From<Commands> for Command {
    fn from(cmd: Commands) -> Self {
        match cmd {
            Commands::Version => Self::Version,
            Commands::Demo => Self::Demo,
            Commands::Generate(args) => Self::Generate {
                tasks: args.tasks,
                config_path: args.config,
                overrides: ConfigOverrides {
                    min_roots: args.min_roots,
                    max_weight: args.max_weight,
                    failures_per_vertex: args.failures,
                    orientation: args.orientation,
                    seed: args.seed,
                },
                parallel: args.parallel,
            },
        }
    }
}

pub fn parse() -> Cli {
    Cli::parse()
}
