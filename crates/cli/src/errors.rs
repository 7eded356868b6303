//! Error display using miette for contextual error reporting
//!
//! This module provides CLI-specific error types and maps them to exit codes.

use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

/// Exit code for success
pub const EXIT_OK: i32 = 0;
/// CLI or configuration error exit code
pub const EXIT_CLI: i32 = 2;
/// Task graph error exit code
pub const EXIT_GRAPH: i32 = 3;

/// CLI-specific error types with diagnostics
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    #[error("Task graph operation failed")]
    #[diagnostic(code(taskpath::cli::graph))]
    Graph {
        #[source]
        source: taskpath_graph::Error,
        #[help]
        help: Option<String>,
    },

    #[error("Configuration parsing failed in {config_file}: {message}")]
    #[diagnostic(code(taskpath::cli::config_parse_error))]
    ConfigParseError {
        config_file: String,
        message: String,
        #[source_code]
        src: String,
        #[label("error occurred here")]
        error_span: Option<SourceSpan>,
    },

    #[error("File operation failed: {operation} {}", .path.display())]
    #[diagnostic(
        code(taskpath::cli::file_error),
        help("Check file permissions and ensure the path exists")
    )]
    FileError {
        operation: String,
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize output")]
    #[diagnostic(code(taskpath::cli::output))]
    Output {
        #[source]
        source: serde_json::Error,
    },

    #[error("Tracing initialization failed for {config_used} output")]
    #[diagnostic(
        code(taskpath::cli::tracing_error),
        help("Check RUST_LOG and the --level / --log-format options")
    )]
    TracingError {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
        config_used: String,
    },
}

impl CliError {
    pub fn config_parse_error(
        config_file: impl Into<String>,
        src: impl Into<String>,
        message: impl Into<String>,
        error_span: Option<SourceSpan>,
    ) -> Self {
        Self::ConfigParseError {
            config_file: config_file.into(),
            message: message.into(),
            src: src.into(),
            error_span,
        }
    }

    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<std::path::PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileError {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    pub fn tracing(
        source: impl std::error::Error + Send + Sync + 'static,
        config_used: impl Into<String>,
    ) -> Self {
        Self::TracingError {
            source: Box::new(source),
            config_used: config_used.into(),
        }
    }
}

impl From<taskpath_graph::Error> for CliError {
    fn from(source: taskpath_graph::Error) -> Self {
        use taskpath_graph::Error;

        let help = match &source {
            Error::Allocation { .. } => Some("Try again with fewer tasks".to_string()),
            Error::InvalidConfig { .. } => {
                Some("Check --max-weight or maxWeight in the config file".to_string())
            }
            Error::InvalidVertex { .. } | Error::InvalidQuery { .. } => Some(format!(
                "Tasks are numbered from 1; vertex {} is the sink",
                taskpath_graph::SINK
            )),
            Error::InvalidWeight { .. }
            | Error::CellOutOfBounds { .. }
            | Error::InvariantViolated { .. } => None,
        };
        Self::Graph { source, help }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::Output { source }
    }
}

/// Map CLI error to appropriate exit code
#[must_use]
pub const fn exit_code_for(err: &CliError) -> i32 {
    match err {
        CliError::Graph {
            source: taskpath_graph::Error::InvalidConfig { .. },
            ..
        }
        | CliError::ConfigParseError { .. }
        | CliError::FileError { .. }
        | CliError::TracingError { .. } => EXIT_CLI,
        CliError::Graph { .. } | CliError::Output { .. } => EXIT_GRAPH,
    }
}

/// Result type for CLI operations
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error() {
        let source = "maxWeight = \"heavy\"\n";
        let error = CliError::config_parse_error(
            "taskpath.toml",
            source,
            "invalid type",
            Some(SourceSpan::new(12_usize.into(), 7_usize)),
        );

        assert!(error.to_string().contains("Configuration parsing failed"));
        assert_eq!(exit_code_for(&error), EXIT_CLI);
    }

    #[test]
    fn test_graph_error_conversion() {
        let error: CliError = taskpath_graph::Error::InvalidQuery {
            vertex: 9,
            vertex_count: 3,
        }
        .into();

        assert!(matches!(error, CliError::Graph { help: Some(_), .. }));
        assert_eq!(exit_code_for(&error), EXIT_GRAPH);
    }

    #[test]
    fn test_invalid_config_is_cli_error() {
        let error: CliError = taskpath_graph::Error::config("maxWeight must be at least 1").into();
        assert_eq!(exit_code_for(&error), EXIT_CLI);
    }

    #[test]
    fn test_file_error_display() {
        let error = CliError::file_error(
            "read",
            "/missing/taskpath.toml",
            std::io::Error::from(std::io::ErrorKind::NotFound),
        );
        assert!(error.to_string().contains("/missing/taskpath.toml"));
    }
}
