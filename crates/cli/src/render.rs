//! Text and JSON rendering of graphs and paths.

use crate::errors::CliResult;
use serde::Serialize;
use taskpath_graph::{FIRST_TASK, GenerationReport, GeneratorConfig, Path, Task, TaskGraph};

/// How command results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Serialize)]
pub struct EdgeView {
    pub from: usize,
    pub to: usize,
    pub weight: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphView {
    pub vertex_count: usize,
    pub edge_count: usize,
    pub roots: Vec<usize>,
    pub edges: Vec<EdgeView>,
}

impl From<&TaskGraph> for GraphView {
    fn from(graph: &TaskGraph) -> Self {
        Self {
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            roots: graph.roots().collect(),
            edges: graph
                .edges()
                .map(|(from, to, weight)| EdgeView { from, to, weight })
                .collect(),
        }
    }
}

/// A path with the unreachable sentinel replaced by `reachable: false`.
#[derive(Debug, Serialize)]
pub struct PathView {
    pub source: usize,
    pub reachable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
    pub vertices: Vec<usize>,
}

impl From<&Path> for PathView {
    fn from(path: &Path) -> Self {
        Self {
            source: path.source(),
            reachable: path.is_reachable(),
            weight: path.is_reachable().then_some(path.weight()),
            vertices: path.vertices().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    config: Option<&'a GeneratorConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    generation: Option<&'a GenerationReport>,
    graph: GraphView,
    paths: Vec<PathView>,
}

fn vertex_label(graph: &TaskGraph, vertex: usize) -> String {
    match graph.task(vertex).and_then(Task::name) {
        Some(name) => format!("v{vertex} [{name}]"),
        None => format!("v{vertex}"),
    }
}

/// Adjacency listing: a header line, then one line per task.
pub fn graph_text(graph: &TaskGraph) -> String {
    let mut out = format!(
        "Vertices: {}. Edges: {}.\n",
        graph.vertex_count(),
        graph.edge_count()
    );
    for vertex in FIRST_TASK..graph.vertex_count() {
        out.push_str(&vertex_label(graph, vertex));
        out.push(':');
        for (target, weight) in graph.neighbors(vertex) {
            out.push_str(&format!(" v{target}({weight})"));
        }
        out.push('\n');
    }
    out
}

pub fn path_text(graph: &TaskGraph, path: &Path) -> String {
    let root = vertex_label(graph, path.source());
    if !path.is_reachable() {
        return format!("root {root} -> unreachable");
    }
    let route = path
        .vertices()
        .iter()
        .map(|&vertex| vertex_label(graph, vertex))
        .collect::<Vec<_>>()
        .join(" -> ");
    format!("root {root} -> cost {}: {route}", path.weight())
}

/// Render a graph and its root paths in `format`.
pub fn render(
    format: OutputFormat,
    graph: &TaskGraph,
    paths: &[Path],
    config: Option<&GeneratorConfig>,
    generation: Option<&GenerationReport>,
) -> CliResult<String> {
    match format {
        OutputFormat::Json => {
            let view = ReportView {
                config,
                generation,
                graph: GraphView::from(graph),
                paths: paths.iter().map(PathView::from).collect(),
            };
            Ok(serde_json::to_string_pretty(&view)?)
        }
        OutputFormat::Text => {
            let mut out = String::new();
            if let Some(seed) = generation.and_then(|report| report.seed) {
                out.push_str(&format!("Seed: {seed}\n"));
            }
            out.push_str(&graph_text(graph));
            out.push('\n');
            let lines: Vec<String> = paths.iter().map(|path| path_text(graph, path)).collect();
            out.push_str(&lines.join("\n"));
            Ok(out)
        }
    }
}
