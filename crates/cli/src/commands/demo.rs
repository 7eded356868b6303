//! The built-in five task example.

use crate::errors::CliResult;
use crate::render::{OutputFormat, render};
use taskpath_graph::{SINK, TaskGraph};
use tracing::{info, instrument};

const DEMO_TASKS: usize = 5;
const DEMO_WEIGHT: u32 = 2;

/// A chain 1 -> 3 -> 2 -> 4 -> sink, with task 5 left disconnected.
pub fn demo_graph() -> taskpath_graph::Result<TaskGraph> {
    let mut graph = TaskGraph::new(DEMO_TASKS)?;
    for (from, to) in [(1, 3), (3, 2), (2, 4), (4, SINK)] {
        graph.add_edge(from, to, DEMO_WEIGHT)?;
    }
    graph.name_task(SINK, "success")?;
    Ok(graph)
}

#[instrument]
pub fn execute(format: OutputFormat) -> CliResult<String> {
    let graph = demo_graph()?;
    let paths = graph.root_paths()?;
    info!(roots = paths.len(), "Demo graph solved");
    render(format, &graph, &paths, None, None)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_graph_shape() {
        let graph = demo_graph().unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 4);
        assert_eq!(graph.roots().collect::<Vec<_>>(), vec![1, 5]);
        assert!(graph.validate(None).is_valid);
    }

    #[test]
    fn test_demo_text_output() {
        let output = execute(OutputFormat::Text).unwrap();

        assert!(output.starts_with("Vertices: 6. Edges: 4."));
        assert!(output.contains("v2: v4(2)"));
        assert!(output.contains(
            "root v1 -> cost 8: v1 -> v3 -> v2 -> v4 -> v0 [success]"
        ));
        assert!(output.contains("root v5 -> unreachable"));
    }

    #[test]
    fn test_demo_json_output() {
        let output = execute(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["paths"][0]["vertices"], serde_json::json!([1, 3, 2, 4, 0]));
        assert_eq!(value["paths"][0]["weight"], 8);
        assert_eq!(value["paths"][1]["reachable"], false);
    }
}
