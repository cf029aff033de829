use crate::domain::error::{GraphError, GraphResult};
use crate::domain::graph::{GraphStore, Representation};

/// Builds a layered DAG: node `i` points at the next `floor(nodes * saturation%)`
/// nodes, clipped at `nodes`.
pub fn generate_dag(
    nodes: usize,
    saturation_percent: f64,
    representation: Representation,
) -> GraphResult<GraphStore> {
    if !saturation_percent.is_finite() || saturation_percent < 0.0 {
        return Err(GraphError::Configuration(format!(
            "saturation must be a non-negative percentage, got {saturation_percent}"
        )));
    }

    let mut graph = GraphStore::new(nodes, representation)?;
    // Saturation above 100% still cannot reach past the last node.
    let width = ((nodes as f64 * saturation_percent / 100.0).floor() as usize).min(nodes);

    for i in 1..=nodes {
        let end = (i + 1 + width).min(nodes + 1);
        let successors: Vec<usize> = (i + 1..end).collect();
        graph.add_edges(i, &successors)?;
    }

    Ok(graph)
}
