use crate::domain::graph::NodeId;
use thiserror::Error;

/// Failures raised by graph construction and graph queries.
///
/// Every failure stems from invalid input and is reported before any state
/// is mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("node {node} is out of range [1, {node_count}]")]
    OutOfRange { node: NodeId, node_count: usize },
}

pub type GraphResult<T> = Result<T, GraphError>;

/// Rejects ids outside `[1, node_count]`.
pub fn check_node(node: NodeId, node_count: usize) -> GraphResult<NodeId> {
    if node == 0 || node > node_count {
        return Err(GraphError::OutOfRange { node, node_count });
    }
    Ok(node)
}

pub fn check_nodes(nodes: &[NodeId], node_count: usize) -> GraphResult<()> {
    for &node in nodes {
        check_node(node, node_count)?;
    }
    Ok(())
}
