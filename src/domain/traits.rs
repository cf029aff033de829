use crate::domain::error::GraphResult;
use crate::domain::graph::{GraphStore, NodeId, SccResult};
use std::fmt;

/// Lazy, finite successor sequence. Calling `neighbors` again restarts it.
pub type Neighbors<'a> = Box<dyn Iterator<Item = NodeId> + 'a>;

/// Full `(source, destination)` edge enumeration.
pub type Edges<'a> = Box<dyn Iterator<Item = (NodeId, NodeId)> + 'a>;

/// Capability interface shared by the matrix, list and table representations.
///
/// Algorithms only ever talk to this trait; node ids are validated by the
/// implementations against `[1, node_count]`.
pub trait EdgeStore: fmt::Debug + Send + Sync {
    fn node_count(&self) -> usize;

    /// Adds `successors` to the existing successors of `node`.
    fn add_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()>;

    /// Discards the successors of `node`, then stores `successors`.
    fn replace_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()>;

    /// Ordering: matrix ascending id, list insertion order, table
    /// edge-insertion order (O(E) scan per call).
    fn neighbors(&self, node: NodeId) -> GraphResult<Neighbors<'_>>;

    /// Matrix O(N) column scan, table O(E), list O(N * avg degree).
    fn has_incoming_edge(&self, node: NodeId) -> GraphResult<bool>;

    fn edges(&self) -> Edges<'_>;

    fn edge_count(&self) -> usize {
        self.edges().count()
    }
}

pub trait SccDetector {
    fn compute_scc(&self, graph: &mut GraphStore) -> GraphResult<SccResult>;
}
