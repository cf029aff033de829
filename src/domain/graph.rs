use crate::domain::error::{check_node, GraphError, GraphResult};
use crate::domain::representation::{AdjacencyList, AdjacencyMatrix, EdgeTable};
use crate::domain::state::AlgorithmState;
use crate::domain::traits::{EdgeStore, Edges, Neighbors};
use std::fmt;
use std::str::FromStr;

/// Node identifier in `[1, node_count]`.
pub type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    Matrix,
    List,
    Table,
}

impl Representation {
    pub const ALL: [Representation; 3] = [Self::Matrix, Self::List, Self::Table];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Matrix => "matrix",
            Self::List => "list",
            Self::Table => "table",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Representation {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "matrix" => Ok(Self::Matrix),
            "list" => Ok(Self::List),
            "table" => Ok(Self::Table),
            other => Err(GraphError::Configuration(format!(
                "unknown graph representation: {other:?} (expected matrix, list or table)"
            ))),
        }
    }
}

/// A graph in one representation plus the traversal state its algorithms share.
#[derive(Debug)]
pub struct GraphStore {
    representation: Representation,
    edges: Box<dyn EdgeStore>,
    pub(crate) state: AlgorithmState,
}

impl GraphStore {
    pub fn new(node_count: usize, representation: Representation) -> GraphResult<Self> {
        if node_count < 1 {
            return Err(GraphError::Configuration(format!(
                "node count must be at least 1, got {node_count}"
            )));
        }
        if node_count == usize::MAX {
            return Err(GraphError::Configuration(format!(
                "node count {node_count} leaves no room for 1-based ids"
            )));
        }

        let edges: Box<dyn EdgeStore> = match representation {
            Representation::Matrix => Box::new(AdjacencyMatrix::new(node_count)?),
            Representation::List => Box::new(AdjacencyList::new(node_count)),
            Representation::Table => Box::new(EdgeTable::new(node_count)),
        };

        Ok(Self {
            representation,
            edges,
            state: AlgorithmState::new(node_count),
        })
    }

    /// Builds a store from a textual kind such as `"matrix"`.
    pub fn from_kind(node_count: usize, kind: &str) -> GraphResult<Self> {
        Self::new(node_count, kind.parse()?)
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn node_count(&self) -> usize {
        self.edges.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        1..=self.node_count()
    }

    pub fn add_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        self.edges.add_edges(node, successors)
    }

    pub fn replace_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        self.edges.replace_edges(node, successors)
    }

    pub fn neighbors(&self, node: NodeId) -> GraphResult<Neighbors<'_>> {
        self.edges.neighbors(node)
    }

    pub fn has_incoming_edge(&self, node: NodeId) -> GraphResult<bool> {
        self.edges.has_incoming_edge(node)
    }

    pub fn has_self_loop(&self, node: NodeId) -> GraphResult<bool> {
        Ok(self.neighbors(node)?.any(|w| w == node))
    }

    pub fn edges(&self) -> Edges<'_> {
        self.edges.edges()
    }

    pub fn state(&self) -> &AlgorithmState {
        &self.state
    }

    pub fn reset_visited(&mut self) {
        self.state.reset();
    }

    pub(crate) fn check_node(&self, node: NodeId) -> GraphResult<NodeId> {
        check_node(node, self.node_count())
    }

    /// Edge data and traversal state borrowed apart, for the algorithm cores.
    pub(crate) fn parts_mut(&mut self) -> (&dyn EdgeStore, &mut AlgorithmState) {
        (&*self.edges, &mut self.state)
    }
}

/// Strongly connected components in completion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Indexed by node id; slot 0 is `usize::MAX`.
    pub component_of: Vec<usize>,
    pub components: Vec<Vec<NodeId>>,
    pub cyclic_component: Vec<bool>,
}

impl SccResult {
    pub fn component(&self, node: NodeId) -> Option<usize> {
        self.component_of
            .get(node)
            .copied()
            .filter(|&c| c != usize::MAX)
    }

    /// Components in forward topological order of the condensation graph.
    pub fn topological_order(&self) -> Vec<&[NodeId]> {
        self.components.iter().rev().map(|c| c.as_slice()).collect()
    }

    pub fn cyclic_count(&self) -> usize {
        self.cyclic_component.iter().filter(|&&b| b).count()
    }

    pub fn is_acyclic(&self) -> bool {
        self.cyclic_count() == 0
    }
}
