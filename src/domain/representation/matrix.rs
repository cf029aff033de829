use crate::domain::error::{check_node, check_nodes, GraphError, GraphResult};
use crate::domain::graph::NodeId;
use crate::domain::traits::{EdgeStore, Edges, Neighbors};

/// Dense `(N+1) x (N+1)` boolean adjacency; row 0 and column 0 stay empty.
#[derive(Debug, Clone)]
pub struct AdjacencyMatrix {
    node_count: usize,
    cells: Vec<bool>,
}

impl AdjacencyMatrix {
    pub fn new(node_count: usize) -> GraphResult<Self> {
        let too_large = || {
            GraphError::Configuration(format!(
                "{node_count} nodes do not fit in an adjacency matrix"
            ))
        };
        let side = node_count.checked_add(1).ok_or_else(too_large)?;
        let len = side.checked_mul(side).ok_or_else(too_large)?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| too_large())?;
        cells.resize(len, false);

        Ok(Self { node_count, cells })
    }

    fn cell(&self, u: NodeId, v: NodeId) -> bool {
        self.cells[u * (self.node_count + 1) + v]
    }

    fn set(&mut self, u: NodeId, v: NodeId, value: bool) {
        self.cells[u * (self.node_count + 1) + v] = value;
    }
}

impl EdgeStore for AdjacencyMatrix {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn add_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        check_node(node, self.node_count)?;
        check_nodes(successors, self.node_count)?;
        for &v in successors {
            self.set(node, v, true);
        }
        Ok(())
    }

    fn replace_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        check_node(node, self.node_count)?;
        check_nodes(successors, self.node_count)?;
        for v in 1..=self.node_count {
            self.set(node, v, false);
        }
        for &v in successors {
            self.set(node, v, true);
        }
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> GraphResult<Neighbors<'_>> {
        check_node(node, self.node_count)?;
        Ok(Box::new(
            (1..=self.node_count).filter(move |&v| self.cell(node, v)),
        ))
    }

    fn has_incoming_edge(&self, node: NodeId) -> GraphResult<bool> {
        check_node(node, self.node_count)?;
        Ok((1..=self.node_count).any(|u| self.cell(u, node)))
    }

    fn edges(&self) -> Edges<'_> {
        let n = self.node_count;
        Box::new(
            (1..=n).flat_map(move |u| (1..=n).filter(move |&v| self.cell(u, v)).map(move |v| (u, v))),
        )
    }

    fn edge_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_edges_collapse_into_one_cell() {
        let mut m = AdjacencyMatrix::new(3).expect("matrix");
        m.add_edges(1, &[3, 2]).expect("add");
        m.add_edges(1, &[2]).expect("add");

        let ns: Vec<_> = m.neighbors(1).expect("neighbors").collect();
        assert_eq!(ns, vec![2, 3]);
        assert_eq!(m.edge_count(), 2);
    }

    #[test]
    fn replace_clears_the_row_only() {
        let mut m = AdjacencyMatrix::new(3).expect("matrix");
        m.add_edges(1, &[2, 3]).expect("add");
        m.add_edges(2, &[1]).expect("add");
        m.replace_edges(1, &[1]).expect("replace");

        assert_eq!(m.neighbors(1).expect("n").collect::<Vec<_>>(), vec![1]);
        assert_eq!(m.neighbors(2).expect("n").collect::<Vec<_>>(), vec![1]);
        assert!(!m.has_incoming_edge(3).expect("incoming"));
    }

    #[test]
    fn failed_add_leaves_row_untouched() {
        let mut m = AdjacencyMatrix::new(2).expect("matrix");
        assert!(m.add_edges(1, &[2, 5]).is_err());
        assert_eq!(m.edge_count(), 0);
    }

    #[test]
    fn oversized_matrix_is_a_configuration_error() {
        for n in [usize::MAX, 1usize << 33] {
            assert!(matches!(
                AdjacencyMatrix::new(n),
                Err(GraphError::Configuration(_))
            ));
        }
    }

    #[test]
    fn edges_are_row_major() {
        let mut m = AdjacencyMatrix::new(3).expect("matrix");
        m.add_edges(3, &[1]).expect("add");
        m.add_edges(1, &[3, 2]).expect("add");

        let es: Vec<_> = m.edges().collect();
        assert_eq!(es, vec![(1, 2), (1, 3), (3, 1)]);
    }
}
