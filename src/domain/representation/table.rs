use crate::domain::error::{check_node, check_nodes, GraphResult};
use crate::domain::graph::NodeId;
use crate::domain::traits::{EdgeStore, Edges, Neighbors};

/// Unordered `(source, destination)` pairs. Every query is a full scan.
#[derive(Debug, Clone)]
pub struct EdgeTable {
    node_count: usize,
    pairs: Vec<(NodeId, NodeId)>,
}

impl EdgeTable {
    pub fn new(node_count: usize) -> Self {
        Self {
            node_count,
            pairs: Vec::new(),
        }
    }
}

impl EdgeStore for EdgeTable {
    fn node_count(&self) -> usize {
        self.node_count
    }

    fn add_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        check_node(node, self.node_count)?;
        check_nodes(successors, self.node_count)?;
        self.pairs.extend(successors.iter().map(|&v| (node, v)));
        Ok(())
    }

    fn replace_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        check_node(node, self.node_count)?;
        check_nodes(successors, self.node_count)?;
        self.pairs.retain(|&(src, _)| src != node);
        self.pairs.extend(successors.iter().map(|&v| (node, v)));
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> GraphResult<Neighbors<'_>> {
        check_node(node, self.node_count)?;
        Ok(Box::new(
            self.pairs
                .iter()
                .filter(move |&&(src, _)| src == node)
                .map(|&(_, dst)| dst),
        ))
    }

    fn has_incoming_edge(&self, node: NodeId) -> GraphResult<bool> {
        check_node(node, self.node_count)?;
        Ok(self.pairs.iter().any(|&(_, dst)| dst == node))
    }

    fn edges(&self) -> Edges<'_> {
        Box::new(self.pairs.iter().copied())
    }

    fn edge_count(&self) -> usize {
        self.pairs.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neighbors_follow_pair_insertion_order() {
        let mut t = EdgeTable::new(3);
        t.add_edges(1, &[3]).expect("add");
        t.add_edges(2, &[1]).expect("add");
        t.add_edges(1, &[2]).expect("add");

        let ns: Vec<_> = t.neighbors(1).expect("neighbors").collect();
        assert_eq!(ns, vec![3, 2]);
        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(1, 3), (2, 1), (1, 2)]);
    }

    #[test]
    fn replace_drops_only_pairs_from_that_source() {
        let mut t = EdgeTable::new(3);
        t.add_edges(1, &[2, 3]).expect("add");
        t.add_edges(3, &[1]).expect("add");
        t.replace_edges(1, &[]).expect("replace");

        assert_eq!(t.edges().collect::<Vec<_>>(), vec![(3, 1)]);
        assert!(t.has_incoming_edge(1).expect("incoming"));
        assert!(!t.has_incoming_edge(2).expect("incoming"));
    }

    #[test]
    fn out_of_range_destination_is_rejected() {
        let mut t = EdgeTable::new(2);
        assert!(t.add_edges(1, &[0]).is_err());
        assert_eq!(t.edge_count(), 0);
    }
}
