use crate::domain::error::{check_node, check_nodes, GraphResult};
use crate::domain::graph::NodeId;
use crate::domain::traits::{EdgeStore, Edges, Neighbors};

/// Node -> successors in insertion order. Slot 0 is unused.
#[derive(Debug, Clone)]
pub struct AdjacencyList {
    successors: Vec<Vec<NodeId>>,
}

impl AdjacencyList {
    pub fn new(node_count: usize) -> Self {
        Self {
            successors: vec![Vec::new(); node_count + 1],
        }
    }
}

impl EdgeStore for AdjacencyList {
    fn node_count(&self) -> usize {
        self.successors.len() - 1
    }

    fn add_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        let n = self.node_count();
        check_node(node, n)?;
        check_nodes(successors, n)?;
        self.successors[node].extend_from_slice(successors);
        Ok(())
    }

    fn replace_edges(&mut self, node: NodeId, successors: &[NodeId]) -> GraphResult<()> {
        let n = self.node_count();
        check_node(node, n)?;
        check_nodes(successors, n)?;
        self.successors[node] = successors.to_vec();
        Ok(())
    }

    fn neighbors(&self, node: NodeId) -> GraphResult<Neighbors<'_>> {
        check_node(node, self.node_count())?;
        Ok(Box::new(self.successors[node].iter().copied()))
    }

    fn has_incoming_edge(&self, node: NodeId) -> GraphResult<bool> {
        check_node(node, self.node_count())?;
        Ok(self.successors.iter().any(|outs| outs.contains(&node)))
    }

    fn edges(&self) -> Edges<'_> {
        Box::new(
            self.successors
                .iter()
                .enumerate()
                .skip(1)
                .flat_map(|(u, outs)| outs.iter().map(move |&v| (u, v))),
        )
    }

    fn edge_count(&self) -> usize {
        self.successors.iter().map(|v| v.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_edges_appends_in_insertion_order() {
        let mut l = AdjacencyList::new(4);
        l.add_edges(1, &[4, 2]).expect("add");
        l.add_edges(1, &[3]).expect("add");

        let ns: Vec<_> = l.neighbors(1).expect("neighbors").collect();
        assert_eq!(ns, vec![4, 2, 3]);
    }

    #[test]
    fn replace_edges_overwrites() {
        let mut l = AdjacencyList::new(3);
        l.add_edges(2, &[1, 3]).expect("add");
        l.replace_edges(2, &[3]).expect("replace");

        assert_eq!(l.neighbors(2).expect("n").collect::<Vec<_>>(), vec![3]);
        assert!(!l.has_incoming_edge(1).expect("incoming"));
        assert!(l.has_incoming_edge(3).expect("incoming"));
    }

    #[test]
    fn neighbors_is_restartable() {
        let mut l = AdjacencyList::new(2);
        l.add_edges(1, &[2]).expect("add");

        assert_eq!(l.neighbors(1).expect("n").count(), 1);
        assert_eq!(l.neighbors(1).expect("n").count(), 1);
    }

    #[test]
    fn out_of_range_source_is_rejected() {
        let mut l = AdjacencyList::new(2);
        assert!(l.add_edges(3, &[1]).is_err());
        assert!(l.neighbors(0).is_err());
        assert!(l.has_incoming_edge(3).is_err());
    }
}
