//! Depth-first traversal and the zero-indegree start-node finder.
//!
//! Both work over the `EdgeStore` capability interface only, so the three
//! representations behave identically apart from neighbor order.

use crate::domain::error::GraphResult;
use crate::domain::graph::{GraphStore, NodeId};
use crate::domain::state::AlgorithmState;
use crate::domain::traits::{EdgeStore, Neighbors};

impl GraphStore {
    /// Pre-order walk from `start` over nodes not yet visited.
    ///
    /// Does not reset state: a visited `start` yields an empty sequence.
    pub fn dfs(&mut self, start: NodeId) -> GraphResult<Vec<NodeId>> {
        self.check_node(start)?;
        let (edges, state) = self.parts_mut();
        let mut order = Vec::new();
        walk(edges, state, start, &mut order)?;
        Ok(order)
    }

    /// Resets visited state, then walks from every still-unvisited node in
    /// ascending id order. Every node appears exactly once.
    pub fn dfs_all(&mut self) -> GraphResult<Vec<NodeId>> {
        self.reset_visited();
        let n = self.node_count();
        let (edges, state) = self.parts_mut();
        let mut order = Vec::with_capacity(n);
        for node in 1..=n {
            walk(edges, state, node, &mut order)?;
        }
        Ok(order)
    }

    /// First unvisited node (ascending id) with no incoming edge.
    ///
    /// `None` only says no such node exists among the unvisited ones; with
    /// several components it does not prove the whole graph is cyclic.
    pub fn find_start_node(&self) -> GraphResult<Option<NodeId>> {
        for node in self.nodes() {
            if self.state.is_visited(node) {
                continue;
            }
            if !self.has_incoming_edge(node)? {
                return Ok(Some(node));
            }
        }
        Ok(None)
    }
}

// Explicit frame stack: one lazy neighbor iterator per node on the current path.
fn walk(
    edges: &dyn EdgeStore,
    state: &mut AlgorithmState,
    start: NodeId,
    order: &mut Vec<NodeId>,
) -> GraphResult<()> {
    if state.visited[start] {
        return Ok(());
    }
    state.visited[start] = true;
    order.push(start);

    let mut frames: Vec<Neighbors<'_>> = vec![edges.neighbors(start)?];

    while let Some(frame) = frames.last_mut() {
        let next = frame.find(|&w| !state.visited[w]);
        match next {
            Some(w) => {
                state.visited[w] = true;
                order.push(w);
                frames.push(edges.neighbors(w)?);
            }
            None => {
                frames.pop();
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::domain::graph::{GraphStore, Representation};

    fn chain(repr: Representation) -> GraphStore {
        let mut g = GraphStore::new(3, repr).expect("store");
        g.add_edges(1, &[2]).expect("edges");
        g.add_edges(2, &[3]).expect("edges");
        g
    }

    #[test]
    fn dfs_is_preorder_and_skips_visited_start() {
        for repr in Representation::ALL {
            let mut g = chain(repr);
            assert_eq!(g.dfs(1).expect("dfs"), vec![1, 2, 3]);
            assert!(g.dfs(2).expect("dfs").is_empty());
        }
    }

    #[test]
    fn dfs_all_covers_disconnected_nodes_in_ascending_root_order() {
        let mut g = GraphStore::new(5, Representation::List).expect("store");
        g.add_edges(2, &[5]).expect("edges");
        g.add_edges(4, &[1]).expect("edges");

        assert_eq!(g.dfs_all().expect("dfs_all"), vec![1, 2, 5, 3, 4]);
    }

    #[test]
    fn dfs_all_resets_previous_runs() {
        let mut g = chain(Representation::Matrix);
        g.dfs(1).expect("dfs");
        assert_eq!(g.dfs_all().expect("dfs_all"), vec![1, 2, 3]);
    }

    #[test]
    fn dfs_on_edgeless_graph_yields_start_only() {
        let mut g = GraphStore::new(2, Representation::Table).expect("store");
        assert_eq!(g.dfs(2).expect("dfs"), vec![2]);
    }

    #[test]
    fn dfs_rejects_out_of_range_start() {
        let mut g = chain(Representation::List);
        assert!(g.dfs(0).is_err());
        assert!(g.dfs(4).is_err());
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let n = 50_000;
        let mut g = GraphStore::new(n, Representation::List).expect("store");
        for u in 1..n {
            g.add_edges(u, &[u + 1]).expect("edges");
        }

        let order = g.dfs_all().expect("dfs_all");
        assert_eq!(order.len(), n);
        assert_eq!(order.first(), Some(&1));
        assert_eq!(order.last(), Some(&n));
    }

    #[test]
    fn start_node_skips_visited_and_nodes_with_incoming_edges() {
        let mut g = chain(Representation::Table);
        assert_eq!(g.find_start_node().expect("start"), Some(1));

        g.dfs(1).expect("dfs");
        assert_eq!(g.find_start_node().expect("start"), None);
    }

    #[test]
    fn start_node_is_none_on_a_cycle() {
        for repr in Representation::ALL {
            let mut g = GraphStore::new(3, repr).expect("store");
            g.add_edges(1, &[2]).expect("edges");
            g.add_edges(2, &[3]).expect("edges");
            g.add_edges(3, &[1]).expect("edges");
            assert_eq!(g.find_start_node().expect("start"), None);
        }
    }
}
