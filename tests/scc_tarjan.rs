use std::collections::BTreeSet;
use tarjan_graph_sorter::domain::graph::{GraphStore, Representation};
use tarjan_graph_sorter::domain::traits::SccDetector;
use tarjan_graph_sorter::infrastructure::scc_tarjan::TarjanSccDetector;

fn build(repr: Representation, n: usize, edges: &[(usize, &[usize])]) -> GraphStore {
    let mut g = GraphStore::new(n, repr).expect("store");
    for (node, succ) in edges {
        g.add_edges(*node, succ).expect("edges");
    }
    g
}

fn as_sets(components: &[Vec<usize>]) -> BTreeSet<BTreeSet<usize>> {
    components
        .iter()
        .map(|c| c.iter().copied().collect())
        .collect()
}

#[test]
fn tarjan_detects_self_loop_as_cyclic() {
    // 1 -> 1
    let mut g = build(Representation::Matrix, 1, &[(1, &[1])]);

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");

    assert_eq!(scc.components, vec![vec![1]]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn tarjan_detects_two_node_cycle() {
    // 1 <-> 2
    let mut g = build(Representation::List, 2, &[(1, &[2]), (2, &[1])]);

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");

    assert_eq!(scc.components, vec![vec![1, 2]]);
    assert_eq!(scc.cyclic_component, vec![true]);
}

#[test]
fn example_a_cycle_plus_isolated_node() {
    for repr in Representation::ALL {
        let mut g = build(repr, 4, &[(1, &[2]), (2, &[3]), (3, &[1])]);

        let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");

        assert_eq!(scc.components, vec![vec![4], vec![1, 2, 3]], "{repr}");
        assert_eq!(scc.cyclic_component, vec![false, true]);
        assert_eq!(scc.component(2), Some(1));
    }
}

#[test]
fn example_b_dag_completes_in_reverse_topological_order() {
    for repr in Representation::ALL {
        let mut g = build(repr, 3, &[(1, &[2]), (2, &[3])]);

        let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
        assert_eq!(scc.components, vec![vec![3], vec![2], vec![1]], "{repr}");
        assert!(scc.is_acyclic());

        let forward: Vec<Vec<usize>> = scc.topological_order().iter().map(|c| c.to_vec()).collect();
        assert_eq!(forward, vec![vec![1], vec![2], vec![3]]);

        assert_eq!(g.dfs_all().expect("dfs"), vec![1, 2, 3]);
    }
}

#[test]
fn long_cycle_is_one_component_for_every_representation() {
    let k = 7;
    for repr in Representation::ALL {
        let mut g = GraphStore::new(k, repr).expect("store");
        for u in 1..=k {
            g.add_edges(u, &[u % k + 1]).expect("edges");
        }

        let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
        assert_eq!(scc.components, vec![(1..=k).collect::<Vec<_>>()], "{repr}");
    }
}

#[test]
fn every_component_is_found_when_no_seed_exists() {
    // Two disjoint cycles: no zero-indegree node anywhere.
    let mut g = build(
        Representation::Table,
        5,
        &[(1, &[2]), (2, &[1]), (3, &[4]), (4, &[5]), (5, &[3])],
    );
    assert_eq!(g.find_start_node().expect("start"), None);

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
    assert_eq!(
        as_sets(&scc.components),
        as_sets(&[vec![1, 2], vec![3, 4, 5]])
    );
}

#[test]
fn closed_components_do_not_lower_later_low_links() {
    // 1 -> 2 <-> 3, 1 -> 4 -> 3: node 4 reaches the closed {2,3} only.
    let mut g = build(
        Representation::List,
        4,
        &[(1, &[2, 4]), (2, &[3]), (3, &[2]), (4, &[3])],
    );

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
    assert_eq!(scc.components, vec![vec![2, 3], vec![4], vec![1]]);
}

#[test]
fn deep_chain_does_not_overflow() {
    let n = 60_000;
    let mut g = GraphStore::new(n, Representation::List).expect("store");
    for u in 1..n {
        g.add_edges(u, &[u + 1]).expect("edges");
    }
    g.add_edges(n, &[1]).expect("edges");

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
    assert_eq!(scc.components.len(), 1);
    assert_eq!(scc.components[0].len(), n);
}

#[test]
fn edgeless_graph_is_all_singletons() {
    let mut g = GraphStore::new(3, Representation::Matrix).expect("store");

    let scc = TarjanSccDetector.compute_scc(&mut g).expect("scc");
    assert_eq!(scc.components, vec![vec![1], vec![2], vec![3]]);
}
