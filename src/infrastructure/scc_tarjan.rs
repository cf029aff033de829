use crate::domain::error::GraphResult;
use crate::domain::graph::{GraphStore, NodeId, SccResult};
use crate::domain::state::AlgorithmState;
use crate::domain::traits::{EdgeStore, Neighbors, SccDetector};

/// Tarjan's low-link algorithm over any `EdgeStore`, driven iteratively.
pub struct TarjanSccDetector;

impl SccDetector for TarjanSccDetector {
    fn compute_scc(&self, graph: &mut GraphStore) -> GraphResult<SccResult> {
        tarjan_scc(graph)
    }
}

fn tarjan_scc(graph: &mut GraphStore) -> GraphResult<SccResult> {
    graph.reset_visited();
    let n = graph.node_count();

    // Seed with a zero-indegree node when one exists, then cover every other
    // node; a seed alone would miss unreachable components.
    let seed = zero_indegree_seed(graph);
    let mut components: Vec<Vec<NodeId>> = Vec::new();
    {
        let (edges, state) = graph.parts_mut();
        let roots = seed.into_iter().chain(1..=n);
        for root in roots {
            if state.visited[root] {
                continue;
            }
            strong_connect(edges, state, root, &mut components)?;
        }
    }

    let mut component_of = vec![usize::MAX; n + 1];
    for (cid, comp) in components.iter_mut().enumerate() {
        comp.sort_unstable();
        for &v in comp.iter() {
            component_of[v] = cid;
        }
    }

    let mut cyclic_component = vec![false; components.len()];

    for (cid, comp) in components.iter().enumerate() {
        if comp.len() > 1 {
            cyclic_component[cid] = true;
            continue;
        }
        let only = comp[0];
        if graph.has_self_loop(only)? {
            cyclic_component[cid] = true;
        }
    }

    Ok(SccResult {
        component_of,
        components,
        cyclic_component,
    })
}

/// Same answer as `find_start_node` on fresh state, in a single edge pass
/// instead of one incoming-edge scan per node.
fn zero_indegree_seed(graph: &GraphStore) -> Option<NodeId> {
    let mut targeted = vec![false; graph.node_count() + 1];
    for (_, v) in graph.edges() {
        targeted[v] = true;
    }
    graph.nodes().find(|&v| !targeted[v])
}

struct Frame<'a> {
    node: NodeId,
    successors: Neighbors<'a>,
}

/// Runs the low-link procedure from `root`, appending each closed component
/// in completion order.
fn strong_connect<'a>(
    edges: &'a dyn EdgeStore,
    state: &mut AlgorithmState,
    root: NodeId,
    components: &mut Vec<Vec<NodeId>>,
) -> GraphResult<()> {
    state.enter(root);
    let mut frames = vec![Frame {
        node: root,
        successors: edges.neighbors(root)?,
    }];

    while let Some(frame) = frames.last_mut() {
        let v = frame.node;

        if let Some(w) = frame.successors.next() {
            if !state.visited[w] {
                state.enter(w);
                frames.push(Frame {
                    node: w,
                    successors: edges.neighbors(w)?,
                });
            } else if state.on_stack[w] {
                state.low_link[v] = state.low_link[v].min(state.discovery[w]);
            }
            // Closed successors belong to a finished component: no update.
            continue;
        }

        frames.pop();

        if state.low_link[v] == state.discovery[v] {
            let mut comp = Vec::new();
            while let Some(w) = state.stack.pop() {
                state.on_stack[w] = false;
                comp.push(w);
                if w == v {
                    break;
                }
            }
            components.push(comp);
        }

        if let Some(parent) = frames.last() {
            let p = parent.node;
            state.low_link[p] = state.low_link[p].min(state.low_link[v]);
        }
    }

    Ok(())
}
