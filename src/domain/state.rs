use crate::domain::graph::NodeId;

/// Per-node traversal state shared by DFS, Tarjan and the start-node finder.
///
/// Arrays are sized `node_count + 1` so ids index them directly; slot 0 is
/// never touched. Only one traversal may run against a state at a time.
#[derive(Debug, Clone)]
pub struct AlgorithmState {
    pub(crate) visited: Vec<bool>,
    pub(crate) discovery: Vec<usize>,
    pub(crate) low_link: Vec<usize>,
    pub(crate) on_stack: Vec<bool>,
    pub(crate) stack: Vec<NodeId>,
    pub(crate) time: usize,
}

impl AlgorithmState {
    pub fn new(node_count: usize) -> Self {
        Self {
            visited: vec![false; node_count + 1],
            discovery: vec![0; node_count + 1],
            low_link: vec![0; node_count + 1],
            on_stack: vec![false; node_count + 1],
            stack: Vec::new(),
            time: 0,
        }
    }

    pub fn reset(&mut self) {
        self.visited.fill(false);
        self.discovery.fill(0);
        self.low_link.fill(0);
        self.on_stack.fill(false);
        self.stack.clear();
        self.time = 0;
    }

    pub fn is_visited(&self, node: NodeId) -> bool {
        self.visited.get(node).copied().unwrap_or(false)
    }

    pub fn is_on_stack(&self, node: NodeId) -> bool {
        self.on_stack.get(node).copied().unwrap_or(false)
    }

    /// `None` until the node has been entered by the SCC engine.
    pub fn discovery_time(&self, node: NodeId) -> Option<usize> {
        self.is_visited(node).then(|| self.discovery[node])
    }

    pub fn low_link(&self, node: NodeId) -> Option<usize> {
        self.is_visited(node).then(|| self.low_link[node])
    }

    pub fn stack(&self) -> &[NodeId] {
        &self.stack
    }

    pub fn time(&self) -> usize {
        self.time
    }

    pub fn visited_count(&self) -> usize {
        self.visited.iter().filter(|&&v| v).count()
    }

    /// Moves `node` into the OnStack state with a fresh discovery time.
    pub(crate) fn enter(&mut self, node: NodeId) {
        self.visited[node] = true;
        self.discovery[node] = self.time;
        self.low_link[node] = self.time;
        self.time += 1;
        self.stack.push(node);
        self.on_stack[node] = true;
    }
}
