use crate::domain::graph::NodeId;
use crate::usecase::stats::RunStats;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AppEvent {
    PhaseStarted {
        name: String,
    },
    PhaseFinished {
        name: String,
    },

    GraphLoaded {
        representation: String,
        nodes: usize,
        edges: usize,
    },

    StartNodeSelected {
        node: Option<NodeId>,
        elapsed_micros: u64,
    },

    DfsCompleted {
        visited: usize,
        elapsed_micros: u64,
    },

    SccComputed {
        nodes: usize,
        edges: usize,
        components: usize,
        cyclic_components: usize,
        elapsed_micros: u64,
    },

    Finished {
        stats: RunStats,
    },
}
