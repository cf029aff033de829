//! Timed entry points.
//!
//! Each function here is the single outer boundary of one algorithm run: it
//! starts the clock, calls the untimed core exactly once and records the
//! elapsed time. The cores never measure themselves.

use crate::domain::graph::{GraphStore, NodeId, SccResult};
use crate::domain::traits::SccDetector;
use crate::usecase::event::AppEvent;
use crate::usecase::stats::RunStats;
use anyhow::Result;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct Timed<T> {
    pub output: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn elapsed_micros(&self) -> u64 {
        u64::try_from(self.elapsed.as_micros()).unwrap_or(u64::MAX)
    }
}

pub async fn run_dfs_all(
    graph: &mut GraphStore,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Timed<Vec<NodeId>>> {
    emit(&sink, AppEvent::PhaseStarted { name: "dfs".into() }).await;

    let started = Instant::now();
    let order = graph.dfs_all()?;
    let timed = Timed {
        output: order,
        elapsed: started.elapsed(),
    };
    debug!(visited = timed.output.len(), elapsed = ?timed.elapsed, "dfs finished");

    emit(
        &sink,
        AppEvent::DfsCompleted {
            visited: timed.output.len(),
            elapsed_micros: timed.elapsed_micros(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "dfs".into() }).await;
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats_for("dfs", graph, timed.elapsed_micros()),
        },
    )
    .await;

    Ok(timed)
}

pub async fn run_scc(
    graph: &mut GraphStore,
    detector: &dyn SccDetector,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Timed<SccResult>> {
    emit(&sink, AppEvent::PhaseStarted { name: "scc".into() }).await;

    let started = Instant::now();
    let scc = detector.compute_scc(graph)?;
    let timed = Timed {
        output: scc,
        elapsed: started.elapsed(),
    };
    debug!(
        components = timed.output.components.len(),
        elapsed = ?timed.elapsed,
        "scc finished"
    );

    emit(
        &sink,
        AppEvent::SccComputed {
            nodes: graph.node_count(),
            edges: graph.edge_count(),
            components: timed.output.components.len(),
            cyclic_components: timed.output.cyclic_count(),
            elapsed_micros: timed.elapsed_micros(),
        },
    )
    .await;
    emit(&sink, AppEvent::PhaseFinished { name: "scc".into() }).await;
    emit(
        &sink,
        AppEvent::Finished {
            stats: stats_for("scc", graph, timed.elapsed_micros()),
        },
    )
    .await;

    Ok(timed)
}

/// Resets state and looks for a zero-indegree node to seed a topological pass.
pub async fn find_seed(
    graph: &mut GraphStore,
    sink: Option<mpsc::Sender<AppEvent>>,
) -> Result<Timed<Option<NodeId>>> {
    let started = Instant::now();
    graph.reset_visited();
    let node = graph.find_start_node()?;
    let timed = Timed {
        output: node,
        elapsed: started.elapsed(),
    };

    emit(
        &sink,
        AppEvent::StartNodeSelected {
            node: timed.output,
            elapsed_micros: timed.elapsed_micros(),
        },
    )
    .await;

    Ok(timed)
}

fn stats_for(operation: &str, graph: &GraphStore, elapsed_micros: u64) -> RunStats {
    RunStats {
        operation: operation.to_string(),
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        elapsed_micros,
    }
}

async fn emit(sink: &Option<mpsc::Sender<AppEvent>>, ev: AppEvent) {
    if let Some(tx) = sink {
        let _ = tx.send(ev).await;
    }
}
