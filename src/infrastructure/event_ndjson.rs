use crate::usecase::event::AppEvent;
use serde_json::json;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

fn app_event_to_json(ev: &AppEvent) -> serde_json::Value {
    match ev {
        AppEvent::PhaseStarted { name } => json!({"type":"phase_started","name":name}),
        AppEvent::PhaseFinished { name } => json!({"type":"phase_finished","name":name}),
        AppEvent::GraphLoaded {
            representation,
            nodes,
            edges,
        } => {
            json!({"type":"graph_loaded","representation":representation,"nodes":nodes,"edges":edges})
        }
        AppEvent::StartNodeSelected {
            node,
            elapsed_micros,
        } => {
            json!({"type":"start_node_selected","node":node,"elapsed_micros":elapsed_micros})
        }
        AppEvent::DfsCompleted {
            visited,
            elapsed_micros,
        } => {
            json!({"type":"dfs_completed","visited":visited,"elapsed_micros":elapsed_micros})
        }
        AppEvent::SccComputed {
            nodes,
            edges,
            components,
            cyclic_components,
            elapsed_micros,
        } => {
            json!({"type":"scc_computed","nodes":nodes,"edges":edges,"components":components,"cyclic_components":cyclic_components,"elapsed_micros":elapsed_micros})
        }
        AppEvent::Finished { stats } => json!({"type":"finished","stats":stats}),
    }
}

pub fn spawn_ndjson_printer(mut rx: mpsc::Receiver<AppEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(ev) = rx.recv().await {
            let line = app_event_to_json(&ev);

            // NDJSON to stdout.
            println!("{line}");
        }
    })
}
