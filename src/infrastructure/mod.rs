// Infrastructure layer: detector implementation, graph files, export, eventing
pub mod dag_generator;
pub mod event_ndjson;
pub mod graph_file;
pub mod latex_export;
pub mod scc_tarjan;
pub mod schema_validator;
pub mod timing_log;
