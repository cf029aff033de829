use serde::Serialize;

#[derive(Debug, Clone, Default, Serialize)]
pub struct RunStats {
    pub operation: String,
    pub nodes: usize,
    pub edges: usize,
    pub elapsed_micros: u64,
}
