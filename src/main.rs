//! `tarjan-graph-sorter` command line.
//!
//! Argument parsing and output live in `interface::cli`; this file only
//! starts the runtime.

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    tarjan_graph_sorter::interface::cli::run().await
}
