//! Graph documents on disk.
//!
//! Two layouts are accepted. Files ending in `.json` hold a `GraphFileDto`;
//! anything else is the line format:
//!
//! ```text
//! list        <- representation kind
//! 4           <- node count
//! 2           <- successors of node 1
//! 3           <- successors of node 2
//! 1           <- successors of node 3
//!             <- node 4 has none
//! ```
//!
//! Benchmark data files append the commands they were recorded with
//! (`dfs`, `tarjan`, `export`, `help`, `exit`) after the successor lines;
//! those are skipped.

use crate::domain::graph::{GraphStore, NodeId};
use crate::infrastructure::schema_validator::validate_graph_document;
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tracing::debug;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GraphFileDto {
    pub representation: String,

    pub nodes: usize,

    /// Entry `i` lists the successors of node `i + 1`.
    #[serde(default)]
    pub successors: Vec<Vec<NodeId>>,
}

impl GraphFileDto {
    pub fn from_store(graph: &GraphStore) -> Result<Self> {
        let mut successors = Vec::with_capacity(graph.node_count());
        for node in graph.nodes() {
            successors.push(graph.neighbors(node)?.collect());
        }
        Ok(Self {
            representation: graph.representation().to_string(),
            nodes: graph.node_count(),
            successors,
        })
    }

    pub fn into_store(self) -> Result<GraphStore> {
        if self.successors.len() > self.nodes {
            return Err(anyhow!(
                "graph declares {} nodes but lists successors for {}",
                self.nodes,
                self.successors.len()
            ));
        }

        let mut graph = GraphStore::from_kind(self.nodes, &self.representation)?;
        for (i, succ) in self.successors.iter().enumerate() {
            graph
                .add_edges(i + 1, succ)
                .with_context(|| format!("loading successors of node {}", i + 1))?;
        }
        Ok(graph)
    }
}

pub fn parse_graph_text(raw: &str) -> Result<GraphFileDto> {
    let mut lines = raw.lines().enumerate();

    let (_, kind) = lines
        .next()
        .ok_or_else(|| anyhow!("empty graph file: missing representation line"))?;
    let representation = kind.trim().to_lowercase();

    let (_, count) = lines
        .next()
        .ok_or_else(|| anyhow!("missing node count line"))?;
    let nodes: usize = count
        .trim()
        .parse()
        .with_context(|| format!("line 2: invalid node count {:?}", count.trim()))?;

    // The count is untrusted until the store is built; grow as lines arrive.
    let mut successors = Vec::new();
    for (idx, line) in lines {
        let line_no = idx + 1;
        if successors.len() == nodes {
            if line.trim().is_empty() || is_recorded_command(line) {
                continue;
            }
            return Err(anyhow!("line {line_no}: unexpected trailing content {:?}", line.trim()));
        }

        let succ = line
            .split_whitespace()
            .map(|tok| {
                tok.parse::<NodeId>()
                    .with_context(|| format!("line {line_no}: invalid node id {tok:?}"))
            })
            .collect::<Result<Vec<_>>>()?;
        successors.push(succ);
    }

    Ok(GraphFileDto {
        representation,
        nodes,
        successors,
    })
}

fn is_recorded_command(line: &str) -> bool {
    matches!(
        line.trim().to_lowercase().as_str(),
        "dfs" | "tarjan" | "export" | "help" | "exit"
    )
}

pub fn render_graph_text(dto: &GraphFileDto) -> String {
    let mut out = format!("{}\n{}\n", dto.representation, dto.nodes);
    for i in 0..dto.nodes {
        if let Some(succ) = dto.successors.get(i) {
            let line: Vec<String> = succ.iter().map(|v| v.to_string()).collect();
            out.push_str(&line.join(" "));
        }
        out.push('\n');
    }
    out
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case("json"))
}

pub async fn read_graph_file(path: &str) -> Result<GraphStore> {
    let raw = fs::read_to_string(path).await?;

    let dto = if is_json(path) {
        let value: serde_json::Value = serde_json::from_str(&raw)?;
        validate_graph_document(&value)?;
        serde_json::from_value::<GraphFileDto>(value)?
    } else {
        parse_graph_text(&raw)?
    };

    let graph = dto.into_store()?;
    debug!(
        path,
        representation = %graph.representation(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph loaded"
    );
    Ok(graph)
}

pub async fn write_graph_file(path: &str, graph: &GraphStore) -> Result<()> {
    let dto = GraphFileDto::from_store(graph)?;
    let body = if is_json(path) {
        serde_json::to_string_pretty(&dto)?
    } else {
        render_graph_text(&dto)
    };
    fs::write(path, body).await?;
    Ok(())
}
