use crate::domain::graph::{GraphStore, NodeId, Representation};
use crate::infrastructure::dag_generator::generate_dag;
use crate::infrastructure::event_ndjson::spawn_ndjson_printer;
use crate::infrastructure::graph_file::{read_graph_file, write_graph_file};
use crate::infrastructure::latex_export::render_tikz;
use crate::infrastructure::scc_tarjan::TarjanSccDetector;
use crate::infrastructure::timing_log::append_timing;
use crate::usecase::analyze::{find_seed, run_dfs_all, run_scc};
use crate::usecase::event::AppEvent;
use anyhow::{anyhow, Context, Result};
use std::env;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub async fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    run_with_args(&args).await
}

pub async fn run_with_args(args: &[String]) -> Result<()> {
    init_tracing();
    let cmd = Cli::parse(args)?;

    match cmd {
        Cli::GraphDfs {
            input,
            emit_events,
            timings,
        } => {
            let (tx, printer) = event_channel(emit_events);
            let mut graph = load_graph(&input, &tx).await?;

            let timed = run_dfs_all(&mut graph, Some(tx.clone())).await?;
            if let Some(path) = timings.as_deref() {
                append_timing(path, timed.elapsed)
                    .await
                    .with_context(|| format!("appending timing to: {path}"))?;
            }
            finish_events(tx, printer).await;

            if !emit_events {
                println!("Depth-First Search:");
                println!("{}", format_nodes(&timed.output));
            }

            eprintln!(
                "summary: nodes={} edges={} visited={} elapsed_us={}",
                graph.node_count(),
                graph.edge_count(),
                timed.output.len(),
                timed.elapsed_micros()
            );
            Ok(())
        }

        Cli::GraphTarjan {
            input,
            emit_events,
            timings,
        } => {
            let (tx, printer) = event_channel(emit_events);
            let mut graph = load_graph(&input, &tx).await?;

            let seed = find_seed(&mut graph, Some(tx.clone())).await?;
            let timed = run_scc(&mut graph, &TarjanSccDetector, Some(tx.clone())).await?;
            if let Some(path) = timings.as_deref() {
                append_timing(path, timed.elapsed)
                    .await
                    .with_context(|| format!("appending timing to: {path}"))?;
            }
            finish_events(tx, printer).await;

            let scc = &timed.output;
            if !emit_events {
                match seed.output {
                    Some(node) => println!("start node: {node}"),
                    None => println!("start node: none (every node has an incoming edge)"),
                }
                println!("Strongly connected components:");
                println!("{}", format_components(&scc.topological_order()));
                if scc.is_acyclic() {
                    println!("The graph is acyclic.");
                } else {
                    println!(
                        "The graph contains a cycle ({} cyclic components).",
                        scc.cyclic_count()
                    );
                }
            }

            eprintln!(
                "summary: nodes={} edges={} components={} cyclic_components={} elapsed_us={}",
                graph.node_count(),
                graph.edge_count(),
                scc.components.len(),
                scc.cyclic_count(),
                timed.elapsed_micros()
            );
            Ok(())
        }

        Cli::GraphExport { input, output } => {
            let graph = read_graph_file(&input)
                .await
                .with_context(|| format!("reading input graph: {input}"))?;

            tokio::fs::write(&output, render_tikz(&graph))
                .await
                .with_context(|| format!("writing LaTeX export: {output}"))?;

            info!(input = %input, output = %output, "graph exported");
            eprintln!("Graph exported to {output}.");
            Ok(())
        }

        Cli::GraphGenerate {
            nodes,
            saturation,
            representation,
            output,
        } => {
            let graph = generate_dag(nodes, saturation, representation)?;
            write_graph_file(&output, &graph)
                .await
                .with_context(|| format!("writing generated graph: {output}"))?;

            eprintln!(
                "summary: generated nodes={} edges={} representation={}",
                graph.node_count(),
                graph.edge_count(),
                graph.representation()
            );
            Ok(())
        }
    }
}

#[derive(Debug)]
enum Cli {
    GraphDfs {
        input: String,
        emit_events: bool,
        timings: Option<String>,
    },
    GraphTarjan {
        input: String,
        emit_events: bool,
        timings: Option<String>,
    },
    GraphExport {
        input: String,
        output: String,
    },
    GraphGenerate {
        nodes: usize,
        saturation: f64,
        representation: Representation,
        output: String,
    },
}

impl Cli {
    fn parse(args: &[String]) -> Result<Self> {
        // Expected:
        // <bin> graph dfs|tarjan --in/--input <file> [--emit-events] [--timings <file>]
        // <bin> graph export --in/--input <file> --out/--output <file.tex>
        // <bin> graph generate --nodes <n> --saturation <percent> --out/--output <file> [--representation <kind>]
        if args.len() < 3 {
            return Err(anyhow!(usage()));
        }

        if args[1] != "graph" {
            return Err(anyhow!(usage()));
        }

        match args[2].as_str() {
            "dfs" | "tarjan" => Self::parse_analyze(args),
            "export" => Self::parse_export(args),
            "generate" => Self::parse_generate(args),
            "-h" | "--help" => Err(anyhow!(usage())),
            _ => Err(anyhow!(usage())),
        }
    }

    fn parse_analyze(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut emit_events = false;
        let mut timings: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--emit-events" => {
                    emit_events = true;
                }
                "--timings" => {
                    i += 1;
                    timings = Some(
                        args.get(i)
                            .cloned()
                            .ok_or_else(|| anyhow!(format!("missing value for --timings\n\n{}", usage())))?,
                    );
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;

        if args[2] == "dfs" {
            Ok(Cli::GraphDfs {
                input,
                emit_events,
                timings,
            })
        } else {
            Ok(Cli::GraphTarjan {
                input,
                emit_events,
                timings,
            })
        }
    }

    fn parse_export(args: &[String]) -> Result<Self> {
        let mut input: Option<String> = None;
        let mut output: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--in" | "--input" => {
                    i += 1;
                    input = args.get(i).cloned();
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let input = input.ok_or_else(|| anyhow!(format!("missing --in/--input\n\n{}", usage())))?;
        let output =
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?;

        Ok(Cli::GraphExport { input, output })
    }

    fn parse_generate(args: &[String]) -> Result<Self> {
        let mut nodes: Option<usize> = None;
        let mut saturation: Option<f64> = None;
        let mut representation = Representation::List;
        let mut output: Option<String> = None;

        let mut i = 3;
        while i < args.len() {
            match args[i].as_str() {
                "--nodes" => {
                    i += 1;
                    let raw = args.get(i).map(String::as_str).unwrap_or_default();
                    nodes = Some(
                        raw.parse()
                            .with_context(|| format!("invalid --nodes value: {raw:?}"))?,
                    );
                }
                "--saturation" => {
                    i += 1;
                    let raw = args.get(i).map(String::as_str).unwrap_or_default();
                    saturation = Some(
                        raw.parse()
                            .with_context(|| format!("invalid --saturation value: {raw:?}"))?,
                    );
                }
                "--representation" => {
                    i += 1;
                    let raw = args.get(i).map(String::as_str).unwrap_or_default();
                    representation = raw.parse()?;
                }
                "--out" | "--output" => {
                    i += 1;
                    output = args.get(i).cloned();
                }
                "-h" | "--help" => return Err(anyhow!(usage())),
                other => return Err(anyhow!(format!("unknown arg: {other}\n\n{}", usage()))),
            }
            i += 1;
        }

        let nodes = nodes.ok_or_else(|| anyhow!(format!("missing --nodes\n\n{}", usage())))?;
        let saturation =
            saturation.ok_or_else(|| anyhow!(format!("missing --saturation\n\n{}", usage())))?;
        let output =
            output.ok_or_else(|| anyhow!(format!("missing --out/--output\n\n{}", usage())))?;

        Ok(Cli::GraphGenerate {
            nodes,
            saturation,
            representation,
            output,
        })
    }
}

fn usage() -> &'static str {
    "Usage:\n  graph dfs --in/--input <graph> [--emit-events] [--timings <file>]\n  graph tarjan --in/--input <graph> [--emit-events] [--timings <file>]\n  graph export --in/--input <graph> --out/--output <graph.tex>\n  graph generate --nodes <n> --saturation <percent> --out/--output <graph> [--representation matrix|list|table]\n\nGraph files:\n  *.json files hold {\"representation\", \"nodes\", \"successors\"}; any other file is the line format\n  (representation, node count, then one line of successor ids per node).\n\nEvents:\n  If --emit-events is set, NDJSON events are written to stdout; summary goes to stderr.\n\nTimings:\n  --timings appends the elapsed seconds of the run to the given file, one line per run."
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn event_channel(emit_events: bool) -> (mpsc::Sender<AppEvent>, Option<JoinHandle<()>>) {
    let (tx, rx) = mpsc::channel::<AppEvent>(1024);
    let printer = if emit_events {
        Some(spawn_ndjson_printer(rx))
    } else {
        drop(rx);
        None
    };
    (tx, printer)
}

async fn finish_events(tx: mpsc::Sender<AppEvent>, printer: Option<JoinHandle<()>>) {
    drop(tx);
    if let Some(handle) = printer {
        handle.await.ok();
    }
}

async fn load_graph(input: &str, tx: &mpsc::Sender<AppEvent>) -> Result<GraphStore> {
    let graph = read_graph_file(input)
        .await
        .with_context(|| format!("reading input graph: {input}"))?;

    let _ = tx
        .send(AppEvent::GraphLoaded {
            representation: graph.representation().to_string(),
            nodes: graph.node_count(),
            edges: graph.edge_count(),
        })
        .await;
    Ok(graph)
}

fn format_nodes(nodes: &[NodeId]) -> String {
    let items: Vec<String> = nodes.iter().map(|n| n.to_string()).collect();
    format!("[{}]", items.join(", "))
}

fn format_components(components: &[&[NodeId]]) -> String {
    let items: Vec<String> = components
        .iter()
        .map(|comp| {
            comp.iter()
                .map(|n| n.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    format!("[{}]", items.join(", "))
}
