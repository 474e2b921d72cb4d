//! Wayfind server binary: loads a graph definition and answers JSON query
//! batches read line-by-line from stdin.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wayfind_core::config::Config;
use wayfind_core::graph::Graph;
use wayfind_core::ingest;
use wayfind_server::{handle_request, Request};

/// Wayfind - a path query server for directed weighted graphs
#[derive(Parser, Debug)]
#[command(name = "wayfind-server")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the graph definition file (overrides config)
    #[arg(short, long, env = "WAYFIND_GRAPH")]
    graph: Option<PathBuf>,

    /// Pretty-print JSON answers (overrides config)
    #[arg(long, env = "WAYFIND_PRETTY")]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(graph_path) = args.graph {
        config.graph_path = graph_path;
    }
    if args.pretty {
        config.pretty_answers = true;
    }

    tracing::info!("Starting Wayfind server...");
    tracing::info!("Graph definition: {}", config.graph_path.display());

    let def = ingest::load(&config.graph_path)
        .with_context(|| format!("failed to load graph from {}", config.graph_path.display()))?;
    tracing::info!(
        id = %def.id,
        name = %def.name,
        nodes = def.nodes.len(),
        edges = def.edges.len(),
        "Graph definition validated"
    );

    let graph = Arc::new(def.into_graph());
    serve(graph, config.pretty_answers).await
}

/// Reads one JSON request per stdin line and writes one JSON answer per
/// request to stdout until EOF or an interrupt.
///
/// An in-flight batch always finishes before shutdown is observed; a
/// malformed line is logged and skipped without ending the loop.
async fn serve(graph: Arc<Graph>, pretty: bool) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            () = &mut shutdown => {
                tracing::info!("Interrupt received, shutting down");
                break;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    tracing::info!("Input closed, shutting down");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                answer_line(&graph, &line, pretty).await?;
            }
        }
    }

    Ok(())
}

/// Parses one request line, answers it off the async runtime, and prints the
/// response.
async fn answer_line(graph: &Arc<Graph>, line: &str, pretty: bool) -> anyhow::Result<()> {
    let request: Request = match serde_json::from_str(line) {
        Ok(request) => request,
        Err(err) => {
            tracing::warn!(error = %err, "Discarding malformed request line");
            return Ok(());
        }
    };

    // Enumeration is CPU-bound and the engine blocks on its worker threads,
    // so it runs on the blocking pool rather than a runtime worker.
    let graph = Arc::clone(graph);
    let response =
        tokio::task::spawn_blocking(move || handle_request(&graph, &request)).await?;

    let encoded = if pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{encoded}");

    Ok(())
}

/// Resolves when SIGINT (or SIGTERM on unix) arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install SIGINT handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}
