//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use std::path::Path;

use crate::api;
use crate::api::GraphResponse;
use crate::error::ServiceError;
use crate::store::StoreClient;

// =============================================================================
// SERVER COMMAND
// =============================================================================

/// Start the HTTP server.
pub async fn cmd_server(host: &str, port: u16, store: StoreClient) -> Result<(), ServiceError> {
    println!("Nihilgraph Aggregation Server Starting...");
    println!();
    println!("Configuration:");
    println!("  Host:  {}", host);
    println!("  Port:  {}", port);
    println!("  Store: {}", store.base_url());
    println!();
    println!("Endpoints:");
    println!("  ANY  /graph/full - Full graph snapshot");
    println!("  GET  /health     - Health check");
    println!();
    println!("Press Ctrl+C to stop");
    println!();

    let addr = format!("{}:{}", host, port);
    api::run_server(&addr, store).await
}

// =============================================================================
// SNAPSHOT COMMAND
// =============================================================================

/// Fetch one full snapshot and print it (or write it to a file).
///
/// The output is exactly the HTTP success envelope, so a piped snapshot
/// and a served snapshot are interchangeable.
pub async fn cmd_snapshot(
    store: StoreClient,
    json_mode: bool,
    output: Option<&Path>,
) -> Result<(), ServiceError> {
    let snapshot = api::fetch_snapshot(&store).await?;
    let response = GraphResponse::new(snapshot);
    let rendered = render_snapshot(&response, json_mode)?;

    match output {
        Some(path) => {
            std::fs::write(path, rendered)
                .map_err(|e| ServiceError::Io(format!("Cannot write {}: {}", path.display(), e)))?;
            println!(
                "Snapshot written to {} ({} nodes, {} links)",
                path.display(),
                response.count.nodes,
                response.count.links
            );
        }
        None => println!("{}", rendered),
    }

    Ok(())
}

/// Render the snapshot envelope: compact single-line JSON by default,
/// pretty-printed when `--json` is given.
fn render_snapshot(response: &GraphResponse, json_mode: bool) -> Result<String, ServiceError> {
    if json_mode {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
    .map_err(|e| ServiceError::Io(format!("Cannot render snapshot: {}", e)))
}

// =============================================================================
// SUMMARY COMMAND (default)
// =============================================================================

/// Show a snapshot count summary.
pub async fn cmd_summary(store: StoreClient, json_mode: bool) -> Result<(), ServiceError> {
    let snapshot = api::fetch_snapshot(&store).await?;

    if json_mode {
        let output = serde_json::json!({
            "store": store.base_url(),
            "node_count": snapshot.node_count(),
            "link_count": snapshot.link_count(),
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&output).unwrap_or_default()
        );
        return Ok(());
    }

    println!("Nihilgraph Snapshot Summary");
    println!("===========================");
    println!("Store: {}", store.base_url());
    println!();
    println!("Nodes: {}", snapshot.node_count());
    println!("Links: {}", snapshot.link_count());

    Ok(())
}
