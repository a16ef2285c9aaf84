//! # Nihilgraph - Knowledge Graph Aggregation Service
//!
//! The main binary for the Nihilgraph snapshot service.
//!
//! This application provides:
//! - HTTP API server (axum-based) serving the full graph snapshot
//! - CLI interface for one-shot snapshots
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                 apps/nihilgraph (THE BINARY)                 │
//! │                                                              │
//! │  ┌─────────────┐   ┌─────────────┐   ┌───────────────────┐  │
//! │  │   CLI       │   │   HTTP API  │   │   Store Client    │  │
//! │  │  (clap)     │   │   (axum)    │   │   (reqwest)       │  │
//! │  └──────┬──────┘   └──────┬──────┘   └─────────┬─────────┘  │
//! │         │                 │                    │            │
//! │         └─────────────────┼────────────────────┘            │
//! │                           ▼                                 │
//! │                 ┌──────────────────┐                        │
//! │                 │ nihilgraph-core  │                        │
//! │                 │   (THE LOGIC)    │                        │
//! │                 └──────────────────┘                        │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```bash
//! # Start the HTTP server
//! nihilgraph server --host 0.0.0.0 --port 8080
//!
//! # One-shot snapshot to stdout
//! nihilgraph snapshot
//!
//! # Count summary
//! nihilgraph
//! ```

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use nihilgraph::cli;

// =============================================================================
// APPLICATION ENTRY POINT
// =============================================================================

#[tokio::main]
async fn main() {
    // Initialize tracing — NIHILGRAPH_LOG_FORMAT=json enables machine-parseable output.
    let log_format = std::env::var("NIHILGRAPH_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "nihilgraph=info,tower_http=debug".into());

    match log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
        _ => {
            tracing_subscriber::registry()
                .with(filter)
                .with(tracing_subscriber::fmt::layer())
                .init();
        }
    }

    // Parse CLI arguments
    let cli = cli::Cli::parse();

    // Display startup banner
    if !cli.quiet {
        print_banner();
    }

    // Execute command
    if let Err(e) = cli::execute(cli).await {
        tracing::error!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Print the Nihilgraph startup banner.
fn print_banner() {
    println!(
        r#"
  ███╗   ██╗██╗██╗  ██╗██╗██╗      ██████╗ ██████╗  █████╗ ██████╗ ██╗  ██╗
  ████╗  ██║██║██║  ██║██║██║     ██╔════╝ ██╔══██╗██╔══██╗██╔══██╗██║  ██║
  ██╔██╗ ██║██║███████║██║██║     ██║  ███╗██████╔╝███████║██████╔╝███████║
  ██║╚██╗██║██║██╔══██║██║██║     ██║   ██║██╔══██╗██╔══██║██╔═══╝ ██╔══██║
  ██║ ╚████║██║██║  ██║██║███████╗╚██████╔╝██║  ██║██║  ██║██║     ██║  ██║
  ╚═╝  ╚═══╝╚═╝╚═╝  ╚═╝╚═╝╚══════╝ ╚═════╝ ╚═╝  ╚═╝╚═╝  ╚═╝╚═╝     ╚═╝  ╚═╝

  Knowledge Graph Aggregation Service v{}

  Read-Only • Stateless • Per-Request Snapshot
"#,
        env!("CARGO_PKG_VERSION")
    );
}
