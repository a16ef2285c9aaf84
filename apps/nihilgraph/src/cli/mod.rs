//! # Nihilgraph CLI Module
//!
//! This module implements the CLI interface for Nihilgraph.
//!
//! ## Available Commands
//!
//! - `server` - Start the HTTP server
//! - `snapshot` - Fetch and assemble one graph snapshot
//!
//! With no subcommand, a snapshot count summary is printed.

mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::error::ServiceError;
use crate::store::StoreClient;

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// Nihilgraph - Knowledge Graph Aggregation Service
///
/// Reads the RPE, axiom, and relationship tables from the external data
/// store and serves them as a single nodes/links snapshot.
#[derive(Parser, Debug)]
#[command(name = "nihilgraph")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress banner output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Base URL of the data store (overrides NIHILGRAPH_STORE_URL)
    #[arg(long, global = true)]
    pub store_url: Option<String>,

    /// Service credential (overrides NIHILGRAPH_SERVICE_KEY)
    #[arg(long, global = true)]
    pub service_key: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start HTTP server
    Server {
        /// Host to bind to
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind to
        #[arg(short, long, default_value = "8080")]
        port: u16,
    },

    /// Fetch one full graph snapshot and print it as JSON
    Snapshot {
        /// Write the snapshot to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
pub async fn execute(cli: Cli) -> Result<(), ServiceError> {
    let store = StoreClient::from_env_with_overrides(cli.store_url, cli.service_key)?;
    let json_mode = cli.json_mode;

    match cli.command {
        Some(Commands::Server { host, port }) => cmd_server(&host, port, store).await,
        Some(Commands::Snapshot { output }) => {
            cmd_snapshot(store, json_mode, output.as_deref()).await
        }
        None => {
            // No subcommand - show snapshot summary by default
            cmd_summary(store, json_mode).await
        }
    }
}
