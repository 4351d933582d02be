//! Command-line interface definitions using clap derive API.

use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::path::PathBuf;

/// In-memory Item CRUD service
#[derive(Parser)]
#[command(name = "item-api")]
#[command(about = "A minimal CRUD HTTP service for items")]
#[command(version)]
pub struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind to, overriding the configured host and port
        #[arg(long)]
        addr: Option<SocketAddr>,
    },
    /// Print the effective configuration as TOML
    Config,
}
