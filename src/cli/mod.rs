//! CLI interface for the user API

pub mod commands;
mod output;

pub use output::*;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "user-api")]
#[command(author = "Krakaw")]
#[command(version = "1.0.0")]
#[command(about = "In-memory user registration, login and lookup service", long_about = None)]
pub struct Cli {
    /// Path to a user-api.toml (defaults to searching upward from the current directory)
    #[arg(short, long, global = true, env = "USER_API_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize a new user-api.toml configuration file
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Host to bind to (overrides the config file)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Show the effective configuration
    Config,
}
