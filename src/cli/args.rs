//! CLI argument definitions using clap
//!
//! Commands:
//! - contest-vote init --config <path>
//! - contest-vote serve --config <path> [--port <port>]
//! - contest-vote grant-admin --config <path> --login <login>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// contest-vote - Voting and results service for a song contest
#[derive(Parser, Debug)]
#[command(name = "contest-vote")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the data directory and any missing documents
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./contest-vote.json")]
        config: PathBuf,
    },

    /// Start the HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./contest-vote.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Give an existing user admin rights
    GrantAdmin {
        /// Path to configuration file
        #[arg(long, default_value = "./contest-vote.json")]
        config: PathBuf,

        /// Login of the user to promote
        #[arg(long)]
        login: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
