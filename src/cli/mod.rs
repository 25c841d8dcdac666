//! CLI module for contest-vote
//!
//! Provides command-line interface for:
//! - init: Create the data directory and empty documents
//! - serve: Run the HTTP API
//! - grant-admin: Promote an existing user

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{grant_admin, init, open_store, run, run_command, serve};
pub use errors::{CliError, CliResult};
