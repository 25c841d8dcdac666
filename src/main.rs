//! contest-vote entry point
//!
//! Parses arguments, dispatches to the CLI module and exits non-zero on
//! failure. All work happens in `cli`.

use contest_vote::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
