//! Main entry point for the crumbtrail CLI.
//!
//! This is the command-line interface for configured breadcrumb trails.
//! It provides commands for rendering and editing trails:
//! - `trail`: Render the trail of a node, user or path
//! - `set-settings` / `show-settings`: Edit and show breadcrumb settings
//! - `set-path` / `show-path`: Edit and show a type's or role's path
//! - `validate` / `init`: Check or create a site file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    if let Err(e) = crumbtrail::init_logger(cli.verbose, cli.quiet).install() {
        eprintln!("Warning: logging unavailable: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        site: cli.site,
    };

    let result = match cli.command {
        cli::Command::Trail(cmd) => cmd.execute(&global),
        cli::Command::ShowSettings(cmd) => cmd.execute(&global),
        cli::Command::SetSettings(cmd) => cmd.execute(&global),
        cli::Command::SetPath(cmd) => cmd.execute(&global),
        cli::Command::ShowPath(cmd) => cmd.execute(&global),
        cli::Command::ListTypes(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Init(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
