//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, InitCommand, ListTypesCommand, SetPathCommand, SetSettingsCommand,
    ShowPathCommand, ShowSettingsCommand, TrailCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for configured breadcrumb trails.
#[derive(Parser)]
#[command(name = "crumbtrail")]
#[command(version, about = "Configure and render breadcrumb trails", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this site file instead of discovering one
    #[arg(long, value_name = "PATH", global = true, env = "CRUMBTRAIL_SITE")]
    pub site: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Render the breadcrumb trail of a node, user or path
    Trail(TrailCommand),

    /// Show the breadcrumb settings
    ShowSettings(ShowSettingsCommand),

    /// Choose which content types use configured breadcrumbs
    SetSettings(SetSettingsCommand),

    /// Set the breadcrumb path of a content type or role
    SetPath(SetPathCommand),

    /// Show the breadcrumb path of a content type or role
    ShowPath(ShowPathCommand),

    /// List content types and their breadcrumb settings
    ListTypes(ListTypesCommand),

    /// Validate a site file
    Validate(ValidateCommand),

    /// Create a starter site file
    Init(InitCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
