//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `trail`: Render the trail of a node, user or path
//! - `show_settings`: Show the breadcrumb settings
//! - `set_settings`: Choose allowed and referenceable content types
//! - `set_path`: Set the breadcrumb path of a content type or role
//! - `show_path`: Show the breadcrumb path of a content type or role
//! - `list_types`: List content types and their settings
//! - `validate`: Validate a site file
//! - `init`: Create a starter site file
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod init;
pub mod list_types;
pub mod set_path;
pub mod set_settings;
pub mod show_path;
pub mod show_settings;
pub mod trail;
pub mod validate;

pub use completions::CompletionsCommand;
pub use init::InitCommand;
pub use list_types::ListTypesCommand;
pub use set_path::SetPathCommand;
pub use set_settings::SetSettingsCommand;
pub use show_path::ShowPathCommand;
pub use show_settings::ShowSettingsCommand;
pub use trail::TrailCommand;
pub use validate::ValidateCommand;

use clap::{ArgGroup, Args};

/// The content type or role whose path a command works on.
#[derive(Args)]
#[command(group(ArgGroup::new("owner").required(true).args(["content_type", "role"])))]
pub struct PathOwner {
    /// Content type id
    #[arg(long, value_name = "TYPE")]
    pub content_type: Option<String>,

    /// Role id
    #[arg(long, value_name = "ROLE")]
    pub role: Option<String>,
}
