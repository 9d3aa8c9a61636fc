//! Command to show the breadcrumb path of a content type or role.

use crate::commands::PathOwner;
use crate::error::CliError;
use crate::utils::{load_site, GlobalOptions};
use clap::Args;
use crumbtrail::SettingsEditor;

/// Show the ancestor pages of a content type or role, one per line.
#[derive(Args)]
pub struct ShowPathCommand {
    #[command(flatten)]
    pub owner: PathOwner,
}

impl ShowPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let editor = SettingsEditor::new(load_site(global)?);
        let path = match (&self.owner.content_type, &self.owner.role) {
            (Some(content_type), _) => editor.content_type_path(content_type)?,
            (None, Some(role)) => editor.role_path(role)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "one of --content-type or --role is required".to_string(),
                ))
            }
        };

        if path.is_empty() && !global.quiet {
            eprintln!("(empty path)");
        }
        for reference in editor.describe_path(&path) {
            println!("{reference}");
        }
        Ok(())
    }
}
