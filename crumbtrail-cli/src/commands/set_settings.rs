//! Command to edit the breadcrumb settings.

use crate::error::CliError;
use crate::utils::{open_site_for_edit, save_site, GlobalOptions};
use clap::Args;
use crumbtrail::SettingsEditor;

/// Choose which content types use configured breadcrumbs and which may be
/// referenced as ancestors.
///
/// Both lists are replaced; a type left out is unchecked.
#[derive(Args)]
pub struct SetSettingsCommand {
    /// Content type whose pages use configured breadcrumbs (repeatable)
    #[arg(long = "allowed-type", value_name = "TYPE")]
    pub allowed_types: Vec<String>,

    /// Content type that may be referenced in breadcrumb paths (repeatable)
    #[arg(long = "bundle", value_name = "TYPE")]
    pub bundles: Vec<String>,

    /// Role skipped when choosing a user's breadcrumb role (repeatable)
    #[arg(long = "excluded-role", value_name = "ROLE")]
    pub excluded_roles: Option<Vec<String>>,
}

impl SetSettingsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut editor = SettingsEditor::new(open_site_for_edit(global)?);
        editor.submit(&self.allowed_types, &self.bundles)?;
        if let Some(roles) = &self.excluded_roles {
            editor.set_excluded_roles(roles)?;
        }

        save_site(editor.store(), global, "Breadcrumb settings saved")
    }
}
