//! Command to set the breadcrumb path of a content type or role.

use crate::commands::PathOwner;
use crate::error::CliError;
use crate::utils::{open_site_for_edit, save_site, GlobalOptions};
use clap::Args;
use crumbtrail::settings::parse_entity_reference;
use crumbtrail::{NodeId, SettingsEditor};

/// Set the ordered ancestor pages of a content type or role.
///
/// References are node ids or `Label (id)`. Passing none clears the path.
#[derive(Args)]
pub struct SetPathCommand {
    #[command(flatten)]
    pub owner: PathOwner,

    /// Ancestor pages, nearest to Home first
    #[arg(value_name = "REF")]
    pub references: Vec<String>,
}

impl SetPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let refs = self
            .references
            .iter()
            .map(|input| parse_entity_reference(input))
            .collect::<Result<Vec<NodeId>, _>>()?;

        let mut editor = SettingsEditor::new(open_site_for_edit(global)?);
        match (&self.owner.content_type, &self.owner.role) {
            (Some(content_type), _) => editor.set_content_type_path(content_type, &refs)?,
            (None, Some(role)) => editor.set_role_path(role, &refs)?,
            (None, None) => {
                return Err(CliError::InvalidArguments(
                    "one of --content-type or --role is required".to_string(),
                ))
            }
        }

        save_site(editor.store(), global, "Breadcrumb path saved")
    }
}
