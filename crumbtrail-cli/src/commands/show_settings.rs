//! Command to show the breadcrumb settings.

use crate::error::CliError;
use crate::utils::{join_or_dash, load_site, GlobalOptions};
use clap::Args;
use crumbtrail::store::ConfigStore;
use crumbtrail::SettingKey;

/// Show the effective breadcrumb settings, including environment overrides.
#[derive(Args)]
pub struct ShowSettingsCommand {
    /// Print JSON instead of one line per setting
    #[arg(long)]
    pub json: bool,
}

impl ShowSettingsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let store = load_site(global)?;

        if self.json {
            let settings: serde_json::Map<String, serde_json::Value> = SettingKey::ALL
                .into_iter()
                .map(|key| (key.to_string(), serde_json::json!(store.get(key))))
                .collect();
            let output = serde_json::to_string_pretty(&settings)
                .map_err(|e| CliError::Library(e.into()))?;
            println!("{output}");
            return Ok(());
        }

        for key in SettingKey::ALL {
            println!("{key}: {}", join_or_dash(&store.get(key)));
        }
        Ok(())
    }
}
