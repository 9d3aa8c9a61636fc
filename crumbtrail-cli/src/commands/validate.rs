//! Command to validate a site file.

use crate::error::CliError;
use crate::utils::{resolve_site_path, shorten_path, GlobalOptions};
use clap::Args;
use crumbtrail::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a site file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Site file to validate (defaults to the resolved site file)
    #[arg(value_name = "SITE_PATH")]
    pub site_path: Option<PathBuf>,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match self.site_path {
            Some(path) => path,
            None => resolve_site_path(global)?,
        };

        // 1. Check file exists
        if !path.exists() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                path.display()
            )));
        }

        // 2. Parse the file
        let site = match ConfigLoader::load_file(&path) {
            Ok(site) => site,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Site file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the site
        match ConfigValidator::validate(&site) {
            Ok(()) => {
                if !global.quiet {
                    println!("Site file is valid: {}", shorten_path(&path));
                }
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Site validation failed".to_string(),
                ))
            }
        }
    }
}
