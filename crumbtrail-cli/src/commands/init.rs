//! Init command implementation.
//!
//! This module implements the `init` command, which writes a starter site
//! file with one content type that uses configured breadcrumbs.

use crate::error::CliError;
use crate::utils::{shorten_path, GlobalOptions};
use clap::Parser;
use crumbtrail::config::{ConfigLoader, SITE_FILE_NAME};
use crumbtrail::{ContentType, Node, NodeId, Site};
use std::env;

/// Create a starter site file.
#[derive(Parser)]
#[command(about = "Create a starter site file")]
pub struct InitCommand {
    /// Overwrite an existing site file
    #[arg(long)]
    force: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// Writes to `--site` when given, otherwise to `crumbtrail.yaml` in the
    /// current directory.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = match &global.site {
            Some(path) => path.clone(),
            None => env::current_dir()?.join(SITE_FILE_NAME),
        };

        if path.exists() && !self.force {
            return Err(CliError::SemanticFailure(format!(
                "Site file already exists (use --force to replace): {}",
                shorten_path(&path)
            )));
        }

        ConfigLoader::save_file(&path, &starter_site())?;

        if !global.quiet {
            println!("Created site file: {}", shorten_path(&path));
        }
        Ok(())
    }
}

/// A `page` type using configured breadcrumbs below an "About" page.
fn starter_site() -> Site {
    let mut site = Site::default();
    site.settings.allowed_types.insert("page".into());
    site.settings.node_bundles.insert("page".into());
    site.content_types.push(
        ContentType::new("page", "Basic page").with_breadcrumb_path(vec![NodeId(1)]),
    );
    site.nodes
        .push(Node::new(1, "page", "About").with_alias("/about"));
    site
}
