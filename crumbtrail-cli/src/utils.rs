//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including site file resolution and loading.

use crate::error::CliError;
use crumbtrail::config::{ConfigBuilder, ConfigLoader};
use crumbtrail::store::SiteStore;
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // Fields used via pattern matching in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit site file.
    pub site: Option<PathBuf>,
}

/// Resolve the site file: `--site`, then discovery from the CWD, then the
/// per-user default.
pub fn resolve_site_path(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    let working_dir = env::current_dir()?;
    ConfigLoader::resolve_site_path(global.site.as_deref(), &working_dir)
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Load the site for reading.
///
/// Environment overrides are applied and the site is validated. A
/// discovered file that does not exist yields an empty site.
pub fn load_site(global: &GlobalOptions) -> Result<SiteStore, CliError> {
    let path = resolve_site_path(global)?;
    let builder = match &global.site {
        Some(explicit) => ConfigBuilder::new().with_site_file(explicit),
        None => ConfigBuilder::new().with_working_dir(&env::current_dir()?),
    };
    let site = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;
    Ok(SiteStore::new(site).with_path(&path))
}

/// Open the site file for editing.
///
/// The file is read as stored, without environment overrides, so that saving
/// it does not persist them. The file must exist.
pub fn open_site_for_edit(global: &GlobalOptions) -> Result<SiteStore, CliError> {
    let path = resolve_site_path(global)?;
    if !path.exists() {
        return Err(CliError::Config(format!(
            "Site file not found: {} (run `crumbtrail init` to create one)",
            shorten_path(&path)
        )));
    }
    SiteStore::open(&path).map_err(|e| CliError::Config(e.to_string()))
}

/// Save an edited site and report where it went.
pub fn save_site(store: &SiteStore, global: &GlobalOptions, message: &str) -> Result<(), CliError> {
    store.save()?;
    if !global.quiet {
        if let Some(path) = store.path() {
            eprintln!("{message} ({})", shorten_path(path));
        }
    }
    Ok(())
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Join a set of identifiers for display; `-` when empty.
pub fn join_or_dash<'a>(values: impl IntoIterator<Item = &'a String>) -> String {
    let joined: Vec<&str> = values.into_iter().map(String::as_str).collect();
    if joined.is_empty() {
        "-".to_string()
    } else {
        joined.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_join_or_dash() {
        let empty = BTreeSet::<String>::new();
        assert_eq!(join_or_dash(&empty), "-");
        let values = BTreeSet::from(["article".to_string(), "page".to_string()]);
        assert_eq!(join_or_dash(&values), "article, page");
    }

    #[test]
    fn test_shorten_path_outside_home() {
        assert_eq!(shorten_path(Path::new("/srv/site.yaml")), "/srv/site.yaml");
    }
}
