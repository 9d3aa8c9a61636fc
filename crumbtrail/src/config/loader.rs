//! Site file discovery, loading and saving.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Site;
use crate::error::{Error, Result};

/// File name searched for when walking up from the working directory.
pub const SITE_FILE_NAME: &str = "crumbtrail.yaml";

/// Directory under the home directory holding the user's default site file.
pub const USER_DIR_NAME: &str = ".crumbtrail";

/// Loads site files from disk.
///
/// # Examples
///
/// ```no_run
/// use crumbtrail::config::ConfigLoader;
/// use std::path::Path;
///
/// let path = ConfigLoader::resolve_site_path(None, Path::new(".")).unwrap();
/// let site = ConfigLoader::load_file(&path).unwrap();
/// println!("{} content types", site.content_types.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Resolve which site file to use.
    ///
    /// An explicit path wins. Otherwise the first `crumbtrail.yaml` found
    /// walking up from `working_dir` is used, falling back to
    /// `~/.crumbtrail/site.yaml`. The returned path may not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if no explicit path is given, nothing is discovered
    /// and the home directory cannot be determined.
    pub fn resolve_site_path(explicit: Option<&Path>, working_dir: &Path) -> Result<PathBuf> {
        if let Some(path) = explicit {
            return Ok(path.to_path_buf());
        }
        if let Some(found) = Self::discover(working_dir) {
            return Ok(found);
        }
        Self::user_site_path()
    }

    /// Walk up from `start_dir` looking for `crumbtrail.yaml`.
    #[must_use]
    pub fn discover(start_dir: &Path) -> Option<PathBuf> {
        let mut current = start_dir.to_path_buf();
        loop {
            let candidate = current.join(SITE_FILE_NAME);
            if candidate.is_file() {
                log::debug!("discovered site file at {}", candidate.display());
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Default site file in the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_site_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            resource: "home directory".into(),
        })?;
        Ok(home.join(USER_DIR_NAME).join("site.yaml"))
    }

    /// Load and parse a YAML site file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Site> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read site file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// Serialize a site and write it, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn save_file(path: &Path, site: &Site) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let yaml = serde_yaml::to_string(site)?;
        fs::write(path, yaml)?;
        log::debug!("wrote site file {}", path.display());
        Ok(())
    }
}
