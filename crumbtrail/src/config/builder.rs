//! Builder composing a site from its sources.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::schema::Site;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a validated [`Site`].
///
/// Sources, lowest to highest precedence: built-in defaults, the site file,
/// `CRUMBTRAIL_*` environment variables. A programmatic site given with
/// [`ConfigBuilder::with_site`] replaces the file.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::{ConfigBuilder, Site};
///
/// let site = ConfigBuilder::new()
///     .skip_env()
///     .with_site(Site::default())
///     .build()
///     .unwrap();
/// assert_eq!(site.front_page, "/");
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    site_file: Option<PathBuf>,
    site: Option<Site>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Creates a builder that discovers from the current directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start site file discovery from.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Use this site file instead of discovering one.
    #[must_use]
    pub fn with_site_file(mut self, path: &Path) -> Self {
        self.site_file = Some(path.to_path_buf());
        self
    }

    /// Use this site instead of reading any file.
    #[must_use]
    pub fn with_site(mut self, site: Site) -> Self {
        self.site = Some(site);
        self
    }

    /// Do not read site files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not apply environment overrides.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Resolve the site file this builder would read, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory or home directory cannot be
    /// determined.
    pub fn site_path(&self) -> Result<Option<PathBuf>> {
        if self.site.is_some() || self.skip_files {
            return Ok(None);
        }
        let working_dir = match &self.working_dir {
            Some(dir) => dir.clone(),
            None => std::env::current_dir()?,
        };
        ConfigLoader::resolve_site_path(self.site_file.as_deref(), &working_dir).map(Some)
    }

    /// Load, override and validate.
    ///
    /// A discovered or default site file that does not exist yields the
    /// default site; an explicitly named one must exist.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be read or parsed, an environment
    /// override is invalid, or validation fails.
    pub fn build(self) -> Result<Site> {
        let mut site = match (&self.site, self.site_path()?) {
            (Some(site), _) => site.clone(),
            (None, Some(path)) if path.exists() || self.site_file.is_some() => {
                ConfigLoader::load_file(&path)?
            }
            (None, _) => Site::default(),
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut site)?;
        }

        ConfigValidator::validate(&site)?;
        Ok(site)
    }
}
