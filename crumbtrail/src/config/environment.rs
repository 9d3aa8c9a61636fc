//! Environment variable handling for configuration overrides.
//!
//! `CRUMBTRAIL_*` variables override the breadcrumb settings read from the
//! site file. List values are comma-separated; blank entries are ignored.

use std::collections::BTreeSet;
use std::env;

use crate::config::schema::{SettingKey, Site};
use crate::error::{Error, Result};

/// Overrides `settings.allowed_types`.
pub const ALLOWED_TYPES_ENV: &str = "CRUMBTRAIL_ALLOWED_TYPES";
/// Overrides `settings.node_bundles`.
pub const NODE_BUNDLES_ENV: &str = "CRUMBTRAIL_NODE_BUNDLES";
/// Overrides `settings.excluded_roles`.
pub const EXCLUDED_ROLES_ENV: &str = "CRUMBTRAIL_EXCLUDED_ROLES";
/// Overrides `front_page`.
pub const FRONT_PAGE_ENV: &str = "CRUMBTRAIL_FRONT_PAGE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use crumbtrail::config::{EnvironmentConfig, Site};
///
/// let mut site = Site::default();
/// EnvironmentConfig::apply_overrides(&mut site).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to a site.
    ///
    /// # Errors
    ///
    /// Returns an error if `CRUMBTRAIL_FRONT_PAGE` is not an internal path.
    pub fn apply_overrides(site: &mut Site) -> Result<()> {
        let lists = [
            (ALLOWED_TYPES_ENV, SettingKey::AllowedTypes),
            (NODE_BUNDLES_ENV, SettingKey::NodeBundles),
            (EXCLUDED_ROLES_ENV, SettingKey::ExcludedRoles),
        ];
        for (var, key) in lists {
            if let Ok(value) = env::var(var) {
                log::debug!("{var} overrides {key}");
                site.settings.set(key, Self::parse_list(&value));
            }
        }

        if let Ok(front) = env::var(FRONT_PAGE_ENV) {
            let front = front.trim();
            if !front.starts_with('/') {
                return Err(Error::Validation {
                    field: FRONT_PAGE_ENV.into(),
                    message: "Must be an internal path starting with '/'".into(),
                });
            }
            site.front_page = front.to_string();
        }

        Ok(())
    }

    /// Split a comma-separated list into a set of trimmed, non-empty values.
    #[must_use]
    pub fn parse_list(value: &str) -> BTreeSet<String> {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(ToString::to_string)
            .collect()
    }
}
