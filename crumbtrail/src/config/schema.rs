//! Configuration schema definitions.
//!
//! A site file holds the breadcrumb settings together with the content
//! types, roles, nodes, accounts and static pages they refer to.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::entity::{Account, ContentType, Node, Page, Role};
use crate::error::{Error, Result};

/// Roles whose breadcrumb paths are ignored unless configured otherwise.
pub const DEFAULT_EXCLUDED_ROLES: [&str; 3] = ["administrator", "content_author", "content_publisher"];

/// Default front page path.
pub const DEFAULT_FRONT_PAGE: &str = "/";

fn default_front_page() -> String {
    DEFAULT_FRONT_PAGE.to_string()
}

/// Keys of the breadcrumb settings object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    /// Content types whose pages use configured breadcrumbs.
    AllowedTypes,
    /// Content types that may be referenced as ancestors.
    NodeBundles,
    /// Roles skipped when choosing an account's breadcrumb role.
    ExcludedRoles,
}

impl SettingKey {
    /// All keys in display order.
    pub const ALL: [Self; 3] = [Self::AllowedTypes, Self::NodeBundles, Self::ExcludedRoles];

    /// The key as written in site files.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllowedTypes => "allowed_types",
            Self::NodeBundles => "node_bundles",
            Self::ExcludedRoles => "excluded_roles",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| Error::validation("setting", format!("unknown setting key '{s}'")))
    }
}

/// The breadcrumb settings object.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::{BreadcrumbSettings, SettingKey};
///
/// let settings: BreadcrumbSettings =
///     serde_yaml::from_str("allowed_types: [page]\n").unwrap();
/// assert!(settings.get(SettingKey::AllowedTypes).contains("page"));
/// assert!(settings.get(SettingKey::NodeBundles).is_empty());
/// assert!(settings.get(SettingKey::ExcludedRoles).contains("administrator"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BreadcrumbSettings {
    /// Content types whose pages use configured breadcrumbs.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub allowed_types: BTreeSet<String>,

    /// Content types that may be referenced as ancestors. Empty allows any.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub node_bundles: BTreeSet<String>,

    /// Roles skipped when choosing an account's breadcrumb role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub excluded_roles: Option<BTreeSet<String>>,
}

impl BreadcrumbSettings {
    /// Reads one setting; absent values read as their defaults.
    #[must_use]
    pub fn get(&self, key: SettingKey) -> BTreeSet<String> {
        match key {
            SettingKey::AllowedTypes => self.allowed_types.clone(),
            SettingKey::NodeBundles => self.node_bundles.clone(),
            SettingKey::ExcludedRoles => self.excluded_roles.clone().unwrap_or_else(|| {
                DEFAULT_EXCLUDED_ROLES
                    .iter()
                    .map(ToString::to_string)
                    .collect()
            }),
        }
    }

    /// Replaces one setting.
    pub fn set(&mut self, key: SettingKey, values: BTreeSet<String>) {
        match key {
            SettingKey::AllowedTypes => self.allowed_types = values,
            SettingKey::NodeBundles => self.node_bundles = values,
            SettingKey::ExcludedRoles => self.excluded_roles = Some(values),
        }
    }
}

/// Complete site file structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Site {
    /// Path of the front page.
    #[serde(default = "default_front_page")]
    pub front_page: String,

    /// Breadcrumb settings.
    #[serde(default)]
    pub settings: BreadcrumbSettings,

    /// Content type definitions.
    #[serde(default)]
    pub content_types: Vec<ContentType>,

    /// Role definitions.
    #[serde(default)]
    pub roles: Vec<Role>,

    /// Content nodes.
    #[serde(default)]
    pub nodes: Vec<Node>,

    /// User accounts.
    #[serde(default)]
    pub users: Vec<Account>,

    /// Static routable pages.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub pages: Vec<Page>,

    /// Interface string translations: `langcode -> source -> translation`.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub translations: BTreeMap<String, BTreeMap<String, String>>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            front_page: default_front_page(),
            settings: BreadcrumbSettings::default(),
            content_types: Vec::new(),
            roles: Vec::new(),
            nodes: Vec::new(),
            users: Vec::new(),
            pages: Vec::new(),
            translations: BTreeMap::new(),
        }
    }
}
