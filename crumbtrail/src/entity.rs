//! Content entities consulted while building breadcrumbs.
//!
//! These are plain data records. Storage lives behind the traits in
//! [`crate::store`]; nothing here performs lookups.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Language code used when an entity does not declare one.
pub const DEFAULT_LANGCODE: &str = "en";

/// Roles every account carries implicitly. They never select a breadcrumb path.
pub const LOCKED_ROLES: [&str; 2] = ["anonymous", "authenticated"];

fn default_langcode() -> String {
    DEFAULT_LANGCODE.to_string()
}

/// Numeric identifier of a content node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NodeId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Numeric identifier of a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Ordered ancestor references attached to a content type or role.
///
/// The first reference is the crumb nearest to "Home". References may point
/// at nodes that no longer exist; builders skip those.
///
/// # Examples
///
/// ```
/// use crumbtrail::{BreadcrumbPath, NodeId};
///
/// let path = BreadcrumbPath::from(vec![NodeId(3), NodeId(1)]);
/// assert_eq!(path.iter().next(), Some(&NodeId(3)));
/// assert_eq!(path.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreadcrumbPath(Vec<NodeId>);

impl BreadcrumbPath {
    /// Creates an empty path.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Iterates references in trail order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeId> {
        self.0.iter()
    }

    /// Number of configured references.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no references are configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The references as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[NodeId] {
        &self.0
    }
}

impl From<Vec<NodeId>> for BreadcrumbPath {
    fn from(ids: Vec<NodeId>) -> Self {
        Self(ids)
    }
}

impl FromIterator<NodeId> for BreadcrumbPath {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a BreadcrumbPath {
    type Item = &'a NodeId;
    type IntoIter = std::slice::Iter<'a, NodeId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A content item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    /// Node identifier.
    pub id: NodeId,

    /// Content type (bundle) identifier.
    #[serde(rename = "type")]
    pub bundle: String,

    /// Full title.
    pub title: String,

    /// Language of the content.
    #[serde(default = "default_langcode")]
    pub langcode: String,

    /// Optional shorter title used when the node appears as an ancestor crumb.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_title: Option<String>,

    /// Optional path alias replacing `/node/{id}` in links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
}

impl Node {
    /// Creates a node with the default language and no optional fields.
    pub fn new(id: impl Into<NodeId>, bundle: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            bundle: bundle.into(),
            title: title.into(),
            langcode: default_langcode(),
            short_title: None,
            alias: None,
        }
    }

    /// Sets the short title (builder pattern).
    #[must_use]
    pub fn with_short_title(mut self, short_title: impl Into<String>) -> Self {
        self.short_title = Some(short_title.into());
        self
    }

    /// Sets the language code (builder pattern).
    #[must_use]
    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    /// Sets the path alias (builder pattern).
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// The node's full label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.title
    }

    /// The short title when present and non-empty, otherwise the label.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbtrail::Node;
    ///
    /// let plain = Node::new(1, "page", "Page Six");
    /// assert_eq!(plain.effective_title(), "Page Six");
    ///
    /// let short = Node::new(1, "page", "Page Six").with_short_title("Short Title");
    /// assert_eq!(short.effective_title(), "Short Title");
    ///
    /// let empty = Node::new(1, "page", "Page Six").with_short_title("");
    /// assert_eq!(empty.effective_title(), "Page Six");
    /// ```
    #[must_use]
    pub fn effective_title(&self) -> &str {
        match self.short_title.as_deref() {
            Some(short) if !short.is_empty() => short,
            _ => &self.title,
        }
    }

    /// Canonical link to the node: the alias when set, else `/node/{id}`.
    #[must_use]
    pub fn url(&self) -> String {
        self.alias
            .clone()
            .unwrap_or_else(|| format!("/node/{}", self.id))
    }
}

/// A content type definition carrying its breadcrumb ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContentType {
    /// Machine name.
    pub id: String,

    /// Human readable name.
    pub label: String,

    /// Configured ancestor references.
    #[serde(default, skip_serializing_if = "BreadcrumbPath::is_empty")]
    pub breadcrumb_path: BreadcrumbPath,
}

impl ContentType {
    /// Creates a content type with no breadcrumb path.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            breadcrumb_path: BreadcrumbPath::new(),
        }
    }

    /// Sets the breadcrumb path (builder pattern).
    #[must_use]
    pub fn with_breadcrumb_path(mut self, path: impl Into<BreadcrumbPath>) -> Self {
        self.breadcrumb_path = path.into();
        self
    }
}

/// A user role definition carrying its breadcrumb ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Role {
    /// Machine name.
    pub id: String,

    /// Human readable name.
    pub label: String,

    /// Configured ancestor references.
    #[serde(default, skip_serializing_if = "BreadcrumbPath::is_empty")]
    pub breadcrumb_path: BreadcrumbPath,
}

impl Role {
    /// Creates a role with no breadcrumb path.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            breadcrumb_path: BreadcrumbPath::new(),
        }
    }

    /// Sets the breadcrumb path (builder pattern).
    #[must_use]
    pub fn with_breadcrumb_path(mut self, path: impl Into<BreadcrumbPath>) -> Self {
        self.breadcrumb_path = path.into();
        self
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Account {
    /// Account identifier.
    pub id: UserId,

    /// Display name.
    pub name: String,

    /// Role ids in stored order.
    #[serde(default)]
    pub roles: Vec<String>,

    /// Preferred language.
    #[serde(default = "default_langcode")]
    pub langcode: String,
}

impl Account {
    /// Creates an account with no roles.
    pub fn new(id: impl Into<UserId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            roles: Vec::new(),
            langcode: default_langcode(),
        }
    }

    /// Sets the roles (builder pattern).
    #[must_use]
    pub fn with_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.roles = roles.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the language code (builder pattern).
    #[must_use]
    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    /// The account's role ids in stored order.
    ///
    /// With `exclude_locked` the implicit `anonymous` and `authenticated`
    /// roles are left out.
    ///
    /// # Examples
    ///
    /// ```
    /// use crumbtrail::Account;
    ///
    /// let account = Account::new(3, "ada").with_roles(["authenticated", "editor"]);
    /// assert_eq!(account.roles(true), vec!["editor"]);
    /// assert_eq!(account.roles(false).len(), 2);
    /// ```
    #[must_use]
    pub fn roles(&self, exclude_locked: bool) -> Vec<&str> {
        self.roles
            .iter()
            .map(String::as_str)
            .filter(|role| !exclude_locked || !LOCKED_ROLES.contains(role))
            .collect()
    }

    /// Canonical link to the account page.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/user/{}", self.id)
    }
}

/// A static routable path known to the site, used by the path-based fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Page {
    /// Internal path starting with `/`.
    pub path: String,

    /// Page title; when absent the last path segment is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}
