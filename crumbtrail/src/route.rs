//! The resolved subject of the current request.

use std::collections::BTreeMap;

use crate::entity::{Account, Node, DEFAULT_LANGCODE};

/// Route name of a node's canonical page.
pub const NODE_CANONICAL_ROUTE: &str = "entity.node.canonical";

/// Route name of a user's canonical page.
pub const USER_CANONICAL_ROUTE: &str = "entity.user.canonical";

/// A loaded parameter of the matched route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteParameter {
    /// A content node.
    Node(Node),
    /// A user account.
    User(Account),
}

/// Per-request route information handed to breadcrumb builders.
///
/// # Examples
///
/// ```
/// use crumbtrail::{Node, RouteContext};
///
/// let route = RouteContext::for_node(Node::new(4, "page", "Page Four"));
/// assert_eq!(route.path(), "/node/4");
/// assert!(route.node().is_some());
/// assert!(route.user().is_none());
/// assert!(!route.is_admin_route());
///
/// assert!(RouteContext::for_path("/admin/config").is_admin_route());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteContext {
    route_name: String,
    path: String,
    admin: bool,
    langcode: String,
    parameters: BTreeMap<String, RouteParameter>,
}

impl RouteContext {
    /// Creates a route with no parameters.
    ///
    /// Paths under `/admin` are flagged as administrative.
    pub fn new(route_name: impl Into<String>, path: impl Into<String>) -> Self {
        let path = path.into();
        let admin = is_admin_path(&path);
        Self {
            route_name: route_name.into(),
            path,
            admin,
            langcode: DEFAULT_LANGCODE.to_string(),
            parameters: BTreeMap::new(),
        }
    }

    /// The canonical page of a node.
    #[must_use]
    pub fn for_node(node: Node) -> Self {
        let path = format!("/node/{}", node.id);
        Self::new(NODE_CANONICAL_ROUTE, path).with_parameter("node", RouteParameter::Node(node))
    }

    /// The canonical page of a user account.
    #[must_use]
    pub fn for_user(account: Account) -> Self {
        let path = account.url();
        Self::new(USER_CANONICAL_ROUTE, path).with_parameter("user", RouteParameter::User(account))
    }

    /// A path without loaded parameters.
    pub fn for_path(path: impl Into<String>) -> Self {
        Self::new("", path)
    }

    /// Adds a route parameter (builder pattern).
    #[must_use]
    pub fn with_parameter(mut self, name: impl Into<String>, value: RouteParameter) -> Self {
        self.parameters.insert(name.into(), value);
        self
    }

    /// Overrides the administrative flag (builder pattern).
    #[must_use]
    pub fn with_admin(mut self, admin: bool) -> Self {
        self.admin = admin;
        self
    }

    /// Sets the interface language of the request (builder pattern).
    #[must_use]
    pub fn with_langcode(mut self, langcode: impl Into<String>) -> Self {
        self.langcode = langcode.into();
        self
    }

    /// The interface language of the request.
    #[must_use]
    pub fn langcode(&self) -> &str {
        &self.langcode
    }

    /// The matched route name.
    #[must_use]
    pub fn route_name(&self) -> &str {
        &self.route_name
    }

    /// The current internal path.
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// A loaded route parameter by name.
    #[must_use]
    pub fn parameter(&self, name: &str) -> Option<&RouteParameter> {
        self.parameters.get(name)
    }

    /// Whether this is an administrative route.
    #[must_use]
    pub fn is_admin_route(&self) -> bool {
        self.admin
    }

    /// The `node` parameter when it holds a content node.
    #[must_use]
    pub fn node(&self) -> Option<&Node> {
        match self.parameter("node") {
            Some(RouteParameter::Node(node)) => Some(node),
            _ => None,
        }
    }

    /// The `user` parameter when it holds an account.
    #[must_use]
    pub fn user(&self) -> Option<&Account> {
        match self.parameter("user") {
            Some(RouteParameter::User(account)) => Some(account),
            _ => None,
        }
    }
}

fn is_admin_path(path: &str) -> bool {
    path == "/admin" || path.starts_with("/admin/")
}
