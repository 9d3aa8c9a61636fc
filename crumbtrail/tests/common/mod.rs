//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for sites used across the
//! crumbtrail integration tests.

use std::path::{Path, PathBuf};

use crumbtrail::store::SiteStore;
use crumbtrail::{Account, BreadcrumbManager, ContentType, Node, NodeId, Role, Site};

/// Creates a temporary directory for testing.
///
/// The directory will be automatically cleaned up when the returned
/// `TempDir` is dropped.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}

/// Builder for creating test sites with sensible defaults.
///
/// The default site has a `page` content type (allowed, path `[1, 2, 3]`),
/// an `article` type, nodes "Page One" to "Page Three" and an `editor` role
/// whose path is `[1, 2]`.
///
/// # Examples
///
/// ```no_run
/// # use common::SiteFixture;
/// let site = SiteFixture::new()
///     .with_node(Node::new(4, "page", "Page Four"))
///     .build();
/// ```
#[allow(dead_code)]
pub struct SiteFixture {
    site: Site,
}

#[allow(dead_code)]
impl SiteFixture {
    /// Creates a new fixture builder with default values.
    pub fn new() -> Self {
        let mut site = Site::default();
        site.settings.allowed_types.insert("page".into());
        site.content_types.push(
            ContentType::new("page", "Basic page")
                .with_breadcrumb_path(vec![NodeId(1), NodeId(2), NodeId(3)]),
        );
        site.content_types.push(ContentType::new("article", "Article"));
        site.roles.push(
            Role::new("editor", "Editor").with_breadcrumb_path(vec![NodeId(1), NodeId(2)]),
        );
        site.roles.push(Role::new("administrator", "Administrator"));
        site.nodes.push(Node::new(1, "page", "Page One"));
        site.nodes.push(Node::new(2, "page", "Page Two"));
        site.nodes.push(Node::new(3, "page", "Page Three"));
        Self { site }
    }

    /// Starts from an empty site.
    pub fn empty() -> Self {
        Self {
            site: Site::default(),
        }
    }

    /// Adds or replaces a node.
    pub fn with_node(mut self, node: Node) -> Self {
        self.site.nodes.retain(|existing| existing.id != node.id);
        self.site.nodes.push(node);
        self
    }

    /// Removes a node, leaving any references to it dangling.
    pub fn without_node(mut self, id: u64) -> Self {
        self.site.nodes.retain(|node| node.id != NodeId(id));
        self
    }

    /// Adds a user account.
    pub fn with_user(mut self, account: Account) -> Self {
        self.site.users.push(account);
        self
    }

    /// Replaces the path of the `page` content type.
    pub fn with_page_path(mut self, ids: &[u64]) -> Self {
        let path: Vec<NodeId> = ids.iter().copied().map(NodeId).collect();
        for content_type in &mut self.site.content_types {
            if content_type.id == "page" {
                content_type.breadcrumb_path = path.clone().into();
            }
        }
        self
    }

    /// Sets the front page path.
    pub fn with_front_page(mut self, path: &str) -> Self {
        self.site.front_page = path.to_string();
        self
    }

    /// Adds a translation of `source` into `langcode`.
    pub fn with_translation(mut self, langcode: &str, source: &str, target: &str) -> Self {
        self.site
            .translations
            .entry(langcode.to_string())
            .or_default()
            .insert(source.to_string(), target.to_string());
        self
    }

    /// Mutates the site directly.
    pub fn tap(mut self, f: impl FnOnce(&mut Site)) -> Self {
        f(&mut self.site);
        self
    }

    /// Builds the site.
    pub fn build(self) -> Site {
        self.site
    }

    /// Builds a store over the site.
    pub fn store(self) -> SiteStore {
        SiteStore::new(self.site)
    }

    /// Builds the default breadcrumb manager over the site.
    pub fn manager(self) -> BreadcrumbManager {
        BreadcrumbManager::for_site(&self.store())
    }

    /// Writes the site as YAML to `dir/name` and returns the path.
    pub fn write_to(self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, serde_yaml::to_string(&self.site).unwrap()).unwrap();
        path
    }
}
