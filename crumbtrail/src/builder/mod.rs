//! Breadcrumb builders and the manager that chooses between them.
//!
//! Each builder decides for itself whether it applies to a route. The
//! [`BreadcrumbManager`] asks them in descending priority order and lets the
//! first applicable one build the trail.
//!
//! # Examples
//!
//! ```
//! use crumbtrail::builder::BreadcrumbManager;
//! use crumbtrail::store::SiteStore;
//! use crumbtrail::{ContentType, Node, NodeId, RouteContext, Site};
//!
//! let mut site = Site::default();
//! site.settings.allowed_types.insert("page".into());
//! site.content_types
//!     .push(ContentType::new("page", "Basic page").with_breadcrumb_path(vec![NodeId(1)]));
//! site.nodes.push(Node::new(1, "page", "Page One"));
//! site.nodes.push(Node::new(4, "page", "Page Four"));
//!
//! let manager = BreadcrumbManager::for_site(&SiteStore::new(site));
//! let route = RouteContext::for_node(Node::new(4, "page", "Page Four"));
//!
//! assert_eq!(manager.applicable(&route), Some("content_type"));
//! assert_eq!(manager.build(&route).texts(), vec!["Home", "Page One", "Page Four"]);
//! ```

mod base;
mod content_type;
mod path_based;
mod user;

#[cfg(test)]
mod proptests;

use std::sync::Arc;

pub use base::FRONT_URL;
pub use content_type::ContentTypeBreadcrumbBuilder;
pub use path_based::{PathBasedBreadcrumbBuilder, PathBasedBreadcrumbBuilderOverride};
pub use user::UserBreadcrumbBuilder;

use crate::breadcrumb::Breadcrumb;
use crate::i18n::Translator;
use crate::route::RouteContext;
use crate::store::{ConfigStore, EntityStore, PathLookup, SiteStore};

/// Priority of the configured content-type and user rules.
pub const CONFIGURED_PRIORITY: i32 = 100;

/// Priority of the path-based catch-all.
pub const FALLBACK_PRIORITY: i32 = 0;

/// Identifier of [`ContentTypeBreadcrumbBuilder`] in a manager.
pub const CONTENT_TYPE_BUILDER: &str = "content_type";

/// Identifier of [`UserBreadcrumbBuilder`] in a manager.
pub const USER_BUILDER: &str = "user";

/// Identifier of the path-based fallback in a manager.
pub const PATH_BASED_BUILDER: &str = "path_based";

/// A rule that may produce the breadcrumb trail for a route.
pub trait BreadcrumbBuilder {
    /// Whether this builder wants to build the trail for `route`.
    fn applies(&self, route: &RouteContext) -> bool;

    /// Builds the trail. Only called after [`BreadcrumbBuilder::applies`]
    /// returned `true`; never fails.
    fn build(&self, route: &RouteContext) -> Breadcrumb;
}

struct Entry {
    id: String,
    priority: i32,
    builder: Box<dyn BreadcrumbBuilder>,
}

/// Priority-ordered set of builders.
#[derive(Default)]
pub struct BreadcrumbManager {
    entries: Vec<Entry>,
}

impl BreadcrumbManager {
    /// Creates a manager with no builders.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the content-type rule, the user rule and the path fallback.
    pub fn with_default_builders(
        config: Arc<dyn ConfigStore>,
        entities: Arc<dyn EntityStore>,
        paths: Arc<dyn PathLookup>,
        translator: Arc<dyn Translator>,
        front_page: impl Into<String>,
    ) -> Self {
        let mut manager = Self::new();
        manager.add_builder(
            CONTENT_TYPE_BUILDER,
            CONFIGURED_PRIORITY,
            Box::new(ContentTypeBreadcrumbBuilder::new(
                Arc::clone(&config),
                Arc::clone(&entities),
                Arc::clone(&translator),
            )),
        );
        manager.add_builder(
            USER_BUILDER,
            CONFIGURED_PRIORITY,
            Box::new(UserBreadcrumbBuilder::new(
                config,
                entities,
                Arc::clone(&translator),
            )),
        );
        manager.add_builder(
            PATH_BASED_BUILDER,
            FALLBACK_PRIORITY,
            Box::new(PathBasedBreadcrumbBuilderOverride::new(
                PathBasedBreadcrumbBuilder::new(paths, translator, front_page),
            )),
        );
        manager
    }

    /// The default builders over a site store.
    #[must_use]
    pub fn for_site(store: &SiteStore) -> Self {
        let front_page = store.front_page().to_string();
        let translator: Arc<dyn Translator> = Arc::new(store.translations());
        let store = Arc::new(store.clone());
        Self::with_default_builders(
            Arc::clone(&store) as Arc<dyn ConfigStore>,
            Arc::clone(&store) as Arc<dyn EntityStore>,
            store as Arc<dyn PathLookup>,
            translator,
            front_page,
        )
    }

    /// Registers a builder.
    ///
    /// Higher priorities are tried first; equal priorities keep registration
    /// order.
    pub fn add_builder(
        &mut self,
        id: impl Into<String>,
        priority: i32,
        builder: Box<dyn BreadcrumbBuilder>,
    ) {
        self.entries.push(Entry {
            id: id.into(),
            priority,
            builder,
        });
        self.entries.sort_by(|a, b| b.priority.cmp(&a.priority));
    }

    /// Builder identifiers in evaluation order.
    #[must_use]
    pub fn builder_ids(&self) -> Vec<&str> {
        self.entries.iter().map(|entry| entry.id.as_str()).collect()
    }

    /// Identifier of the builder that would handle `route`.
    #[must_use]
    pub fn applicable(&self, route: &RouteContext) -> Option<&str> {
        self.find(route).map(|entry| entry.id.as_str())
    }

    /// Builds the trail with the first applicable builder.
    ///
    /// Returns an empty trail when no builder applies.
    #[must_use]
    pub fn build(&self, route: &RouteContext) -> Breadcrumb {
        match self.find(route) {
            Some(entry) => {
                log::debug!("breadcrumb for {} built by '{}'", route.path(), entry.id);
                entry.builder.build(route)
            }
            None => {
                log::debug!("no breadcrumb builder applies to {}", route.path());
                Breadcrumb::new()
            }
        }
    }

    fn find(&self, route: &RouteContext) -> Option<&Entry> {
        self.entries
            .iter()
            .find(|entry| entry.builder.applies(route))
    }
}
