//! The trail returned to the rendering pipeline.

use serde::Serialize;

use crate::cache::{CacheMetadata, CacheTag, CacheableDependency};

/// One crumb: display text and an optional target.
///
/// A crumb without a URL is rendered as plain text (the current page).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Display text.
    pub text: String,
    /// Target path, or `None` for an unlinked crumb.
    pub url: Option<String>,
}

impl Link {
    /// A linked crumb.
    pub fn new(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: Some(url.into()),
        }
    }

    /// An unlinked crumb.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            url: None,
        }
    }

    /// Whether the crumb has a target.
    #[must_use]
    pub fn is_linked(&self) -> bool {
        self.url.is_some()
    }
}

/// An ordered trail plus the cache metadata describing its validity.
///
/// # Examples
///
/// ```
/// use crumbtrail::{Breadcrumb, Link};
///
/// let mut breadcrumb = Breadcrumb::new();
/// breadcrumb.add_link(Link::new("Home", "/"));
/// breadcrumb.add_link(Link::text("About"));
///
/// assert_eq!(breadcrumb.texts(), vec!["Home", "About"]);
/// assert!(!breadcrumb.links()[1].is_linked());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    links: Vec<Link>,
    cache: CacheMetadata,
}

impl Breadcrumb {
    /// Creates an empty trail.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a crumb.
    pub fn add_link(&mut self, link: Link) {
        self.links.push(link);
    }

    /// Replaces all crumbs.
    pub fn set_links(&mut self, links: Vec<Link>) {
        self.links = links;
    }

    /// Adds request dimensions the trail varies by.
    pub fn add_cache_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cache.add_cache_contexts(contexts);
    }

    /// Registers an object whose change invalidates the trail.
    pub fn add_cacheable_dependency(&mut self, dependency: &impl CacheableDependency) {
        self.cache.add_dependency(dependency);
    }

    /// Registers a tag directly.
    pub fn add_cache_tag(&mut self, tag: CacheTag) {
        self.cache.add_cache_tag(tag);
    }

    /// The crumbs in trail order.
    #[must_use]
    pub fn links(&self) -> &[Link] {
        &self.links
    }

    /// Display texts in trail order.
    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.links.iter().map(|link| link.text.as_str()).collect()
    }

    /// The cache metadata.
    #[must_use]
    pub fn cache(&self) -> &CacheMetadata {
        &self.cache
    }

    /// Whether the trail has no crumbs.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Number of crumbs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }
}
