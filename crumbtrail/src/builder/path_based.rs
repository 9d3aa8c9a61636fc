//! Trails derived from the URL path itself.
//!
//! [`PathBasedBreadcrumbBuilder`] turns `/a/b/c` into `Home > A > B` by
//! looking up every parent path. [`PathBasedBreadcrumbBuilderOverride`] is
//! the same builder registered as the catch-all fallback.

use std::sync::Arc;

use crate::breadcrumb::{Breadcrumb, Link};
use crate::cache::{CONTEXT_URL_PATH_IS_FRONT, CONTEXT_URL_PATH_PARENT};
use crate::i18n::Translator;
use crate::route::RouteContext;
use crate::store::PathLookup;

use super::base;
use super::BreadcrumbBuilder;

/// Builds a trail from the routable parents of the current path.
pub struct PathBasedBreadcrumbBuilder {
    paths: Arc<dyn PathLookup>,
    translator: Arc<dyn Translator>,
    front_page: String,
}

impl PathBasedBreadcrumbBuilder {
    /// Creates the builder; `front_page` is the path of the site's front page.
    pub fn new(
        paths: Arc<dyn PathLookup>,
        translator: Arc<dyn Translator>,
        front_page: impl Into<String>,
    ) -> Self {
        Self {
            paths,
            translator,
            front_page: front_page.into(),
        }
    }

    fn is_front(&self, path: &str) -> bool {
        normalize(path) == normalize(&self.front_page)
    }

    /// Crumbs for the parents of `path`, nearest parent first.
    fn parent_links(&self, path: &str) -> Vec<Link> {
        let trimmed = normalize(path).trim_start_matches('/');
        let mut segments: Vec<&str> = trimmed.split('/').filter(|s| !s.is_empty()).collect();
        let mut links = Vec::new();

        while segments.len() > 1 {
            segments.pop();
            let prefix = format!("/{}", segments.join("/"));
            if self.is_front(&prefix) {
                continue;
            }
            match self.paths.lookup(&prefix) {
                Some(title) => {
                    let text = title.unwrap_or_else(|| humanize_segment(segments[segments.len() - 1]));
                    links.push(Link::new(text, prefix));
                }
                None => log::debug!("skipping unroutable parent path {prefix}"),
            }
        }
        links
    }
}

impl BreadcrumbBuilder for PathBasedBreadcrumbBuilder {
    fn applies(&self, route: &RouteContext) -> bool {
        !self.is_front(route.path())
    }

    fn build(&self, route: &RouteContext) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        breadcrumb.add_cache_contexts([CONTEXT_URL_PATH_PARENT, CONTEXT_URL_PATH_IS_FRONT]);

        let path = route.path();
        let mut links = self.parent_links(path);
        if !normalize(path).is_empty() && !self.is_front(path) {
            links.push(base::home_link(self.translator.as_ref(), route.langcode()));
        }
        links.reverse();
        breadcrumb.set_links(links);
        breadcrumb
    }
}

/// The path-based builder as the lowest-priority catch-all.
///
/// It applies to every route so that some trail is always produced when no
/// configured rule matched.
pub struct PathBasedBreadcrumbBuilderOverride {
    inner: PathBasedBreadcrumbBuilder,
}

impl PathBasedBreadcrumbBuilderOverride {
    /// Wraps a path-based builder.
    #[must_use]
    pub fn new(inner: PathBasedBreadcrumbBuilder) -> Self {
        Self { inner }
    }
}

impl BreadcrumbBuilder for PathBasedBreadcrumbBuilderOverride {
    fn applies(&self, _route: &RouteContext) -> bool {
        true
    }

    fn build(&self, route: &RouteContext) -> Breadcrumb {
        self.inner.build(route)
    }
}

fn normalize(path: &str) -> &str {
    path.trim_end_matches('/')
}

/// `"getting-started"` becomes `"Getting started"`.
fn humanize_segment(segment: &str) -> String {
    let spaced = segment.replace(['-', '_'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
