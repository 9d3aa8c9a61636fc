//! Pieces shared by the configured-trail builders.

use crate::breadcrumb::{Breadcrumb, Link};
use crate::entity::{BreadcrumbPath, Node};
use crate::i18n::{Translator, HOME};
use crate::route::RouteContext;
use crate::store::EntityStore;
use crate::text::truncate_title;

/// Site root targeted by the "Home" crumb.
pub const FRONT_URL: &str = "/";

/// Configured trails never apply on administrative routes.
pub(crate) fn allows_route(route: &RouteContext) -> bool {
    !route.is_admin_route()
}

/// The localized "Home" crumb linking to the site root.
pub(crate) fn home_link(translator: &dyn Translator, langcode: &str) -> Link {
    Link::new(translator.translate(HOME, langcode), FRONT_URL)
}

/// Appends one linked crumb per resolvable reference, in path order.
///
/// References that no longer resolve are skipped. Each resolved node becomes
/// a cache dependency of the trail.
pub(crate) fn add_ancestors(
    breadcrumb: &mut Breadcrumb,
    entities: &dyn EntityStore,
    path: &BreadcrumbPath,
    title: impl Fn(&Node) -> &str,
) {
    for id in path {
        match entities.load_node(*id) {
            Some(item) => {
                breadcrumb.add_link(Link::new(truncate_title(title(&item)), item.url()));
                breadcrumb.add_cacheable_dependency(&item);
            }
            None => log::debug!("skipping breadcrumb reference to missing node {id}"),
        }
    }
}
