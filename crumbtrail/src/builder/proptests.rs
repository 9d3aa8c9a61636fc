//! Property-based tests for the breadcrumb builders.

use std::sync::Arc;

use proptest::prelude::*;

use super::{
    BreadcrumbBuilder, BreadcrumbManager, ContentTypeBreadcrumbBuilder, UserBreadcrumbBuilder,
    PATH_BASED_BUILDER,
};
use crate::entity::{Account, ContentType, Node, NodeId, Role};
use crate::route::RouteContext;
use crate::store::SiteStore;
use crate::text::MAX_TITLE_LENGTH;
use crate::Site;

/// Site with nodes 1..=8, a `page` type and an `editor` role sharing `path`.
fn site(path: &[u64], titles: &[String]) -> SiteStore {
    let mut site = Site::default();
    site.settings.allowed_types.insert("page".into());
    let path: Vec<NodeId> = path.iter().copied().map(NodeId).collect();
    site.content_types
        .push(ContentType::new("page", "Basic page").with_breadcrumb_path(path.clone()));
    site.roles
        .push(Role::new("editor", "Editor").with_breadcrumb_path(path));
    for (id, title) in (1u64..=8).zip(titles) {
        site.nodes.push(Node::new(id, "page", title.as_str()));
    }
    SiteStore::new(site)
}

fn builders(store: &SiteStore) -> (ContentTypeBreadcrumbBuilder, UserBreadcrumbBuilder) {
    let store = Arc::new(store.clone());
    let translator = Arc::new(store.translations());
    (
        ContentTypeBreadcrumbBuilder::new(store.clone(), store.clone(), translator.clone()),
        UserBreadcrumbBuilder::new(store.clone(), store, translator),
    )
}

fn title_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[A-Za-z][A-Za-z ,.-]{0,79}", 8)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    // Configured rules never apply on administrative routes
    #[test]
    fn admin_routes_never_configured(
        suffix in "[a-z/]{0,20}",
        titles in title_strategy(),
    ) {
        let store = site(&[1], &titles);
        let (content_type, user) = builders(&store);
        let path = format!("/admin/{suffix}");
        let node_route = RouteContext::for_node(Node::new(1, "page", "x")).with_admin(true);
        let user_route =
            RouteContext::for_user(Account::new(1, "u").with_roles(["editor"])).with_admin(true);

        prop_assert!(!content_type.applies(&node_route));
        prop_assert!(!user.applies(&user_route));

        let manager = BreadcrumbManager::for_site(&store);
        prop_assert_eq!(manager.applicable(&RouteContext::for_path(path)), Some(PATH_BASED_BUILDER));
    }

    // Home, one crumb per resolvable reference, then the current page
    #[test]
    fn content_type_trail_shape(
        path in prop::collection::vec(1u64..=12, 0..10),
        titles in title_strategy(),
    ) {
        let store = site(&path, &titles);
        let (content_type, _) = builders(&store);
        let current = Node::new(99, "page", "Current page");
        let breadcrumb = content_type.build(&RouteContext::for_node(current));

        let resolvable = path.iter().filter(|id| **id <= 8).count();
        prop_assert_eq!(breadcrumb.len(), resolvable + 2);
        prop_assert_eq!(breadcrumb.links()[0].url.as_deref(), Some("/"));
        prop_assert!(breadcrumb.links()[..breadcrumb.len() - 1].iter().all(|link| link.is_linked()));
        prop_assert!(!breadcrumb.links()[breadcrumb.len() - 1].is_linked());
    }

    // Ancestor labels stay within the title limit in both rules
    #[test]
    fn ancestor_labels_bounded(
        path in prop::collection::vec(1u64..=8, 1..6),
        titles in title_strategy(),
    ) {
        let store = site(&path, &titles);
        let (content_type, user) = builders(&store);
        let node_trail = content_type.build(&RouteContext::for_node(Node::new(99, "page", "Current")));
        let user_trail =
            user.build(&RouteContext::for_user(Account::new(1, "u").with_roles(["editor"])));

        prop_assert_eq!(user_trail.len(), path.len() + 1);
        for link in node_trail.links()[1..node_trail.len() - 1].iter().chain(&user_trail.links()[1..]) {
            prop_assert!(link.text.chars().count() <= MAX_TITLE_LENGTH);
        }
    }
}
