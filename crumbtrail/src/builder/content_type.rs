//! Trails for content pages, configured per content type.

use std::sync::Arc;

use crate::breadcrumb::{Breadcrumb, Link};
use crate::cache::{CacheTag, CONTEXT_URL_PATH, SETTINGS_CONFIG_NAME};
use crate::config::SettingKey;
use crate::entity::Node;
use crate::i18n::Translator;
use crate::route::RouteContext;
use crate::store::{ConfigStore, EntityStore};

use super::base;
use super::BreadcrumbBuilder;

/// Builds `Home > ancestors... > current page` for nodes of allowed types.
///
/// Ancestors come from the content type's breadcrumb path and use the short
/// title when one is set. The current page crumb always shows the full title
/// and is not linked.
pub struct ContentTypeBreadcrumbBuilder {
    config: Arc<dyn ConfigStore>,
    entities: Arc<dyn EntityStore>,
    translator: Arc<dyn Translator>,
}

impl ContentTypeBreadcrumbBuilder {
    /// Creates the builder from its collaborators.
    pub fn new(
        config: Arc<dyn ConfigStore>,
        entities: Arc<dyn EntityStore>,
        translator: Arc<dyn Translator>,
    ) -> Self {
        Self {
            config,
            entities,
            translator,
        }
    }

    fn approved_types(&self) -> std::collections::BTreeSet<String> {
        self.config.get(SettingKey::AllowedTypes)
    }
}

impl BreadcrumbBuilder for ContentTypeBreadcrumbBuilder {
    fn applies(&self, route: &RouteContext) -> bool {
        if !base::allows_route(route) {
            return false;
        }
        route
            .node()
            .is_some_and(|node| self.approved_types().contains(&node.bundle))
    }

    fn build(&self, route: &RouteContext) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        let Some(node) = route.node() else {
            return breadcrumb;
        };

        let node_type = self.entities.load_content_type(&node.bundle);
        let crumbs = node_type
            .as_ref()
            .map(|node_type| node_type.breadcrumb_path.clone())
            .unwrap_or_default();

        breadcrumb.add_link(base::home_link(self.translator.as_ref(), &node.langcode));
        base::add_ancestors(
            &mut breadcrumb,
            self.entities.as_ref(),
            &crumbs,
            Node::effective_title,
        );
        breadcrumb.add_link(Link::text(node.label()));

        breadcrumb.add_cache_contexts([CONTEXT_URL_PATH]);
        breadcrumb.add_cacheable_dependency(node);
        if let Some(node_type) = &node_type {
            breadcrumb.add_cacheable_dependency(node_type);
        }
        breadcrumb.add_cache_tag(CacheTag::Config(SETTINGS_CONFIG_NAME.to_string()));
        breadcrumb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{ContentType, NodeId};
    use crate::i18n::TranslationTable;
    use crate::store::{MockConfigStore, MockEntityStore};
    use std::collections::BTreeSet;

    fn config(allowed: &[&str]) -> MockConfigStore {
        let allowed: BTreeSet<String> = allowed.iter().map(ToString::to_string).collect();
        let mut config = MockConfigStore::new();
        config
            .expect_get()
            .returning(move |key| match key {
                SettingKey::AllowedTypes => allowed.clone(),
                _ => BTreeSet::new(),
            });
        config
    }

    fn builder(config: MockConfigStore, entities: MockEntityStore) -> ContentTypeBreadcrumbBuilder {
        let mut table = TranslationTable::default();
        table.insert("fr", "Home", "Accueil");
        ContentTypeBreadcrumbBuilder::new(Arc::new(config), Arc::new(entities), Arc::new(table))
    }

    fn entities(path: Vec<NodeId>, nodes: Vec<Node>) -> MockEntityStore {
        let mut entities = MockEntityStore::new();
        entities
            .expect_load_content_type()
            .returning(move |id| {
                (id == "page").then(|| {
                    ContentType::new("page", "Basic page").with_breadcrumb_path(path.clone())
                })
            });
        entities
            .expect_load_node()
            .returning(move |id| nodes.iter().find(|node| node.id == id).cloned());
        entities
    }

    #[test]
    fn test_applies_only_to_allowed_types() {
        let builder = builder(config(&["page"]), MockEntityStore::new());
        assert!(builder.applies(&RouteContext::for_node(Node::new(1, "page", "One"))));
        assert!(!builder.applies(&RouteContext::for_node(Node::new(2, "article", "Two"))));
        assert!(!builder.applies(&RouteContext::for_path("/node/1")));
        assert!(!builder.applies(&RouteContext::for_user(crate::Account::new(1, "root"))));
    }

    #[test]
    fn test_never_applies_on_admin_routes() {
        let builder = builder(config(&["page"]), MockEntityStore::new());
        let route = RouteContext::for_node(Node::new(1, "page", "One")).with_admin(true);
        assert!(!builder.applies(&route));
    }

    #[test]
    fn test_missing_ancestor_dropped() {
        let entities = entities(
            vec![NodeId(1), NodeId(2)],
            vec![Node::new(1, "page", "Page A")],
        );
        let builder = builder(config(&["page"]), entities);
        let breadcrumb = builder.build(&RouteContext::for_node(Node::new(9, "page", "Current")));

        assert_eq!(breadcrumb.texts(), vec!["Home", "Page A", "Current"]);
        let urls: Vec<Option<&str>> = breadcrumb
            .links()
            .iter()
            .map(|link| link.url.as_deref())
            .collect();
        assert_eq!(urls, vec![Some("/"), Some("/node/1"), None]);
    }

    #[test]
    fn test_short_title_for_ancestors_only() {
        let entities = entities(
            vec![NodeId(6)],
            vec![Node::new(6, "page", "Page Six").with_short_title("Short Title")],
        );
        let builder = builder(config(&["page"]), entities);
        let current = Node::new(7, "page", "Page Seven").with_short_title("Seven");
        let breadcrumb = builder.build(&RouteContext::for_node(current));

        assert_eq!(breadcrumb.texts(), vec!["Home", "Short Title", "Page Seven"]);
    }

    #[test]
    fn test_long_ancestor_title_truncated() {
        let entities = entities(
            vec![NodeId(5)],
            vec![Node::new(5, "page", "Title Should Be Truncated to Forty Characters")],
        );
        let builder = builder(config(&["page"]), entities);
        let current = Node::new(8, "page", "Another Title That Is Far Longer Than Forty Characters");
        let breadcrumb = builder.build(&RouteContext::for_node(current));

        assert_eq!(breadcrumb.texts()[1], "Title Should Be Truncated to Forty…");
        assert_eq!(
            breadcrumb.texts()[2],
            "Another Title That Is Far Longer Than Forty Characters"
        );
    }

    #[test]
    fn test_home_uses_node_language() {
        let builder = builder(config(&["page"]), entities(vec![], vec![]));
        let node = Node::new(3, "page", "Bonjour").with_langcode("fr");
        let route = RouteContext::for_node(node).with_langcode("en");
        assert_eq!(builder.build(&route).texts(), vec!["Accueil", "Bonjour"]);
    }

    #[test]
    fn test_cache_metadata() {
        let builder = builder(config(&["page"]), entities(vec![NodeId(1)], vec![Node::new(1, "page", "One")]));
        let breadcrumb = builder.build(&RouteContext::for_node(Node::new(4, "page", "Four")));
        let cache = breadcrumb.cache();

        assert!(cache.has_context(CONTEXT_URL_PATH));
        assert!(cache.is_invalidated_by(&CacheTag::Node(4)));
        assert!(cache.is_invalidated_by(&CacheTag::Node(1)));
        assert!(cache.is_invalidated_by(&CacheTag::ContentType("page".into())));
        assert!(cache.is_invalidated_by(&CacheTag::Config(SETTINGS_CONFIG_NAME.into())));
    }

    #[test]
    fn test_unconfigured_type_gives_two_crumbs() {
        let mut entities = MockEntityStore::new();
        entities.expect_load_content_type().return_const(None);
        let builder = builder(config(&["landing"]), entities);
        let breadcrumb =
            builder.build(&RouteContext::for_node(Node::new(2, "landing", "Landing")));

        assert_eq!(breadcrumb.texts(), vec!["Home", "Landing"]);
        assert!(!breadcrumb
            .cache()
            .is_invalidated_by(&CacheTag::ContentType("landing".into())));
    }
}
