//! Trails for user profile pages, configured per role.

use std::sync::Arc;

use crate::breadcrumb::Breadcrumb;
use crate::cache::{CacheTag, CONTEXT_CONTENT_LANGUAGE, CONTEXT_URL_PATH, SETTINGS_CONFIG_NAME};
use crate::config::SettingKey;
use crate::entity::{Account, Node, Role};
use crate::i18n::Translator;
use crate::route::RouteContext;
use crate::store::{ConfigStore, EntityStore};

use super::base;
use super::BreadcrumbBuilder;

/// Builds `Home > ancestors...` for user pages from the account's role.
///
/// Only the first of the account's roles that is not excluded counts. If that
/// role has no path, or cannot be loaded, the trail is just "Home"; later
/// roles are never consulted.
pub struct UserBreadcrumbBuilder {
    config: Arc<dyn ConfigStore>,
    entities: Arc<dyn EntityStore>,
    translator: Arc<dyn Translator>,
}

impl UserBreadcrumbBuilder {
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

    /// The role whose path shapes the account's trail, if any.
    fn select_role(&self, account: &Account) -> Option<Role> {
        let excluded = self.config.get(SettingKey::ExcludedRoles);
        let role_id = account
            .roles(true)
            .into_iter()
            .find(|role| !excluded.contains(*role))?;

        let role = self.entities.load_role(role_id);
        if role.is_none() {
            log::debug!("role '{role_id}' of user {} does not exist", account.id);
        }
        role
    }
}

impl BreadcrumbBuilder for UserBreadcrumbBuilder {
    fn applies(&self, route: &RouteContext) -> bool {
        base::allows_route(route) && route.user().is_some()
    }

    fn build(&self, route: &RouteContext) -> Breadcrumb {
        let mut breadcrumb = Breadcrumb::new();
        let Some(account) = route.user() else {
            return breadcrumb;
        };

        let role = self.select_role(account);
        let crumbs = role
            .as_ref()
            .map(|role| role.breadcrumb_path.clone())
            .unwrap_or_default();

        breadcrumb.add_link(base::home_link(
            self.translator.as_ref(),
            &account.langcode,
        ));
        base::add_ancestors(&mut breadcrumb, self.entities.as_ref(), &crumbs, Node::label);

        breadcrumb.add_cache_contexts([CONTEXT_URL_PATH, CONTEXT_CONTENT_LANGUAGE]);
        breadcrumb.add_cacheable_dependency(account);
        if let Some(role) = &role {
            breadcrumb.add_cacheable_dependency(role);
        }
        breadcrumb.add_cache_tag(CacheTag::Config(SETTINGS_CONFIG_NAME.to_string()));
        breadcrumb
    }
}
