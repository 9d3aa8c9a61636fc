//! Editing breadcrumb settings and per-type/per-role breadcrumb paths.
//!
//! [`SettingsEditor`] performs the checks an administrator's changes must
//! pass before they reach the store. Persisting the store (for example with
//! [`SiteStore::save`](crate::store::SiteStore::save)) is left to the caller.

use std::collections::{BTreeMap, BTreeSet};

use crate::config::{BreadcrumbSettings, SettingKey};
use crate::entity::{BreadcrumbPath, Node, NodeId};
use crate::error::{Error, Result};
use crate::store::{ConfigStoreMut, EntityStoreMut};

/// Parses an autocomplete entity reference.
///
/// Accepts `Label (id)` as well as a bare id.
///
/// # Errors
///
/// Returns [`Error::InvalidReference`] when no id can be extracted.
///
/// # Examples
///
/// ```
/// use crumbtrail::settings::parse_entity_reference;
/// use crumbtrail::NodeId;
///
/// assert_eq!(parse_entity_reference("Page One (12)").unwrap(), NodeId(12));
/// assert_eq!(parse_entity_reference(" 7 ").unwrap(), NodeId(7));
/// assert!(parse_entity_reference("Page One").is_err());
/// ```
pub fn parse_entity_reference(input: &str) -> Result<NodeId> {
    let trimmed = input.trim();
    let id = match trimmed.strip_suffix(')').and_then(|rest| rest.rsplit_once('(')) {
        Some((_, id)) => id.trim(),
        None => trimmed,
    };
    id.parse::<u64>()
        .map(NodeId)
        .map_err(|_| Error::InvalidReference {
            input: input.to_string(),
        })
}

/// Formats a node the way [`parse_entity_reference`] reads it back.
#[must_use]
pub fn format_entity_reference(node: &Node) -> String {
    format!("{} ({})", node.label(), node.id)
}

/// Validated edits of breadcrumb configuration over a store.
///
/// # Examples
///
/// ```
/// use crumbtrail::settings::SettingsEditor;
/// use crumbtrail::store::SiteStore;
/// use crumbtrail::{ContentType, Node, NodeId, Site};
///
/// let mut site = Site::default();
/// site.content_types.push(ContentType::new("page", "Basic page"));
/// site.nodes.push(Node::new(1, "page", "Page One"));
///
/// let mut editor = SettingsEditor::new(SiteStore::new(site));
/// editor.submit(["page"], ["page"]).unwrap();
/// editor.set_content_type_path("page", &[NodeId(1)]).unwrap();
///
/// assert_eq!(editor.content_type_path("page").unwrap().len(), 1);
/// ```
pub struct SettingsEditor<S> {
    store: S,
}

impl<S> SettingsEditor<S>
where
    S: ConfigStoreMut + EntityStoreMut,
{
    /// Wraps a store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The wrapped store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Unwraps the store, e.g. to persist it.
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Content type labels by id, the choices for both settings.
    pub fn content_type_options(&self) -> BTreeMap<String, String> {
        self.store
            .load_content_types()
            .into_iter()
            .map(|content_type| (content_type.id, content_type.label))
            .collect()
    }

    /// The current settings as read from the store.
    pub fn settings(&self) -> BreadcrumbSettings {
        let mut settings = BreadcrumbSettings::default();
        for key in SettingKey::ALL {
            settings.set(key, self.store.get(key));
        }
        settings
    }

    /// Replaces the allowed content types and the referenceable bundles.
    ///
    /// Empty selections (unchecked boxes) are dropped before validation.
    ///
    /// # Errors
    ///
    /// Returns a validation error if a selection names an unknown content
    /// type. Nothing is stored in that case.
    pub fn submit<A, B>(&mut self, allowed_types: A, node_bundles: B) -> Result<()>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        B: IntoIterator,
        B::Item: AsRef<str>,
    {
        let allowed_types = self.checked_types(SettingKey::AllowedTypes, allowed_types)?;
        let node_bundles = self.checked_types(SettingKey::NodeBundles, node_bundles)?;

        self.store.set(SettingKey::AllowedTypes, allowed_types)?;
        self.store.set(SettingKey::NodeBundles, node_bundles)?;
        log::info!("breadcrumb settings saved");
        Ok(())
    }

    /// Replaces the roles ignored when picking an account's breadcrumb role.
    ///
    /// # Errors
    ///
    /// Returns an error if the store rejects the value.
    pub fn set_excluded_roles<I>(&mut self, roles: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let roles = non_empty(roles);
        self.store.set(SettingKey::ExcludedRoles, roles)
    }

    /// Whether a content type's breadcrumb path can be edited.
    ///
    /// Only types that use configured breadcrumbs get a path editor.
    pub fn breadcrumb_path_editable(&self, content_type: &str) -> bool {
        self.store
            .get(SettingKey::AllowedTypes)
            .contains(content_type)
    }

    /// The stored path of a content type.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown content type.
    pub fn content_type_path(&self, content_type: &str) -> Result<BreadcrumbPath> {
        self.store
            .load_content_type(content_type)
            .map(|content_type| content_type.breadcrumb_path)
            .ok_or_else(|| not_found("content type", content_type))
    }

    /// The stored path of a role.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] for an unknown role.
    pub fn role_path(&self, role: &str) -> Result<BreadcrumbPath> {
        self.store
            .load_role(role)
            .map(|role| role.breadcrumb_path)
            .ok_or_else(|| not_found("role", role))
    }

    /// Replaces a content type's breadcrumb path.
    ///
    /// # Errors
    ///
    /// Fails if the type is unknown or not editable, or if a reference is
    /// not an existing node of an allowed bundle.
    pub fn set_content_type_path(&mut self, content_type: &str, refs: &[NodeId]) -> Result<()> {
        let mut entity = self
            .store
            .load_content_type(content_type)
            .ok_or_else(|| not_found("content type", content_type))?;
        if !self.breadcrumb_path_editable(content_type) {
            return Err(Error::validation(
                "breadcrumb_path",
                format!("content type '{content_type}' does not use configured breadcrumbs"),
            ));
        }
        entity.breadcrumb_path = self.checked_path(refs)?;
        self.store.save_content_type(entity)
    }

    /// Replaces a role's breadcrumb path.
    ///
    /// # Errors
    ///
    /// Fails if the role is unknown or a reference is not an existing node
    /// of an allowed bundle.
    pub fn set_role_path(&mut self, role: &str, refs: &[NodeId]) -> Result<()> {
        let mut entity = self
            .store
            .load_role(role)
            .ok_or_else(|| not_found("role", role))?;
        entity.breadcrumb_path = self.checked_path(refs)?;
        self.store.save_role(entity)
    }

    /// Renders a path as `Label (id)` references; dangling ids stay bare.
    pub fn describe_path(&self, path: &BreadcrumbPath) -> Vec<String> {
        path.iter()
            .map(|id| {
                self.store
                    .load_node(*id)
                    .map_or_else(|| id.to_string(), |node| format_entity_reference(&node))
            })
            .collect()
    }

    fn checked_types<I>(&self, key: SettingKey, selected: I) -> Result<BTreeSet<String>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let options = self.content_type_options();
        let selected = non_empty(selected);
        if let Some(unknown) = selected.iter().find(|id| !options.contains_key(*id)) {
            return Err(Error::validation(
                key.as_str(),
                format!("unknown content type '{unknown}'"),
            ));
        }
        Ok(selected)
    }

    fn checked_path(&self, refs: &[NodeId]) -> Result<BreadcrumbPath> {
        let bundles = self.store.get(SettingKey::NodeBundles);
        for id in refs {
            let node = self
                .store
                .load_node(*id)
                .ok_or_else(|| not_found("node", id))?;
            if !bundles.is_empty() && !bundles.contains(&node.bundle) {
                return Err(Error::validation(
                    "breadcrumb_path",
                    format!(
                        "node {id} is of type '{}', which cannot be referenced",
                        node.bundle
                    ),
                ));
            }
        }
        Ok(refs.iter().copied().collect())
    }
}

fn non_empty<I>(values: I) -> BTreeSet<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    values
        .into_iter()
        .map(|value| value.as_ref().trim().to_string())
        .filter(|value| !value.is_empty())
        .collect()
}

fn not_found(kind: &str, id: impl std::fmt::Display) -> Error {
    Error::NotFound {
        resource: format!("{kind} '{id}'"),
    }
}
