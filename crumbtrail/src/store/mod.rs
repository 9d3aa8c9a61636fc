//! Read and write access to breadcrumb settings and entities.
//!
//! Builders only see the read traits. The settings editor additionally needs
//! the `*Mut` traits. [`SiteStore`] implements all of them over a site file.

mod site;

use std::collections::BTreeSet;

pub use site::SiteStore;

use crate::config::SettingKey;
use crate::entity::{Account, ContentType, Node, NodeId, Role, UserId};
use crate::error::Result;

/// Read access to the breadcrumb settings object.
#[cfg_attr(test, mockall::automock)]
pub trait ConfigStore {
    /// Values stored under `key`; missing keys read as empty or default.
    fn get(&self, key: SettingKey) -> BTreeSet<String>;
}

/// Write access to the breadcrumb settings object.
pub trait ConfigStoreMut: ConfigStore {
    /// Replaces the values stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn set(&mut self, key: SettingKey, values: BTreeSet<String>) -> Result<()>;
}

/// Loads entities by identifier. Missing entities are `None`, never errors.
#[cfg_attr(test, mockall::automock)]
pub trait EntityStore {
    /// A content type definition.
    fn load_content_type(&self, id: &str) -> Option<ContentType>;

    /// All content type definitions.
    fn load_content_types(&self) -> Vec<ContentType>;

    /// A content node.
    fn load_node(&self, id: NodeId) -> Option<Node>;

    /// A role definition.
    fn load_role(&self, id: &str) -> Option<Role>;

    /// A user account.
    fn load_user(&self, id: UserId) -> Option<Account>;
}

/// Persists entity definitions edited through the settings editor.
pub trait EntityStoreMut: EntityStore {
    /// Inserts or replaces a content type definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save_content_type(&mut self, content_type: ContentType) -> Result<()>;

    /// Inserts or replaces a role definition.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store rejects the write.
    fn save_role(&mut self, role: Role) -> Result<()>;
}

/// Looks up internal paths for the path-based fallback.
#[cfg_attr(test, mockall::automock)]
pub trait PathLookup {
    /// `None` when the path is not routable; otherwise its title, if known.
    fn lookup(&self, path: &str) -> Option<Option<String>>;
}
