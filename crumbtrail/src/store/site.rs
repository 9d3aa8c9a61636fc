//! Store backed by a site document.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::config::{ConfigLoader, SettingKey, Site};
use crate::entity::{Account, ContentType, Node, NodeId, Role, UserId};
use crate::error::{Error, Result};
use crate::i18n::TranslationTable;

use super::{ConfigStore, ConfigStoreMut, EntityStore, EntityStoreMut, PathLookup};

/// All stores over one [`Site`], optionally tied to the file it came from.
///
/// # Examples
///
/// ```
/// use crumbtrail::store::{EntityStore, SiteStore};
/// use crumbtrail::{ContentType, Node, NodeId, Site};
///
/// let mut site = Site::default();
/// site.content_types.push(ContentType::new("page", "Basic page"));
/// site.nodes.push(Node::new(1, "page", "Page One"));
///
/// let store = SiteStore::new(site);
/// assert_eq!(store.load_node(NodeId(1)).unwrap().title, "Page One");
/// assert!(store.load_node(NodeId(2)).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SiteStore {
    site: Site,
    path: Option<PathBuf>,
}

impl SiteStore {
    /// Wraps an in-memory site.
    #[must_use]
    pub fn new(site: Site) -> Self {
        Self { site, path: None }
    }

    /// Loads a site file and remembers its path for [`SiteStore::save`].
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self> {
        let site = ConfigLoader::load_file(path)?;
        Ok(Self {
            site,
            path: Some(path.to_path_buf()),
        })
    }

    /// Associates the store with a file path (builder pattern).
    #[must_use]
    pub fn with_path(mut self, path: &Path) -> Self {
        self.path = Some(path.to_path_buf());
        self
    }

    /// Writes the site back to its file.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no file path or writing fails.
    pub fn save(&self) -> Result<()> {
        let path = self.path.as_deref().ok_or_else(|| Error::NotFound {
            resource: "site file path".into(),
        })?;
        ConfigLoader::save_file(path, &self.site)
    }

    /// The underlying site.
    #[must_use]
    pub fn site(&self) -> &Site {
        &self.site
    }

    /// The file this store reads from and saves to.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The front page path.
    #[must_use]
    pub fn front_page(&self) -> &str {
        &self.site.front_page
    }

    /// A translator over the site's translation table.
    #[must_use]
    pub fn translations(&self) -> TranslationTable {
        TranslationTable::new(self.site.translations.clone())
    }

    fn node_by_path(&self, path: &str) -> Option<&Node> {
        self.site.nodes.iter().find(|node| {
            node.alias.as_deref() == Some(path) || format!("/node/{}", node.id) == path
        })
    }
}

impl ConfigStore for SiteStore {
    fn get(&self, key: SettingKey) -> BTreeSet<String> {
        self.site.settings.get(key)
    }
}

impl ConfigStoreMut for SiteStore {
    fn set(&mut self, key: SettingKey, values: BTreeSet<String>) -> Result<()> {
        self.site.settings.set(key, values);
        Ok(())
    }
}

impl EntityStore for SiteStore {
    fn load_content_type(&self, id: &str) -> Option<ContentType> {
        self.site.content_types.iter().find(|ct| ct.id == id).cloned()
    }

    fn load_content_types(&self) -> Vec<ContentType> {
        self.site.content_types.clone()
    }

    fn load_node(&self, id: NodeId) -> Option<Node> {
        self.site.nodes.iter().find(|node| node.id == id).cloned()
    }

    fn load_role(&self, id: &str) -> Option<Role> {
        self.site.roles.iter().find(|role| role.id == id).cloned()
    }

    fn load_user(&self, id: UserId) -> Option<Account> {
        self.site.users.iter().find(|account| account.id == id).cloned()
    }
}

impl EntityStoreMut for SiteStore {
    fn save_content_type(&mut self, content_type: ContentType) -> Result<()> {
        match self
            .site
            .content_types
            .iter_mut()
            .find(|ct| ct.id == content_type.id)
        {
            Some(existing) => *existing = content_type,
            None => self.site.content_types.push(content_type),
        }
        Ok(())
    }

    fn save_role(&mut self, role: Role) -> Result<()> {
        match self.site.roles.iter_mut().find(|r| r.id == role.id) {
            Some(existing) => *existing = role,
            None => self.site.roles.push(role),
        }
        Ok(())
    }
}

impl PathLookup for SiteStore {
    fn lookup(&self, path: &str) -> Option<Option<String>> {
        if let Some(page) = self.site.pages.iter().find(|page| page.path == path) {
            return Some(page.title.clone());
        }
        if let Some(node) = self.node_by_path(path) {
            return Some(Some(node.title.clone()));
        }
        self.site
            .users
            .iter()
            .find(|account| account.url() == path)
            .map(|account| Some(account.name.clone()))
    }
}
