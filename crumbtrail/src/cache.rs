//! Cache metadata carried by built trails.
//!
//! A trail records the request dimensions it varies by (cache contexts) and
//! the objects whose change must invalidate it (cache tags).

use std::collections::BTreeSet;
use std::fmt;

use serde::{Serialize, Serializer};

use crate::entity::{Account, ContentType, Node, Role};

/// Name of the configuration object holding the breadcrumb settings.
pub const SETTINGS_CONFIG_NAME: &str = "crumbtrail.settings";

/// Trail varies by the current path.
pub const CONTEXT_URL_PATH: &str = "url.path";

/// Trail varies by the content language.
pub const CONTEXT_CONTENT_LANGUAGE: &str = "languages:language_content";

/// Trail varies by the parent of the current path.
pub const CONTEXT_URL_PATH_PARENT: &str = "url.path.parent";

/// Trail varies by whether the current path is the front page.
pub const CONTEXT_URL_PATH_IS_FRONT: &str = "url.path.is_front";

/// An object whose change invalidates cached trails.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CacheTag {
    /// A content node.
    Node(u64),
    /// A user account.
    User(u64),
    /// A content type definition.
    ContentType(String),
    /// A role definition.
    Role(String),
    /// A configuration object.
    Config(String),
}

impl fmt::Display for CacheTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "node:{id}"),
            Self::User(id) => write!(f, "user:{id}"),
            Self::ContentType(id) => write!(f, "config:node.type.{id}"),
            Self::Role(id) => write!(f, "config:user.role.{id}"),
            Self::Config(name) => write!(f, "config:{name}"),
        }
    }
}

impl Serialize for CacheTag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Something a trail can depend on.
pub trait CacheableDependency {
    /// The tag invalidated when this object changes.
    fn cache_tag(&self) -> CacheTag;
}

impl CacheableDependency for Node {
    fn cache_tag(&self) -> CacheTag {
        CacheTag::Node(self.id.0)
    }
}

impl CacheableDependency for Account {
    fn cache_tag(&self) -> CacheTag {
        CacheTag::User(self.id.0)
    }
}

impl CacheableDependency for ContentType {
    fn cache_tag(&self) -> CacheTag {
        CacheTag::ContentType(self.id.clone())
    }
}

impl CacheableDependency for Role {
    fn cache_tag(&self) -> CacheTag {
        CacheTag::Role(self.id.clone())
    }
}

/// Cache contexts and tags accumulated while building a trail.
///
/// # Examples
///
/// ```
/// use crumbtrail::{CacheMetadata, CacheTag, Node};
///
/// let mut cache = CacheMetadata::default();
/// cache.add_cache_contexts(["url.path"]);
/// cache.add_dependency(&Node::new(4, "page", "Page Four"));
///
/// assert!(cache.is_invalidated_by(&CacheTag::Node(4)));
/// assert!(!cache.is_invalidated_by(&CacheTag::Node(5)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheMetadata {
    contexts: BTreeSet<String>,
    tags: BTreeSet<CacheTag>,
}

impl CacheMetadata {
    /// Adds request dimensions the trail varies by.
    pub fn add_cache_contexts<I, S>(&mut self, contexts: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.contexts.extend(contexts.into_iter().map(Into::into));
    }

    /// Adds a tag directly.
    pub fn add_cache_tag(&mut self, tag: CacheTag) {
        self.tags.insert(tag);
    }

    /// Registers an object whose change invalidates the trail.
    pub fn add_dependency(&mut self, dependency: &impl CacheableDependency) {
        self.tags.insert(dependency.cache_tag());
    }

    /// Cache contexts in sorted order.
    pub fn contexts(&self) -> impl Iterator<Item = &str> {
        self.contexts.iter().map(String::as_str)
    }

    /// Cache tags in sorted order.
    pub fn tags(&self) -> impl Iterator<Item = &CacheTag> {
        self.tags.iter()
    }

    /// Whether the trail varies by the given context.
    #[must_use]
    pub fn has_context(&self, context: &str) -> bool {
        self.contexts.contains(context)
    }

    /// Whether a change to the tagged object invalidates the trail.
    #[must_use]
    pub fn is_invalidated_by(&self, tag: &CacheTag) -> bool {
        self.tags.contains(tag)
    }

    /// Whether no metadata has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.is_empty() && self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cache_tag_rendering() {
        assert_eq!(CacheTag::Node(3).to_string(), "node:3");
        assert_eq!(CacheTag::User(9).to_string(), "user:9");
        assert_eq!(
            CacheTag::ContentType("page".into()).to_string(),
            "config:node.type.page"
        );
        assert_eq!(
            CacheTag::Role("editor".into()).to_string(),
            "config:user.role.editor"
        );
        assert_eq!(
            CacheTag::Config(SETTINGS_CONFIG_NAME.into()).to_string(),
            "config:crumbtrail.settings"
        );
    }

    #[test]
    fn test_contexts_deduplicate() {
        let mut cache = CacheMetadata::default();
        cache.add_cache_contexts([CONTEXT_URL_PATH]);
        cache.add_cache_contexts([CONTEXT_URL_PATH, CONTEXT_CONTENT_LANGUAGE]);
        assert_eq!(cache.contexts().count(), 2);
        assert!(cache.has_context(CONTEXT_CONTENT_LANGUAGE));
    }

    #[test]
    fn test_entity_dependencies() {
        let mut cache = CacheMetadata::default();
        assert!(cache.is_empty());
        cache.add_dependency(&Role::new("editor", "Editor"));
        cache.add_dependency(&ContentType::new("page", "Basic page"));
        cache.add_dependency(&Account::new(2, "ada"));
        assert!(cache.is_invalidated_by(&CacheTag::Role("editor".into())));
        assert!(cache.is_invalidated_by(&CacheTag::ContentType("page".into())));
        assert!(cache.is_invalidated_by(&CacheTag::User(2)));
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_serializes_tags_as_strings() {
        let mut cache = CacheMetadata::default();
        cache.add_cache_tag(CacheTag::Node(1));
        let json = serde_json::to_value(&cache).unwrap();
        assert_eq!(json["tags"][0], "node:1");
    }
}
