#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # crumbtrail
//!
//! A library for building configurable breadcrumb trails for content sites.
//!
//! Content types and user roles each carry an ordered list of ancestor
//! pages. Rendering a content page or a user profile produces
//! `Home > ancestors... > current page` from that list; every other page
//! falls back to a trail derived from its URL path.
//!
//! ## Core Types
//!
//! - [`RouteContext`]: the page being rendered
//! - [`BreadcrumbManager`] and [`builder::BreadcrumbBuilder`]: rule selection
//! - [`Breadcrumb`] and [`Link`]: the resulting trail
//! - [`CacheMetadata`] and [`CacheTag`]: when a trail must be rebuilt
//! - [`Site`] and [`store::SiteStore`]: configuration and entities
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use crumbtrail::store::SiteStore;
//! use crumbtrail::{BreadcrumbManager, ContentType, Node, NodeId, RouteContext, Site};
//!
//! let mut site = Site::default();
//! site.settings.allowed_types.insert("page".into());
//! site.content_types.push(
//!     ContentType::new("page", "Basic page")
//!         .with_breadcrumb_path(vec![NodeId(1), NodeId(2), NodeId(3)]),
//! );
//! site.nodes.push(Node::new(1, "page", "Page One"));
//! site.nodes.push(Node::new(2, "page", "Page Two"));
//! site.nodes.push(Node::new(3, "page", "Page Three"));
//!
//! let manager = BreadcrumbManager::for_site(&SiteStore::new(site));
//! let trail = manager.build(&RouteContext::for_node(Node::new(4, "page", "Page Four")));
//!
//! assert_eq!(
//!     trail.texts(),
//!     vec!["Home", "Page One", "Page Two", "Page Three", "Page Four"]
//! );
//! ```

pub mod breadcrumb;
pub mod builder;
pub mod cache;
pub mod config;
pub mod entity;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod output;
pub mod route;
pub mod settings;
pub mod store;
pub mod text;

// Re-export key types at crate root for convenience
pub use breadcrumb::{Breadcrumb, Link};
pub use builder::{BreadcrumbBuilder, BreadcrumbManager};
pub use cache::{CacheMetadata, CacheTag, CacheableDependency};
pub use config::{BreadcrumbSettings, ConfigBuilder, SettingKey, Site};
pub use entity::{Account, BreadcrumbPath, ContentType, Node, NodeId, Page, Role, UserId};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, TrailFormatter};
pub use route::{RouteContext, RouteParameter};
pub use settings::SettingsEditor;
