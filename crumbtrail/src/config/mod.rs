//! Configuration system for crumbtrail.
//!
//! A single YAML site file backs both the breadcrumb settings (which content
//! types use configured trails, which may be referenced as ancestors, which
//! roles are skipped) and the entities those settings point at.
//!
//! # Configuration Precedence
//!
//! 1. Programmatic site (via `ConfigBuilder::with_site`)
//! 2. Environment variables (`CRUMBTRAIL_*`)
//! 3. Site file (`--site`, discovered `crumbtrail.yaml`, or `~/.crumbtrail/site.yaml`)
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use crumbtrail::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let site = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/srv/site"))
//!     .build()
//!     .unwrap();
//! println!("allowed: {:?}", site.settings.allowed_types);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, SITE_FILE_NAME};
pub use schema::{BreadcrumbSettings, SettingKey, Site, DEFAULT_EXCLUDED_ROLES, DEFAULT_FRONT_PAGE};
pub use validator::ConfigValidator;
