//! Site file validation.
//!
//! Structural problems are errors. Dangling breadcrumb references are not:
//! builders skip them, so they are only reported through `log::warn!`.

use std::collections::HashSet;

use crate::config::schema::Site;
use crate::entity::BreadcrumbPath;
use crate::error::{Error, Result};

/// Validates a site.
///
/// # Examples
///
/// ```
/// use crumbtrail::config::{ConfigValidator, Site};
///
/// ConfigValidator::validate(&Site::default()).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete site.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(site: &Site) -> Result<()> {
        if !site.front_page.starts_with('/') {
            return Err(Error::Validation {
                field: "front_page".into(),
                message: "Must be an internal path starting with '/'".into(),
            });
        }

        let type_ids = Self::unique_ids(
            "content_types",
            site.content_types.iter().map(|ct| ct.id.as_str()),
        )?;
        let role_ids = Self::unique_ids("roles", site.roles.iter().map(|role| role.id.as_str()))?;

        for (field, values) in [
            ("settings.allowed_types", &site.settings.allowed_types),
            ("settings.node_bundles", &site.settings.node_bundles),
        ] {
            for value in values {
                if !type_ids.contains(value.as_str()) {
                    return Err(Error::Validation {
                        field: field.into(),
                        message: format!("Unknown content type '{value}'"),
                    });
                }
            }
        }

        let mut node_ids = HashSet::new();
        for node in &site.nodes {
            if !node_ids.insert(node.id) {
                return Err(Error::Validation {
                    field: "nodes".into(),
                    message: format!("Duplicate node id {}", node.id),
                });
            }
            Self::validate_label("nodes.title", &node.title)?;
            if !type_ids.contains(node.bundle.as_str()) {
                return Err(Error::Validation {
                    field: "nodes.type".into(),
                    message: format!("Node {} has unknown content type '{}'", node.id, node.bundle),
                });
            }
            if let Some(alias) = &node.alias {
                Self::validate_internal_path("nodes.alias", alias)?;
            }
        }

        let mut user_ids = HashSet::new();
        for account in &site.users {
            if !user_ids.insert(account.id) {
                return Err(Error::Validation {
                    field: "users".into(),
                    message: format!("Duplicate user id {}", account.id),
                });
            }
            for role in &account.roles {
                if !role_ids.contains(role.as_str()) {
                    log::warn!("user {} has undefined role '{role}'", account.id);
                }
            }
        }

        for page in &site.pages {
            Self::validate_internal_path("pages.path", &page.path)?;
        }

        for ct in &site.content_types {
            Self::warn_dangling(&format!("content type '{}'", ct.id), &ct.breadcrumb_path, &node_ids);
        }
        for role in &site.roles {
            Self::warn_dangling(&format!("role '{}'", role.id), &role.breadcrumb_path, &node_ids);
        }

        Ok(())
    }

    fn unique_ids<'a>(
        field: &str,
        ids: impl Iterator<Item = &'a str>,
    ) -> Result<HashSet<&'a str>> {
        let mut seen = HashSet::new();
        for id in ids {
            Self::validate_identifier(field, id)?;
            if !seen.insert(id) {
                return Err(Error::Validation {
                    field: field.into(),
                    message: format!("Duplicate id '{id}'"),
                });
            }
        }
        Ok(seen)
    }

    /// Checks that an identifier is non-empty and has no surrounding whitespace.
    fn validate_identifier(field: &str, value: &str) -> Result<()> {
        Self::validate_label(field, value)?;
        if value.trim() != value {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("'{value}' has leading or trailing whitespace"),
            });
        }
        Ok(())
    }

    /// Checks that a display label is not blank.
    fn validate_label(field: &str, value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty or only whitespace".into(),
            });
        }
        if value.contains('\0') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot contain null bytes".into(),
            });
        }
        Ok(())
    }

    fn validate_internal_path(field: &str, path: &str) -> Result<()> {
        if path.starts_with('/') {
            Ok(())
        } else {
            Err(Error::Validation {
                field: field.into(),
                message: format!("'{path}' must start with '/'"),
            })
        }
    }

    fn warn_dangling(owner: &str, path: &BreadcrumbPath, node_ids: &HashSet<crate::NodeId>) {
        for id in path {
            if !node_ids.contains(id) {
                log::warn!("{owner} references missing node {id}; it will be skipped");
            }
        }
    }
}
