//! Output formatting for breadcrumb trails.
//!
//! Trails can be rendered as a one-line human readable path, as JSON for
//! tooling, or as the HTML fragment a theme would print.

mod formatters;

use crate::breadcrumb::Breadcrumb;
use crate::Result;

pub use formatters::{escape_html, HtmlFormatter, HumanFormatter, JsonFormatter, SEPARATOR};

/// Trait for rendering a breadcrumb trail into text.
pub trait TrailFormatter {
    /// Format the given trail into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, breadcrumb: &Breadcrumb) -> Result<String>;
}

/// Available output formats for trails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `Home > Page One > Page Four`.
    #[default]
    Human,
    /// JSON with links and cache metadata.
    Json,
    /// A `<nav class="breadcrumb">` fragment.
    Html,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn TrailFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Html => Box::new(HtmlFormatter),
        }
    }
}
