//! Trail formatter implementations.

use crate::breadcrumb::Breadcrumb;
use crate::Result;

use super::TrailFormatter;

/// Separator between crumbs in human readable output.
pub const SEPARATOR: &str = " > ";

/// Escapes the characters that are significant in HTML text and attributes.
///
/// # Examples
///
/// ```
/// use crumbtrail::output::escape_html;
///
/// assert_eq!(escape_html("Q&A <\"draft\">"), "Q&amp;A &lt;&quot;draft&quot;&gt;");
/// ```
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl TrailFormatter for HumanFormatter {
    fn format(&self, breadcrumb: &Breadcrumb) -> Result<String> {
        Ok(breadcrumb.texts().join(SEPARATOR))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl TrailFormatter for JsonFormatter {
    fn format(&self, breadcrumb: &Breadcrumb) -> Result<String> {
        Ok(serde_json::to_string_pretty(breadcrumb)?)
    }
}

/// Formatter for the HTML fragment.
///
/// Linked crumbs become anchors; unlinked ones (the current page) are plain
/// text marked with `aria-current`.
pub struct HtmlFormatter;

impl TrailFormatter for HtmlFormatter {
    fn format(&self, breadcrumb: &Breadcrumb) -> Result<String> {
        if breadcrumb.is_empty() {
            return Ok(String::new());
        }

        let mut html = String::from("<nav class=\"breadcrumb\" aria-label=\"Breadcrumb\">\n  <ol>\n");
        for link in breadcrumb.links() {
            let text = escape_html(&link.text);
            let item = match &link.url {
                Some(url) => format!("    <li><a href=\"{}\">{text}</a></li>\n", escape_html(url)),
                None => format!("    <li aria-current=\"page\">{text}</li>\n"),
            };
            html.push_str(&item);
        }
        html.push_str("  </ol>\n</nav>");
        Ok(html)
    }
}
