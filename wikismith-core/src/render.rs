//! Page rendering and the pure scaffolding pass.
//!
//! Every page follows the same fixed template: a heading with the
//! derived title, the body (legacy content when available, otherwise a
//! placeholder), and a navigation footer that is byte-identical across
//! all generated pages.

use std::collections::BTreeMap;

use crate::page::PageName;

/// Body used when no legacy content exists for a page.
pub const PLACEHOLDER_BODY: &str = "[This is a placeholder. Original content to be migrated.]";

/// The fixed navigation footer links as (label, wiki link target) pairs.
///
/// Targets are extensionless wiki links; each one must resolve to a
/// page that the default page set generates.
pub const NAVIGATION_LINKS: &[(&str, &str)] = &[
    ("Home", "Home"),
    ("Project Structure", "Project-Structure"),
    ("Development Setup", "Development-Setup"),
    ("Tools Overview", "Tools-Overview"),
];

/// Legacy page content keyed by page filename.
pub type LegacyContent = BTreeMap<String, String>;

/// A rendered page ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    /// Output filename.
    pub name: PageName,
    /// Complete page text, heading through navigation footer.
    pub content: String,
}

/// Renders a single page from its title and body.
///
/// The body is inserted verbatim between the heading and the navigation
/// footer. The result always ends in exactly the footer plus a trailing
/// newline.
#[must_use]
pub fn render_page(title: &str, body: &str) -> String {
    let mut sections = Vec::new();

    // Heading
    sections.push(format!("# {title}"));
    sections.push(String::new());

    // Body
    sections.push(body.to_string());
    sections.push(String::new());

    // Navigation footer
    sections.push("## Navigation".to_string());
    for (label, target) in NAVIGATION_LINKS {
        sections.push(format!("- [{label}]({target})"));
    }

    let mut page = sections.join("\n");
    page.push('\n');
    page
}

/// Renders every page in `names`, in order.
///
/// Pure: the body for each page is the legacy entry stored under the
/// page's filename when one exists, otherwise [`PLACEHOLDER_BODY`].
/// Produces exactly one rendered page per input name.
#[must_use]
pub fn scaffold_pages(names: &[PageName], legacy: &LegacyContent) -> Vec<RenderedPage> {
    names
        .iter()
        .map(|name| {
            let body = legacy
                .get(name.as_str())
                .map_or(PLACEHOLDER_BODY, String::as_str);
            RenderedPage {
                name: name.clone(),
                content: render_page(&name.title(), body),
            }
        })
        .collect()
}
