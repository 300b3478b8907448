//! Pages command handlers
//!
//! Implements `pages list` and `pages show`.

use std::fmt::Write as _;

use wikismith_core::{PLACEHOLDER_BODY, PageName, render_page};

use crate::cli::args::{OutputFormat, PagesListArgs, PagesShowArgs};
use crate::error::WikismithError;
use crate::pages::{self, PageSection};

/// List the built-in page set.
///
/// Displays pages grouped by section (human) or as a JSON array.
///
/// # Errors
///
/// Returns an error if output serialization fails.
pub fn list(args: &PagesListArgs) -> Result<(), WikismithError> {
    let results = pages::list_pages(args.section);

    match args.format {
        OutputFormat::Json => {
            let mut entries = Vec::with_capacity(results.len());
            for p in &results {
                let title = PageName::new(p.name)?.title();
                entries.push(serde_json::json!({
                    "name": p.name,
                    "title": title,
                    "description": p.description,
                    "section": p.section.to_string(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&entries)?);
        }
        OutputFormat::Human => {
            if results.is_empty() {
                println!("No pages match the given filters.");
                return Ok(());
            }

            let total = results.len();
            println!("Built-in Wiki Pages ({total} available)\n");

            // Group by section in display order
            for section in PageSection::all() {
                let in_section: Vec<_> =
                    results.iter().filter(|p| p.section == *section).collect();
                if in_section.is_empty() {
                    continue;
                }

                println!("  {}", section.label());
                for p in in_section {
                    println!("    {:<28}{}", p.name, p.description);
                }
                println!();
            }

            println!("Generate all pages: wikismith generate");
            println!("Preview a page:     wikismith pages show <name>");
        }
    }

    Ok(())
}

/// Print a rendered preview of a built-in page to stdout.
///
/// The preview uses the placeholder body, exactly as `generate` would
/// write the page when no legacy content exists.
///
/// # Errors
///
/// Returns a usage error if the page name is not in the built-in set.
pub fn show(args: &PagesShowArgs) -> Result<(), WikismithError> {
    let page = pages::find_page(&args.name).ok_or_else(|| {
        let mut message = format!("Unknown page '{}'", args.name);

        if let Some(suggestion) = pages::suggest_page(&args.name) {
            let _ = write!(message, "\n\nDid you mean '{suggestion}'?");
        }

        message.push_str("\n\nAvailable pages:");
        for p in pages::list_pages(None) {
            let _ = write!(message, "\n  {:<28}{}", p.name, p.description);
        }

        message.push_str("\n\nUse 'wikismith pages list' for full details.");
        WikismithError::Usage(message)
    })?;

    let name = PageName::new(page.name)?;
    print!("{}", render_page(&name.title(), PLACEHOLDER_BODY));
    Ok(())
}
