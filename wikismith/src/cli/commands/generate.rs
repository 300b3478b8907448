//! Generate command handler.
//!
//! Resolves the page list, loads legacy content, renders through the
//! pure core, and writes the result via the filesystem adapter. The
//! follow-up git instructions are plain advisory output; nothing here
//! runs git.

use tracing::info;

use wikismith_core::{PageName, scaffold_pages};

use crate::cli::args::GenerateArgs;
use crate::error::WikismithError;
use crate::pages;
use crate::scaffold;

/// Advisory follow-up instructions printed after a successful run.
const NEXT_STEPS: &str = "\
Next steps:
1. Initialize a git repository:
   git init
2. Add all files:
   git add .
3. Make the initial commit:
   git commit -m \"Initial wiki structure\"
4. Add your GitHub wiki remote:
   git remote add origin https://github.com/<owner>/<repo>.wiki.git
5. Push to GitHub (you may need to force push):
   git push -f origin master
";

/// Execute `generate`.
///
/// Prints one `Created <name>` line per page written. On error the run
/// stops at the first failure: legacy content is loaded in full before
/// any page is written, so an unreadable legacy file aborts the run
/// without touching the output directory.
///
/// # Errors
///
/// Returns an error if a page name is invalid, a legacy file exists
/// but cannot be read, or the output directory or a page cannot be
/// written.
pub fn run(args: &GenerateArgs) -> Result<(), WikismithError> {
    let names = resolve_names(&args.pages)?;
    let legacy = scaffold::load_legacy(&names, &args.legacy_root)?;
    let rendered = scaffold_pages(&names, &legacy);

    scaffold::prepare_output_dir(&args.out_dir)?;
    for page in &rendered {
        scaffold::write_page(page, &args.out_dir)?;
        println!("Created {}", page.name);
    }

    info!(
        pages = rendered.len(),
        imported = legacy.len(),
        out_dir = %args.out_dir.display(),
        "wiki structure generated"
    );

    if !args.no_next_steps {
        println!();
        print!("{NEXT_STEPS}");
    }

    Ok(())
}

/// Resolve explicit page names, falling back to the built-in set.
fn resolve_names(requested: &[String]) -> Result<Vec<PageName>, WikismithError> {
    let names: Result<Vec<PageName>, _> = if requested.is_empty() {
        pages::page_names().into_iter().map(PageName::new).collect()
    } else {
        requested
            .iter()
            .map(String::as_str)
            .map(PageName::new)
            .collect()
    };
    names.map_err(WikismithError::from)
}
