//! Filesystem adapter for page scaffolding.
//!
//! The renderer in `wikismith-core` is pure; this module is the I/O
//! boundary around it. It loads legacy content for a list of page names
//! and writes rendered pages into the output directory.

use std::fs;
use std::io;
use std::path::Path;

use tracing::{debug, info};

use wikismith_core::{LegacyContent, PageName, RenderedPage};

use crate::error::ScaffoldError;

/// Loads legacy content for `names` from the directory `root`.
///
/// A missing root directory or a missing per-page file is not an error:
/// those pages simply fall back to the placeholder body. A file that
/// exists but cannot be read as text is fatal, so known content is
/// never silently replaced by a placeholder.
///
/// # Errors
///
/// Returns [`ScaffoldError::LegacyUnreadable`] if an existing legacy
/// file cannot be read.
pub fn load_legacy(names: &[PageName], root: &Path) -> Result<LegacyContent, ScaffoldError> {
    let mut content = LegacyContent::new();

    if !root.is_dir() {
        debug!(root = %root.display(), "no legacy directory, all pages get placeholders");
        return Ok(content);
    }

    for name in names {
        let path = root.join(name.as_str());
        match fs::read_to_string(&path) {
            Ok(text) => {
                debug!(page = %name, bytes = text.len(), "legacy content loaded");
                content.insert(name.as_str().to_string(), text);
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(source) => return Err(ScaffoldError::LegacyUnreadable { path, source }),
        }
    }

    info!(
        found = content.len(),
        total = names.len(),
        root = %root.display(),
        "legacy scan complete"
    );
    Ok(content)
}

/// Creates the output directory if it does not already exist.
///
/// # Errors
///
/// Returns [`ScaffoldError::OutputDir`] if the directory cannot be
/// created.
pub fn prepare_output_dir(dir: &Path) -> Result<(), ScaffoldError> {
    fs::create_dir_all(dir).map_err(|source| ScaffoldError::OutputDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes one rendered page into `out_dir`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ScaffoldError::WriteFailed`] if the file cannot be
/// written.
pub fn write_page(page: &RenderedPage, out_dir: &Path) -> Result<(), ScaffoldError> {
    let path = out_dir.join(page.name.as_str());
    match fs::write(&path, &page.content) {
        Ok(()) => {
            debug!(path = %path.display(), bytes = page.content.len(), "page written");
            Ok(())
        }
        Err(source) => Err(ScaffoldError::WriteFailed { path, source }),
    }
}
