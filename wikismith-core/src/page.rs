//! Page names and title derivation.
//!
//! A page name is a bare Markdown filename such as `Guide-VS-Code.md`.
//! The title shown in the page heading is derived from the name by
//! stripping the final extension and replacing word separators with
//! spaces, so `Guide-VS-Code.md` becomes `Guide VS Code`.

use std::fmt;

use crate::error::PageError;

/// Document extensions accepted for page names, matched ASCII
/// case-insensitively.
pub const RECOGNIZED_EXTENSIONS: &[&str] = &["md", "markdown"];

/// A validated wiki page filename.
///
/// Construction via [`PageName::new`] guarantees the name is non-empty,
/// contains no path separators, ends in a recognized extension, and has
/// a non-empty stem.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageName(String);

impl PageName {
    /// Validates `name` as a wiki page filename.
    ///
    /// # Errors
    ///
    /// Returns a [`PageError`] when the name is empty, is not a bare
    /// filename, lacks a recognized Markdown extension, or has nothing
    /// left once the extension is stripped.
    pub fn new(name: impl Into<String>) -> Result<Self, PageError> {
        let name = name.into();

        if name.is_empty() {
            return Err(PageError::Empty);
        }
        if name.contains(['/', '\\']) || name == "." || name == ".." {
            return Err(PageError::NotAFileName(name));
        }

        let Some((stem, extension)) = name.rsplit_once('.') else {
            return Err(PageError::UnrecognizedExtension(name));
        };
        let recognized = RECOGNIZED_EXTENSIONS
            .iter()
            .any(|known| extension.eq_ignore_ascii_case(known));
        let empty_stem = stem.is_empty();

        if !recognized {
            return Err(PageError::UnrecognizedExtension(name));
        }
        if empty_stem {
            return Err(PageError::EmptyStem(name));
        }

        Ok(Self(name))
    }

    /// Returns the filename exactly as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Derives the human-readable page title.
    ///
    /// Strips the final extension and replaces the word separators `-`
    /// and `_` with spaces. The rest of the stem is preserved verbatim,
    /// including any interior dots.
    #[must_use]
    pub fn title(&self) -> String {
        let stem = self
            .0
            .rsplit_once('.')
            .map_or(self.0.as_str(), |(stem, _)| stem);
        stem.chars()
            .map(|c| if c == '-' || c == '_' { ' ' } else { c })
            .collect()
    }
}

impl fmt::Display for PageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PageName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
