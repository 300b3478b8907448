//! Core error types for wikismith
//!
//! Page-name validation errors shared across the workspace.

use thiserror::Error;

/// Page-name validation errors.
///
/// A page name must be a bare Markdown filename. Anything else is
/// rejected up front so the scaffolder never writes outside its output
/// directory or produces a page with an empty title.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// The page name is empty
    #[error("page name is empty")]
    Empty,

    /// The page name contains path separators or is a relative component
    #[error("page name '{0}' must be a bare file name")]
    NotAFileName(String),

    /// The page name does not end in a recognized document extension
    #[error("page name '{0}' must end in a Markdown extension (.md or .markdown)")]
    UnrecognizedExtension(String),

    /// Stripping the extension leaves nothing to derive a title from
    #[error("page name '{0}' has no stem to derive a title from")]
    EmptyStem(String),
}
