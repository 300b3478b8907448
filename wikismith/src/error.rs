//! Error types for `wikismith`
//!
//! This module provides the error hierarchy and the exit code mapping
//! used by the CLI.

use std::path::PathBuf;
use thiserror::Error;

use wikismith_core::PageError;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `wikismith` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// General error
    pub const ERROR: i32 = 1;

    /// Page error (invalid page name)
    pub const PAGE_ERROR: i32 = 2;

    /// I/O error (unreadable legacy file, write failure)
    pub const IO_ERROR: i32 = 3;

    /// Usage error (invalid arguments, unknown page)
    pub const USAGE_ERROR: i32 = 64;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `wikismith` operations.
///
/// Aggregates the domain-specific errors and provides a unified
/// interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum WikismithError {
    /// Page name validation error
    #[error(transparent)]
    Page(#[from] PageError),

    /// Scaffolding I/O error
    #[error(transparent)]
    Scaffold(#[from] ScaffoldError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Usage error with a full message for the user
    #[error("{0}")]
    Usage(String),
}

impl WikismithError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Page(_) => ExitCode::PAGE_ERROR,
            Self::Scaffold(_) | Self::Io(_) => ExitCode::IO_ERROR,
            Self::Json(_) => ExitCode::ERROR,
            Self::Usage(_) => ExitCode::USAGE_ERROR,
        }
    }
}

// ============================================================================
// Scaffolding Errors
// ============================================================================

/// Filesystem errors raised while scaffolding pages.
///
/// Each variant carries the offending path so the user sees exactly
/// which file stopped the run.
#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// A legacy file exists but could not be read as text
    #[error("failed to read legacy content {path}: {source}")]
    LegacyUnreadable {
        /// Path to the legacy file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// The output directory could not be created
    #[error("failed to prepare output directory {path}: {source}")]
    OutputDir {
        /// Path to the output directory
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A rendered page could not be written
    #[error("failed to write page {path}: {source}")]
    WriteFailed {
        /// Path to the output file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::SUCCESS, 0);
        assert_eq!(ExitCode::ERROR, 1);
        assert_eq!(ExitCode::PAGE_ERROR, 2);
        assert_eq!(ExitCode::IO_ERROR, 3);
        assert_eq!(ExitCode::USAGE_ERROR, 64);
    }

    #[test]
    fn test_page_error_exit_code() {
        let err: WikismithError = PageError::Empty.into();
        assert_eq!(err.exit_code(), ExitCode::PAGE_ERROR);
    }

    #[test]
    fn test_scaffold_error_exit_code() {
        let err: WikismithError = ScaffoldError::LegacyUnreadable {
            path: PathBuf::from("legacy/Home.md"),
            source: std::io::Error::new(std::io::ErrorKind::InvalidData, "not utf-8"),
        }
        .into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_io_error_exit_code() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "not found");
        let err: WikismithError = io_err.into();
        assert_eq!(err.exit_code(), ExitCode::IO_ERROR);
    }

    #[test]
    fn test_usage_error_exit_code() {
        let err = WikismithError::Usage("unknown page".to_string());
        assert_eq!(err.exit_code(), ExitCode::USAGE_ERROR);
    }

    #[test]
    fn test_scaffold_error_display_includes_path() {
        let err = ScaffoldError::WriteFailed {
            path: PathBuf::from("wiki/Home.md"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("wiki/Home.md"));
        assert!(err.to_string().contains("denied"));
    }

    #[test]
    fn test_page_error_is_transparent() {
        let err: WikismithError = PageError::NotAFileName("docs/Home.md".to_string()).into();
        assert_eq!(err.to_string(), "page name 'docs/Home.md' must be a bare file name");
    }
}
