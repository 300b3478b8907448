//! Observability module
//!
//! Logging infrastructure for the CLI. Diagnostics always go to stderr
//! so product output on stdout stays pipeable.

pub mod logging;

pub use logging::{LogFormat, init_logging, verbosity_to_directive};
