//! CLI module
//!
//! Clap argument definitions and command dispatch.

pub mod args;
pub mod commands;
