//! `wikismith` - Wiki page scaffolding tool
//!
//! This library provides the components behind the `wikismith` binary:
//! the built-in page set, the filesystem adapter around the pure
//! renderer in `wikismith-core`, and the CLI surface.

pub mod cli;
pub mod error;
pub mod observability;
pub mod pages;
pub mod scaffold;
