//! Wikismith Core - page model and rendering
//!
//! This crate provides the page-name model, title derivation, and the
//! pure scaffolding pass shared by the `wikismith` CLI. Nothing in here
//! touches the filesystem: scaffolding maps a list of page names plus
//! already-loaded legacy content to a list of rendered pages, and the
//! CLI performs all I/O at the boundary.

pub mod error;
pub mod page;
pub mod render;

pub use error::PageError;
pub use page::{PageName, RECOGNIZED_EXTENSIONS};
pub use render::{
    LegacyContent, NAVIGATION_LINKS, PLACEHOLDER_BODY, RenderedPage, render_page, scaffold_pages,
};
