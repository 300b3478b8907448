//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler.

pub mod completions;
pub mod generate;
pub mod pages;
pub mod version;

use crate::cli::args::{Cli, Commands, PagesSubcommand};
use crate::error::WikismithError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), WikismithError> {
    match cli.command {
        Commands::Generate(args) => generate::run(&args),
        Commands::Pages(cmd) => match cmd.subcommand {
            PagesSubcommand::List(args) => pages::list(&args),
            PagesSubcommand::Show(args) => pages::show(&args),
        },
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
