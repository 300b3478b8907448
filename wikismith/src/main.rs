//! `wikismith` - Wiki page scaffolding tool

use clap::Parser;

use wikismith::cli::args::Cli;
use wikismith::cli::commands;
use wikismith::error::ExitCode;
use wikismith::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match commands::dispatch(cli) {
        Ok(()) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
