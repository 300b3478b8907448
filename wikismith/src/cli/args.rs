//! CLI argument definitions
//!
//! All Clap derive structs for `wikismith` command-line parsing.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::observability::LogFormat;
use crate::pages::PageSection;

// ============================================================================
// Root CLI
// ============================================================================

/// Wiki page scaffolding tool.
#[derive(Parser, Debug)]
#[command(name = "wikismith", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress diagnostic logging.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "WIKISMITH_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "WIKISMITH_LOG_FORMAT")]
    pub log_format: LogFormat,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate wiki pages into the output directory.
    Generate(GenerateArgs),

    /// Inspect the built-in page set.
    Pages(PagesCommand),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Generate Command
// ============================================================================

/// Arguments for `generate`.
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Pages to generate (defaults to the full built-in page set).
    pub pages: Vec<String>,

    /// Directory the generated pages are written to.
    #[arg(short, long, default_value = ".", env = "WIKISMITH_OUT_DIR")]
    pub out_dir: PathBuf,

    /// Directory holding legacy page content to import.
    #[arg(short, long, default_value = "legacy", env = "WIKISMITH_LEGACY_ROOT")]
    pub legacy_root: PathBuf,

    /// Skip the follow-up git instructions after generation.
    #[arg(long)]
    pub no_next_steps: bool,
}

// ============================================================================
// Pages Command
// ============================================================================

/// Page set inspection commands.
#[derive(Args, Debug)]
pub struct PagesCommand {
    /// Pages subcommand.
    #[command(subcommand)]
    pub subcommand: PagesSubcommand,
}

/// Pages subcommands.
#[derive(Subcommand, Debug)]
pub enum PagesSubcommand {
    /// List the built-in page set.
    List(PagesListArgs),

    /// Print a rendered page preview to stdout.
    Show(PagesShowArgs),
}

/// Arguments for `pages list`.
#[derive(Args, Debug)]
pub struct PagesListArgs {
    /// Only list pages in this section.
    #[arg(long)]
    pub section: Option<PageSection>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `pages show`.
#[derive(Args, Debug)]
pub struct PagesShowArgs {
    /// Page filename, e.g. `Home.md`.
    pub name: String,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

// ============================================================================
// Tests
// ============================================================================
