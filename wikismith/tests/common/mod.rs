//! Shared integration-test harness for running the compiled `wikismith`
//! binary and inspecting its output.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

/// The built-in page set in generation order, pinned independently of
/// the registry so ordering regressions show up here.
pub const DEFAULT_PAGES: &[&str] = &[
    "Home.md",
    "Project-Structure.md",
    "Development-Setup.md",
    "Setup-VS-Code-Miniconda.md",
    "Setup-Ollama-Model.md",
    "Tools-Overview.md",
    "Guide-VS-Code.md",
    "Guide-Conda.md",
    "Guide-Ollama.md",
    "Guide-CrewAI.md",
    "Guide-Selenium.md",
    "Guide-BeautifulSoup.md",
    "Guide-AnythingLLM.md",
    "Guide-LangChain.md",
    "Guide-Docker.md",
    "Guide-WSL.md",
];

/// Runs `wikismith` with `args` from the test process working directory.
pub fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wikismith"))
        .args(args)
        .output()
        .expect("failed to spawn wikismith")
}

/// Runs `wikismith` with `args` using `dir` as working directory.
pub fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wikismith"))
        .current_dir(dir)
        .args(args)
        .output()
        .expect("failed to spawn wikismith")
}

/// Runs `wikismith` from `dir` with extra environment variables set.
pub fn run_in_with_env(dir: &Path, args: &[&str], envs: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_wikismith"))
        .current_dir(dir)
        .args(args)
        .envs(envs.iter().copied())
        .output()
        .expect("failed to spawn wikismith")
}

/// Returns stdout decoded as UTF-8.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Returns stderr decoded as UTF-8.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Returns the process exit code.
pub fn exit_code(output: &Output) -> i32 {
    output.status.code().expect("process had no exit code")
}

/// Builds the expected page text for `title` and `body`, spelled out
/// independently of the production template.
pub fn rendered_page(title: &str, body: &str) -> String {
    format!(
        "# {title}\n\
         \n\
         {body}\n\
         \n\
         ## Navigation\n\
         - [Home](Home)\n\
         - [Project Structure](Project-Structure)\n\
         - [Development Setup](Development-Setup)\n\
         - [Tools Overview](Tools-Overview)\n"
    )
}

/// Builds the expected placeholder page for `title`.
pub fn placeholder_page(title: &str) -> String {
    rendered_page(title, "[This is a placeholder. Original content to be migrated.]")
}
