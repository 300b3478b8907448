//! Built-in wiki page set
//!
//! The fixed, ordered page list embedded in the binary. Running
//! `wikismith generate` with no page arguments scaffolds exactly this
//! set, in this order.

use std::fmt;

// ============================================================================
// Types
// ============================================================================

/// A wiki page in the built-in set.
pub struct BuiltinPage {
    /// Output filename (bare, `.md`).
    pub name: &'static str,

    /// Short human-readable description.
    pub description: &'static str,

    /// Section for organization.
    pub section: PageSection,
}

/// Section for organizing built-in pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum PageSection {
    /// Landing and orientation pages.
    Overview,
    /// Environment and installation pages.
    Setup,
    /// Per-tool usage guides.
    Guides,
}

impl PageSection {
    /// Returns the human-readable title-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Setup => "Setup",
            Self::Guides => "Guides",
        }
    }

    /// Returns all section variants in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Overview, Self::Setup, Self::Guides]
    }
}

impl fmt::Display for PageSection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overview => write!(f, "overview"),
            Self::Setup => write!(f, "setup"),
            Self::Guides => write!(f, "guides"),
        }
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Registry of all built-in pages, in generation order.
static BUILTIN_PAGES: &[BuiltinPage] = &[
    BuiltinPage {
        name: "Home.md",
        description: "Wiki landing page and entry point",
        section: PageSection::Overview,
    },
    BuiltinPage {
        name: "Project-Structure.md",
        description: "Repository layout and module organization",
        section: PageSection::Overview,
    },
    BuiltinPage {
        name: "Development-Setup.md",
        description: "Local development environment setup",
        section: PageSection::Setup,
    },
    BuiltinPage {
        name: "Setup-VS-Code-Miniconda.md",
        description: "VS Code and Miniconda installation steps",
        section: PageSection::Setup,
    },
    BuiltinPage {
        name: "Setup-Ollama-Model.md",
        description: "Ollama model download and configuration",
        section: PageSection::Setup,
    },
    BuiltinPage {
        name: "Tools-Overview.md",
        description: "Summary of the project tool stack",
        section: PageSection::Overview,
    },
    BuiltinPage {
        name: "Guide-VS-Code.md",
        description: "Editing and debugging in VS Code",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-Conda.md",
        description: "Managing Conda environments",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-Ollama.md",
        description: "Running local models with Ollama",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-CrewAI.md",
        description: "Building agent crews with CrewAI",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-Selenium.md",
        description: "Browser automation with Selenium",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-BeautifulSoup.md",
        description: "HTML parsing with BeautifulSoup",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-AnythingLLM.md",
        description: "Document chat with AnythingLLM",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-LangChain.md",
        description: "LLM pipelines with LangChain",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-Docker.md",
        description: "Container workflows with Docker",
        section: PageSection::Guides,
    },
    BuiltinPage {
        name: "Guide-WSL.md",
        description: "Windows Subsystem for Linux setup",
        section: PageSection::Guides,
    },
];

// ============================================================================
// Public API
// ============================================================================

/// Look up a built-in page by exact filename.
#[must_use]
pub fn find_page(name: &str) -> Option<&'static BuiltinPage> {
    BUILTIN_PAGES.iter().find(|p| p.name == name)
}

/// List built-in pages, optionally filtered by section.
///
/// Registry order is preserved.
#[must_use]
pub fn list_pages(section: Option<PageSection>) -> Vec<&'static BuiltinPage> {
    BUILTIN_PAGES
        .iter()
        .filter(|p| section.is_none_or(|s| p.section == s))
        .collect()
}

/// Suggest a similar page name for typo correction.
///
/// Returns the closest match if its Damerau-Levenshtein distance is ≤ 3.
#[must_use]
pub fn suggest_page(input: &str) -> Option<String> {
    BUILTIN_PAGES
        .iter()
        .map(|p| (p.name, strsim::damerau_levenshtein(input, p.name)))
        .filter(|(_, dist)| *dist <= 3)
        .min_by_key(|(_, dist)| *dist)
        .map(|(name, _)| name.to_string())
}

/// Returns all page names in registry order.
#[must_use]
pub fn page_names() -> Vec<&'static str> {
    BUILTIN_PAGES.iter().map(|p| p.name).collect()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    use wikismith_core::{NAVIGATION_LINKS, PageName};

    #[test]
    fn registry_has_sixteen_pages() {
        assert_eq!(page_names().len(), 16, "Expected exactly 16 built-in pages");
    }

    #[test]
    fn no_duplicate_page_names() {
        let names = page_names();
        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(names.len(), unique.len(), "Duplicate page names found");
    }

    #[test]
    fn registry_order_is_home_first() {
        let names = page_names();
        assert_eq!(names.first(), Some(&"Home.md"));
        assert_eq!(names.last(), Some(&"Guide-WSL.md"));
    }

    #[test]
    fn all_names_validate_as_page_names() {
        for page in list_pages(None) {
            assert!(
                PageName::new(page.name).is_ok(),
                "Built-in page '{}' has an invalid name",
                page.name
            );
        }
    }

    #[test]
    fn navigation_targets_resolve_to_builtin_pages() {
        for (label, target) in NAVIGATION_LINKS {
            let filename = format!("{target}.md");
            assert!(
                find_page(&filename).is_some(),
                "Navigation link '{label}' points at '{filename}' which is not a built-in page"
            );
        }
    }

    #[test]
    fn find_page_existing() {
        let page = find_page("Guide-Docker.md");
        assert!(page.is_some());
        assert_eq!(page.unwrap().section, PageSection::Guides);
    }

    #[test]
    fn find_page_missing() {
        assert!(find_page("Nonexistent.md").is_none());
    }

    #[test]
    fn suggest_page_close() {
        // "Guide-Dcoker.md" is close to "Guide-Docker.md" (distance 1)
        let suggestion = suggest_page("Guide-Dcoker.md");
        assert_eq!(suggestion, Some("Guide-Docker.md".to_string()));
    }

    #[test]
    fn suggest_page_for_missing_extension() {
        // "Home" is 3 insertions away from "Home.md"
        let suggestion = suggest_page("Home");
        assert_eq!(suggestion, Some("Home.md".to_string()));
    }

    #[test]
    fn suggest_page_far() {
        let suggestion = suggest_page("zzzzzzzzzzzzzzzz");
        assert!(suggestion.is_none());
    }

    #[test]
    fn list_filter_by_section() {
        let setup = list_pages(Some(PageSection::Setup));
        assert_eq!(setup.len(), 3);
        for page in &setup {
            assert_eq!(page.section, PageSection::Setup);
        }
    }

    #[test]
    fn list_unfiltered_preserves_registry_order() {
        let listed: Vec<&str> = list_pages(None).iter().map(|p| p.name).collect();
        assert_eq!(listed, page_names());
    }

    #[test]
    fn section_display_lowercase() {
        assert_eq!(PageSection::Overview.to_string(), "overview");
        assert_eq!(PageSection::Setup.to_string(), "setup");
        assert_eq!(PageSection::Guides.to_string(), "guides");
    }

    #[test]
    fn section_label_titlecase() {
        assert_eq!(PageSection::Overview.label(), "Overview");
        assert_eq!(PageSection::Setup.label(), "Setup");
        assert_eq!(PageSection::Guides.label(), "Guides");
    }

    #[test]
    fn page_metadata_populated() {
        for page in list_pages(None) {
            assert!(!page.name.is_empty(), "Page name is empty");
            assert!(
                !page.description.is_empty(),
                "Page '{}' has empty description",
                page.name
            );
        }
    }

    #[test]
    fn every_page_derives_a_nonempty_title() {
        for page in list_pages(None) {
            let name = PageName::new(page.name).unwrap();
            assert!(
                !name.title().trim().is_empty(),
                "Page '{}' derives an empty title",
                page.name
            );
        }
    }
}
