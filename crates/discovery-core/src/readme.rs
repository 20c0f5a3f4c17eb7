//! Readme text analysis

use crate::models::DocumentationMetrics;
use once_cell::sync::Lazy;
use regex::Regex;

static SECTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^##\s+").expect("valid regex"));

static BADGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)!\[.*?\]\(.*?(badge|shield).*?\)").expect("valid regex"));

/// Count second-level markdown headings (`## Title`)
///
/// Deeper headings (`### Title`) are not counted.
pub fn count_sections(text: &str) -> u32 {
    SECTION_RE.find_iter(text).count() as u32
}

/// Markdown image whose URL mentions a badge or shield service
pub fn has_badges(text: &str) -> bool {
    BADGE_RE.is_match(text)
}

/// What can be read off a readme body without any other repository data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReadmeStats {
    /// Length in characters
    pub length: u64,
    pub sections: u32,
    pub has_badges: bool,
}

impl ReadmeStats {
    pub fn analyze(text: &str) -> Self {
        Self {
            length: text.chars().count() as u64,
            sections: count_sections(text),
            has_badges: has_badges(text),
        }
    }
}

/// Repository facts that do not come from the readme body
#[derive(Debug, Clone, Default)]
pub struct RepositoryDocs {
    pub license_type: Option<String>,
    pub has_contributing: bool,
    pub has_code_of_conduct: bool,
    pub has_docs_folder: bool,
    pub has_wiki: bool,
}

impl DocumentationMetrics {
    /// Assemble metrics from an optional readme body and repository facts
    pub fn from_sources(readme: Option<&str>, docs: RepositoryDocs) -> Self {
        let stats = readme.map(ReadmeStats::analyze).unwrap_or_default();
        Self {
            has_readme: readme.is_some(),
            readme_length: stats.length,
            readme_sections: stats.sections,
            has_badges: stats.has_badges,
            license_type: docs
                .license_type
                .unwrap_or_else(|| crate::models::NO_LICENSE.to_string()),
            has_contributing: docs.has_contributing,
            has_code_of_conduct: docs.has_code_of_conduct,
            has_docs_folder: docs.has_docs_folder,
            has_wiki: docs.has_wiki,
        }
    }
}
