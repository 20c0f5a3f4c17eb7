//! Documentation quality
//!
//! Two scores are derived from documentation: the maturity documentation
//! score (from precomputed metrics) and the cold-start quality score (re-read
//! from the readme text). Both go through [`quality`] with their own point
//! table so the differences between them stay visible in one place.

use crate::models::{DocumentationMetrics, RepositoryProfile};
use crate::readme;

/// Licenses that earn full license credit
pub const PERMISSIVE_LICENSES: [&str; 3] = ["MIT", "Apache-2.0", "BSD-3-Clause"];

/// Licenses that earn the documentation license points; narrower than
/// [`PERMISSIVE_LICENSES`]
pub const DOC_CREDIT_LICENSES: [&str; 2] = ["MIT", "Apache-2.0"];

/// Readme longer than this many characters counts as substantial
pub const LONG_README_CHARS: u64 = 1500;

/// Readme with at least this many second-level sections counts as structured
pub const MIN_SECTIONS: u32 = 3;

const MAX_POINTS: f64 = 100.0;

pub fn is_permissive(license: &str) -> bool {
    PERMISSIVE_LICENSES.contains(&license)
}

/// Documentation facts a point table can award
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DocSignals {
    pub has_readme: bool,
    pub long_readme: bool,
    pub structured_readme: bool,
    pub has_badges: bool,
    pub has_license: bool,
    pub permissive_license: bool,
    pub has_contributing: bool,
    pub has_code_of_conduct: bool,
    pub has_docs_folder: bool,
    pub has_wiki: bool,
}

impl DocSignals {
    /// Read signals off profiler-computed metrics
    pub fn from_metrics(metrics: &DocumentationMetrics) -> Self {
        Self {
            has_readme: metrics.has_readme,
            long_readme: metrics.readme_length > LONG_README_CHARS,
            structured_readme: metrics.readme_sections >= MIN_SECTIONS,
            has_badges: metrics.has_badges,
            has_license: metrics.has_license(),
            permissive_license: DOC_CREDIT_LICENSES.contains(&metrics.license_type.as_str()),
            has_contributing: metrics.has_contributing,
            has_code_of_conduct: metrics.has_code_of_conduct,
            has_docs_folder: metrics.has_docs_folder,
            has_wiki: metrics.has_wiki,
        }
    }

    /// Re-derive readme signals from the raw text; repository flags still
    /// come from the metrics
    pub fn from_readme_text(text: &str, metrics: &DocumentationMetrics) -> Self {
        let stats = readme::ReadmeStats::analyze(text);
        Self {
            has_readme: !text.is_empty(),
            long_readme: stats.length > LONG_README_CHARS,
            structured_readme: stats.sections >= MIN_SECTIONS,
            has_badges: stats.has_badges,
            ..Self::from_metrics(metrics)
        }
    }
}

/// Points awarded per signal, out of 100
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointTable {
    pub readme: u32,
    pub long_readme: u32,
    pub structured_readme: u32,
    pub badges: u32,
    pub any_license: u32,
    pub permissive_license: u32,
    pub contributing: u32,
    pub code_of_conduct: u32,
    pub docs_folder: u32,
    pub wiki: u32,
}

impl PointTable {
    pub fn max_points(&self) -> u32 {
        self.readme
            + self.long_readme
            + self.structured_readme
            + self.badges
            + self.any_license
            + self.permissive_license
            + self.contributing
            + self.code_of_conduct
            + self.docs_folder
            + self.wiki
    }
}

/// Table behind the maturity documentation score
pub const MATURITY_POINTS: PointTable = PointTable {
    readme: 15,
    long_readme: 10,
    structured_readme: 15,
    badges: 5,
    any_license: 0,
    permissive_license: 10,
    contributing: 10,
    code_of_conduct: 5,
    docs_folder: 10,
    wiki: 10,
};

/// Table behind the cold-start quality score
pub const COLD_START_POINTS: PointTable = PointTable {
    readme: 15,
    long_readme: 10,
    structured_readme: 15,
    badges: 0,
    any_license: 10,
    permissive_license: 0,
    contributing: 5,
    code_of_conduct: 5,
    docs_folder: 0,
    wiki: 0,
};

/// Earned points over 100
pub fn quality(signals: &DocSignals, table: &PointTable) -> f64 {
    let awards = [
        (signals.has_readme, table.readme),
        (signals.long_readme, table.long_readme),
        (signals.structured_readme, table.structured_readme),
        (signals.has_badges, table.badges),
        (signals.has_license, table.any_license),
        (signals.permissive_license, table.permissive_license),
        (signals.has_contributing, table.contributing),
        (signals.has_code_of_conduct, table.code_of_conduct),
        (signals.has_docs_folder, table.docs_folder),
        (signals.has_wiki, table.wiki),
    ];
    let earned: u32 = awards
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, points)| points)
        .sum();
    f64::from(earned) / MAX_POINTS
}

/// Documentation component of the maturity sub-score
pub fn documentation_score(metrics: &DocumentationMetrics) -> f64 {
    quality(&DocSignals::from_metrics(metrics), &MATURITY_POINTS)
}

/// Documentation-quality proxy for repositories too young for engagement
/// signals
pub fn cold_start_score(profile: &RepositoryProfile) -> f64 {
    let signals =
        DocSignals::from_readme_text(&profile.readme_content, &profile.documentation_metrics);
    quality(&signals, &COLD_START_POINTS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_metrics(license: &str) -> DocumentationMetrics {
        DocumentationMetrics {
            has_readme: true,
            readme_length: 5000,
            readme_sections: 6,
            has_badges: true,
            license_type: license.to_string(),
            has_contributing: true,
            has_code_of_conduct: true,
            has_docs_folder: true,
            has_wiki: true,
        }
    }

    fn long_structured_readme() -> String {
        let mut text = String::from("# project\n");
        for section in ["Install", "Usage", "Contributing"] {
            text.push_str(&format!("\n## {}\n\n{}\n", section, "lorem ipsum ".repeat(50)));
        }
        text
    }

    #[test]
    fn test_documentation_score_extremes() {
        assert_eq!(documentation_score(&DocumentationMetrics::default()), 0.0);
        // Nine items totalling 90 points
        assert!((documentation_score(&full_metrics("MIT")) - 0.90).abs() < 1e-12);
        assert_eq!(MATURITY_POINTS.max_points(), 90);
    }

    #[test]
    fn test_bsd_gets_no_documentation_license_credit() {
        assert!(is_permissive("BSD-3-Clause"));
        assert!((documentation_score(&full_metrics("Apache-2.0")) - 0.90).abs() < 1e-12);
        assert!((documentation_score(&full_metrics("BSD-3-Clause")) - 0.80).abs() < 1e-12);
        assert!((documentation_score(&full_metrics("GPL-3.0")) - 0.80).abs() < 1e-12);

        let readme_only = |license: &str| DocumentationMetrics {
            has_readme: true,
            license_type: license.to_string(),
            ..Default::default()
        };
        assert!((documentation_score(&readme_only("MIT")) - 0.25).abs() < 1e-12);
        assert!((documentation_score(&readme_only("BSD-3-Clause")) - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        let mut metrics = DocumentationMetrics::default();
        metrics.readme_length = 1500;
        assert_eq!(documentation_score(&metrics), 0.0);
        metrics.readme_length = 1501;
        assert!((documentation_score(&metrics) - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_cold_start_max_is_sixty_points() {
        let mut profile = crate::scoring::tests::sample_profile();
        profile.readme_content = long_structured_readme();
        profile.documentation_metrics = full_metrics("GPL-3.0");
        assert!((cold_start_score(&profile) - 0.60).abs() < 1e-12);
        assert_eq!(COLD_START_POINTS.max_points(), 60);
    }

    #[test]
    fn test_cold_start_reads_text_not_metrics() {
        // Metrics claim a rich readme but the text is empty
        let mut profile = crate::scoring::tests::sample_profile();
        profile.readme_content = String::new();
        profile.documentation_metrics = full_metrics("NONE");
        assert!((cold_start_score(&profile) - 0.10).abs() < 1e-12);
    }

    #[test]
    fn test_cold_start_ignores_deeper_headings() {
        // `### ` headings do not count towards the structured-readme points
        let mut profile = crate::scoring::tests::sample_profile();
        profile.documentation_metrics = DocumentationMetrics::default();
        profile.readme_content = "### a\n### b\n### c\n".to_string();
        assert!((cold_start_score(&profile) - 0.15).abs() < 1e-12);

        profile.readme_content = "## a\n## b\n## c\n".to_string();
        assert!((cold_start_score(&profile) - 0.30).abs() < 1e-12);
    }

    #[test]
    fn test_tables_diverge_on_contributing_and_license() {
        // Pinned differences between the two tables
        assert_eq!(MATURITY_POINTS.contributing, 10);
        assert_eq!(COLD_START_POINTS.contributing, 5);
        assert_eq!(MATURITY_POINTS.any_license, 0);
        assert_eq!(COLD_START_POINTS.any_license, 10);

        let gpl_only = DocSignals {
            has_license: true,
            ..Default::default()
        };
        assert_eq!(quality(&gpl_only, &MATURITY_POINTS), 0.0);
        assert!((quality(&gpl_only, &COLD_START_POINTS) - 0.10).abs() < 1e-12);
    }
}
