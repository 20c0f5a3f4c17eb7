use crate::error::{RankError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// License identifier used when a repository declares none
pub const NO_LICENSE: &str = "NONE";

/// Documentation signals precomputed by the profiler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentationMetrics {
    pub has_readme: bool,
    /// Readme length in characters
    pub readme_length: u64,
    /// Number of second-level markdown headings
    pub readme_sections: u32,
    pub has_badges: bool,
    /// SPDX identifier, `"NONE"` when absent
    #[serde(default = "default_license")]
    pub license_type: String,
    pub has_contributing: bool,
    pub has_code_of_conduct: bool,
    pub has_docs_folder: bool,
    pub has_wiki: bool,
}

impl DocumentationMetrics {
    pub fn has_license(&self) -> bool {
        self.license_type != NO_LICENSE
    }
}

impl Default for DocumentationMetrics {
    fn default() -> Self {
        Self {
            has_readme: false,
            readme_length: 0,
            readme_sections: 0,
            has_badges: false,
            license_type: default_license(),
            has_contributing: false,
            has_code_of_conduct: false,
            has_docs_folder: false,
            has_wiki: false,
        }
    }
}

fn default_license() -> String {
    NO_LICENSE.to_string()
}

/// Everything the ranker knows about one candidate repository
///
/// Built per request by the profiler and never mutated during ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepositoryProfile {
    /// `owner/name`, unique within a batch
    pub full_name: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,

    pub stars: u64,
    pub forks: u64,
    /// Zero when the primary language has no download registry
    #[serde(default)]
    pub weekly_downloads: u64,

    pub created_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub commits_last_30_days: u64,
    pub releases_last_90_days: u64,

    pub good_first_issues: u64,
    /// Closed / opened over the trailing six months
    pub issue_closure_rate: f64,
    /// Merged / total over the most recent 100 pull requests
    pub pr_merge_ratio: f64,

    pub bus_factor: u32,
    #[serde(default)]
    pub has_security_vulnerabilities: bool,

    #[serde(default)]
    pub documentation_metrics: DocumentationMetrics,
    /// Raw readme body; indexed and used for the cold-start estimate
    #[serde(default)]
    pub readme_content: String,
}

impl RepositoryProfile {
    /// Reject ratios the scorer cannot interpret
    ///
    /// Counts are unsigned so only the two ratio fields can be malformed.
    pub fn validate(&self) -> Result<()> {
        let ratios = [
            ("issue_closure_rate", self.issue_closure_rate),
            ("pr_merge_ratio", self.pr_merge_ratio),
        ];
        for (field, value) in ratios {
            if !(0.0..=1.0).contains(&value) {
                return Err(RankError::MalformedProfile {
                    full_name: self.full_name.clone(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }

    /// Whether the repository was created within `window` of `now`
    ///
    /// A window reaching past the representable range covers every date.
    pub fn is_younger_than(&self, window: chrono::Duration, now: DateTime<Utc>) -> bool {
        match now.checked_sub_signed(window) {
            Some(cutoff) => self.created_at > cutoff,
            None => true,
        }
    }
}

/// A profile with its scores, as returned by the ranker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    #[serde(flatten)]
    pub profile: RepositoryProfile,
    /// Raw lexical score, unbounded
    #[serde(rename = "relevanceScore")]
    pub relevance_score: f64,
    /// Persona-weighted composite of the five sub-scores
    #[serde(rename = "potentialScore")]
    pub potential_score: f64,
    /// Combined score before normalization
    #[serde(rename = "finalScore")]
    pub final_score: f64,
    /// `final_score` rescaled so the top result of the batch is 10
    #[serde(rename = "scoreOutOf10")]
    pub score_out_of_10: f64,
}
