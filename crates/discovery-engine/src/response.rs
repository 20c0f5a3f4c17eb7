//! Response shaping for ranked results
//!
//! The ranker returns every profile with full precision; callers presenting
//! results want the head of the list with rounded scores and a little
//! bookkeeping about the batch.

use chrono::{DateTime, Utc};
use discovery_core::{DocumentationMetrics, Persona, RankedResult};
use serde::{Deserialize, Serialize};

const SCORE_DECIMALS: i32 = 4;
const SCALE_DECIMALS: i32 = 2;

/// One entry of a response: the profile minus its readme body, with
/// rounded scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedRepository {
    pub full_name: String,
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub stars: u64,
    pub forks: u64,
    pub weekly_downloads: u64,
    pub created_at: DateTime<Utc>,
    pub pushed_at: DateTime<Utc>,
    pub commits_last_30_days: u64,
    pub releases_last_90_days: u64,
    pub good_first_issues: u64,
    pub issue_closure_rate: f64,
    pub pr_merge_ratio: f64,
    pub bus_factor: u32,
    pub has_security_vulnerabilities: bool,
    pub documentation_metrics: DocumentationMetrics,
    #[serde(rename = "finalScore")]
    pub final_score: f64,
    #[serde(rename = "scoreOutOf10")]
    pub score_out_of_10: f64,
    #[serde(rename = "relevanceScore")]
    pub relevance_score: f64,
    #[serde(rename = "potentialScore")]
    pub potential_score: f64,
}

impl From<RankedResult> for RankedRepository {
    fn from(result: RankedResult) -> Self {
        let profile = result.profile;
        Self {
            full_name: profile.full_name,
            name: profile.name,
            description: profile.description,
            topics: profile.topics,
            stars: profile.stars,
            forks: profile.forks,
            weekly_downloads: profile.weekly_downloads,
            created_at: profile.created_at,
            pushed_at: profile.pushed_at,
            commits_last_30_days: profile.commits_last_30_days,
            releases_last_90_days: profile.releases_last_90_days,
            good_first_issues: profile.good_first_issues,
            issue_closure_rate: profile.issue_closure_rate,
            pr_merge_ratio: profile.pr_merge_ratio,
            bus_factor: profile.bus_factor,
            has_security_vulnerabilities: profile.has_security_vulnerabilities,
            documentation_metrics: profile.documentation_metrics,
            final_score: round_to(result.final_score, SCORE_DECIMALS),
            score_out_of_10: round_to(result.score_out_of_10, SCALE_DECIMALS),
            relevance_score: round_to(result.relevance_score, SCORE_DECIMALS),
            potential_score: round_to(result.potential_score, SCORE_DECIMALS),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    /// Size of the ranked batch before truncation
    pub total_ranked: usize,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    pub query: String,
    pub persona: Persona,
    pub repositories: Vec<RankedRepository>,
    pub metadata: ResponseMetadata,
}

impl SearchResponse {
    /// Keep the first `top_n` results of an already sorted list
    pub fn from_ranked(
        query: &str,
        persona: Persona,
        ranked: Vec<RankedResult>,
        top_n: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let total_ranked = ranked.len();
        Self {
            query: query.to_string(),
            persona,
            repositories: ranked
                .into_iter()
                .take(top_n)
                .map(RankedRepository::from)
                .collect(),
            metadata: ResponseMetadata {
                total_ranked,
                timestamp: now,
            },
        }
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}
