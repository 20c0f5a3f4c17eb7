//! Query-independent scoring of a single profile
//!
//! Five sub-scores are computed from the profile alone (no cross-profile
//! normalization) and combined with a persona's weights into the potential
//! score.

pub mod documentation;

pub use documentation::{cold_start_score, documentation_score, is_permissive};

use crate::models::RepositoryProfile;
use chrono::{DateTime, Utc};
use discovery_config::DimensionWeights;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Divisor bringing three log10 counts of typical top repositories near [0, 1]
const POPULARITY_DIVISOR: f64 = 15.0;
/// Growth rate of the good-first-issue saturation curve
const GOOD_FIRST_ISSUE_RATE: f64 = 0.2;
/// Width of the push-recency Gaussian, in days
const RECENCY_SCALE_DAYS: f64 = 90.0;
const ACTIVITY_DIVISOR: f64 = 5.0;
const NON_PERMISSIVE_LICENSE_SCORE: f64 = 0.2;
const VULNERABLE_DEPENDENCY_HEALTH: f64 = 0.1;

/// The five potential dimensions for one profile
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub popularity: f64,
    pub community: f64,
    pub velocity: f64,
    pub maturity: f64,
    pub risk: f64,
}

impl SubScores {
    pub fn compute(profile: &RepositoryProfile, now: DateTime<Utc>) -> Self {
        Self {
            popularity: popularity(profile),
            community: community(profile),
            velocity: velocity(profile, now),
            maturity: maturity(profile),
            risk: risk(profile),
        }
    }

    /// Weighted sum; weights are used as given
    pub fn weighted(&self, weights: &DimensionWeights) -> f64 {
        weights.popularity * self.popularity
            + weights.community * self.community
            + weights.velocity * self.velocity
            + weights.maturity * self.maturity
            + weights.risk * self.risk
    }
}

/// Persona-weighted composite of the five sub-scores
pub fn potential_score(
    profile: &RepositoryProfile,
    weights: &DimensionWeights,
    now: DateTime<Utc>,
) -> f64 {
    let scores = SubScores::compute(profile, now);
    trace!(repo = %profile.full_name, ?scores, "Sub-scores");
    scores.weighted(weights)
}

fn log_count(count: u64) -> f64 {
    (1.0 + count as f64).log10()
}

pub fn popularity(profile: &RepositoryProfile) -> f64 {
    (log_count(profile.stars) + log_count(profile.forks) + log_count(profile.weekly_downloads))
        / POPULARITY_DIVISOR
}

/// 0 with no good first issues, approaching 1 as they pile up
pub fn good_first_issue_availability(count: u64) -> f64 {
    1.0 - 1.0 / (1.0 + GOOD_FIRST_ISSUE_RATE * count as f64)
}

pub fn community(profile: &RepositoryProfile) -> f64 {
    (profile.pr_merge_ratio + good_first_issue_availability(profile.good_first_issues)) / 2.0
}

/// Gaussian decay over days since the last push
pub fn recency(days_since_push: f64) -> f64 {
    (-0.5 * (days_since_push / RECENCY_SCALE_DAYS).powi(2)).exp()
}

pub fn velocity(profile: &RepositoryProfile, now: DateTime<Utc>) -> f64 {
    let days_since_push = (now - profile.pushed_at).num_milliseconds() as f64 / 86_400_000.0;
    let activity = (log_count(profile.commits_last_30_days)
        + log_count(profile.releases_last_90_days))
        / ACTIVITY_DIVISOR;
    (recency(days_since_push) + activity) / 2.0
}

pub fn license_score(license: &str) -> f64 {
    if is_permissive(license) {
        1.0
    } else {
        NON_PERMISSIVE_LICENSE_SCORE
    }
}

pub fn maturity(profile: &RepositoryProfile) -> f64 {
    let metrics = &profile.documentation_metrics;
    (license_score(&metrics.license_type)
        + documentation_score(metrics)
        + profile.issue_closure_rate)
        / 3.0
}

/// 0 for a single maintainer (or unknown), approaching 1 as commits spread out
pub fn bus_factor_score(bus_factor: u32) -> f64 {
    if bus_factor > 0 {
        1.0 - 1.0 / f64::from(bus_factor)
    } else {
        0.0
    }
}

pub fn risk(profile: &RepositoryProfile) -> f64 {
    let dependency_health = if profile.has_security_vulnerabilities {
        VULNERABLE_DEPENDENCY_HEALTH
    } else {
        1.0
    };
    (dependency_health + bus_factor_score(profile.bus_factor)) / 2.0
}
