//! Derivation of profile signals from raw platform records
//!
//! These are the pure halves of profiling: the fetching happens elsewhere,
//! the numbers that land in [`RepositoryProfile`](crate::RepositoryProfile)
//! are computed here relative to an explicit `now`.

use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;

/// Trailing window for commit activity
pub const COMMIT_WINDOW_DAYS: i64 = 30;
/// Trailing window for releases
pub const RELEASE_WINDOW_DAYS: i64 = 90;
/// Trailing window for issue closure
pub const ISSUE_WINDOW_DAYS: i64 = 180;
/// Most recent pull requests considered for the merge ratio
pub const PR_SAMPLE_SIZE: usize = 100;
/// Share of sampled commits the bus-factor contributors must cover
pub const BUS_FACTOR_SHARE: f64 = 0.8;

#[derive(Debug, Clone)]
pub struct IssueRecord {
    pub created_at: DateTime<Utc>,
    pub closed: bool,
    /// The issues endpoint also lists pull requests
    pub is_pull_request: bool,
}

#[derive(Debug, Clone)]
pub struct PullRequestRecord {
    pub merged_at: Option<DateTime<Utc>>,
}

/// Count timestamps strictly newer than `now - window`
pub fn count_within(dates: &[DateTime<Utc>], now: DateTime<Utc>, window: Duration) -> u64 {
    let cutoff = now - window;
    dates.iter().filter(|d| **d > cutoff).count() as u64
}

pub fn commits_last_30_days(commit_dates: &[DateTime<Utc>], now: DateTime<Utc>) -> u64 {
    count_within(commit_dates, now, Duration::days(COMMIT_WINDOW_DAYS))
}

pub fn releases_last_90_days(release_dates: &[DateTime<Utc>], now: DateTime<Utc>) -> u64 {
    count_within(release_dates, now, Duration::days(RELEASE_WINDOW_DAYS))
}

/// Closed share of issues opened in the last six months
///
/// Pull requests are excluded. 0 when there are no qualifying issues.
pub fn issue_closure_rate(issues: &[IssueRecord], now: DateTime<Utc>) -> f64 {
    let cutoff = now - Duration::days(ISSUE_WINDOW_DAYS);
    let recent: Vec<&IssueRecord> = issues
        .iter()
        .filter(|i| i.created_at > cutoff && !i.is_pull_request)
        .collect();

    if recent.is_empty() {
        return 0.0;
    }
    let closed = recent.iter().filter(|i| i.closed).count();
    round2(closed as f64 / recent.len() as f64)
}

/// Merged share of the most recent pull requests (newest first)
pub fn pr_merge_ratio(pull_requests: &[PullRequestRecord]) -> f64 {
    let sample = &pull_requests[..pull_requests.len().min(PR_SAMPLE_SIZE)];
    if sample.is_empty() {
        return 0.0;
    }
    let merged = sample.iter().filter(|pr| pr.merged_at.is_some()).count();
    round2(merged as f64 / sample.len() as f64)
}

/// Smallest number of top authors covering 80% of the sampled commits
///
/// Takes one author identity per commit. 0 for an empty sample.
pub fn bus_factor<I, S>(commit_authors: I) -> u32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut per_author: HashMap<String, u64> = HashMap::new();
    let mut total = 0u64;
    for author in commit_authors {
        *per_author.entry(author.as_ref().to_string()).or_default() += 1;
        total += 1;
    }
    if total == 0 {
        return 0;
    }

    let mut counts: Vec<u64> = per_author.into_values().collect();
    counts.sort_unstable_by(|a, b| b.cmp(a));

    let threshold = total as f64 * BUS_FACTOR_SHARE;
    let mut cumulative = 0u64;
    let mut factor = 0u32;
    for count in counts {
        cumulative += count;
        factor += 1;
        if cumulative as f64 >= threshold {
            break;
        }
    }
    factor
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
