//! Ranking combiner
//!
//! Joins lexical relevance with the persona-weighted potential, applies the
//! cold-start boost to young repositories, sorts and normalizes to a 0-10
//! scale relative to the best result of the batch.

use chrono::{DateTime, Duration, Utc};
use discovery_config::Config;
use discovery_core::scoring::{cold_start_score, potential_score};
use discovery_core::{Persona, RankError, RankedResult, RepositoryProfile, Result};
use discovery_index::RelevanceIndex;
use tracing::{debug, trace};

/// Upper end of the normalized scale
pub const SCALE: f64 = 10.0;

pub struct RankingService {
    config: Config,
}

impl RankingService {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Rank a batch with a persona label as received from the caller
    ///
    /// The label is checked before anything else, so an unknown persona
    /// fails even for an empty batch.
    pub fn rank_with_label(
        &self,
        profiles: &[RepositoryProfile],
        query: &str,
        persona: &str,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedResult>> {
        let persona: Persona = persona.parse()?;
        self.rank(profiles, query, persona, now)
    }

    /// Score, sort and normalize `profiles` for `query`
    ///
    /// Returns every profile, best first. Equal final scores keep their
    /// input order.
    pub fn rank(
        &self,
        profiles: &[RepositoryProfile],
        query: &str,
        persona: Persona,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedResult>> {
        debug!(profiles = profiles.len(), persona = %persona, "Ranking batch");

        for profile in profiles {
            profile.validate()?;
        }

        let relevance = RelevanceIndex::build(profiles, &self.config.lexical)
            .and_then(|index| index.scores(query))
            .map_err(RankError::Index)?;

        let weights = persona.weights(&self.config.personas);
        let cold_start = &self.config.cold_start;
        let window = Duration::days(i64::from(cold_start.window_days));

        let mut ranked: Vec<RankedResult> = profiles
            .iter()
            .map(|profile| {
                let relevance_score = relevance.get(&profile.full_name).copied().unwrap_or(0.0);
                let potential = potential_score(profile, weights, now);
                let mut final_score = combine(relevance_score, potential);

                if cold_start.enabled && profile.is_younger_than(window, now) {
                    let boost = cold_start_score(profile);
                    final_score *= 1.0 + boost;
                    trace!(repo = %profile.full_name, boost, "Cold-start boost");
                }

                trace!(
                    repo = %profile.full_name,
                    relevance = relevance_score,
                    potential,
                    final_score,
                    "Scored profile"
                );

                RankedResult {
                    profile: profile.clone(),
                    relevance_score,
                    potential_score: potential,
                    final_score,
                    score_out_of_10: 0.0,
                }
            })
            .collect();

        // sort_by is stable: ties keep input order
        ranked.sort_by(|a, b| b.final_score.total_cmp(&a.final_score));
        normalize(&mut ranked);

        Ok(ranked)
    }
}

/// Final score before any cold-start boost
pub fn combine(relevance: f64, potential: f64) -> f64 {
    relevance * (1.0 + potential)
}

/// Rescale sorted results so the first one scores [`SCALE`]
///
/// A batch whose best score is 0 comes out all zeros.
pub fn normalize(ranked: &mut [RankedResult]) {
    let top_score = ranked.first().map_or(1.0, |r| r.final_score);
    for result in ranked.iter_mut() {
        result.score_out_of_10 = if top_score > 0.0 {
            result.final_score / top_score * SCALE
        } else {
            0.0
        };
    }
}
