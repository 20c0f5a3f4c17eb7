//! User personas and their weight lookup

use crate::error::RankError;
use discovery_config::{suggest_option, DimensionWeights, PersonasConfig};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Who the search is for; selects the sub-score weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Persona {
    Contributor,
    EarlyAdopter,
    Enterprise,
    Learner,
}

impl Persona {
    pub const ALL: [Persona; 4] = [
        Persona::Contributor,
        Persona::EarlyAdopter,
        Persona::Enterprise,
        Persona::Learner,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Persona::Contributor => "contributor",
            Persona::EarlyAdopter => "early_adopter",
            Persona::Enterprise => "enterprise",
            Persona::Learner => "learner",
        }
    }

    /// This persona's row of the weight table
    pub fn weights<'a>(&self, personas: &'a PersonasConfig) -> &'a DimensionWeights {
        match self {
            Persona::Contributor => &personas.contributor,
            Persona::EarlyAdopter => &personas.early_adopter,
            Persona::Enterprise => &personas.enterprise,
            Persona::Learner => &personas.learner,
        }
    }

    /// Deterministic stand-in when query classification is unavailable
    ///
    /// Beginner-sounding queries map to `Learner`, everything else to
    /// `Contributor`.
    pub fn fallback_for_query(query: &str) -> Self {
        let lowered = query.to_lowercase();
        if ["newbie", "beginner", "learn"]
            .iter()
            .any(|needle| lowered.contains(needle))
        {
            Persona::Learner
        } else {
            Persona::Contributor
        }
    }
}

impl fmt::Display for Persona {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Persona {
    type Err = RankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        Persona::ALL
            .into_iter()
            .find(|p| p.as_str() == key)
            .ok_or_else(|| {
                let hint = match suggest_option(&key, &PersonasConfig::NAMES) {
                    Some(opt) => format!("Did you mean '{}'?", opt),
                    None => "Pick one of the recognized personas".to_string(),
                };
                RankError::InvalidPersona {
                    persona: s.to_string(),
                    hint,
                }
            })
    }
}

/// Query words worth sending to a repository search
///
/// Mirrors what the classifier falls back to: whitespace tokens longer than
/// three characters.
pub fn search_terms(query: &str) -> Vec<String> {
    query
        .split_whitespace()
        .filter(|w| w.chars().count() > 3)
        .map(str::to_string)
        .collect()
}
