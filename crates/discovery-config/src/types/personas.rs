//! Persona weight tables

use serde::{Deserialize, Serialize};

/// Weights for the five potential sub-scores
///
/// Each weight must be in [0, 1] and a set of weights should sum to 1.0.
/// The ranking engine uses them as-is and never renormalizes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DimensionWeights {
    /// Stars, forks and downloads
    pub popularity: f64,
    /// PR merge ratio and good-first-issue availability
    pub community: f64,
    /// Push recency plus commit/release activity
    pub velocity: f64,
    /// License, documentation and issue closure
    pub maturity: f64,
    /// Dependency health and bus factor
    pub risk: f64,
}

impl DimensionWeights {
    pub const fn new(popularity: f64, community: f64, velocity: f64, maturity: f64, risk: f64) -> Self {
        Self {
            popularity,
            community,
            velocity,
            maturity,
            risk,
        }
    }

    /// Named weights in dimension order
    pub fn entries(&self) -> [(&'static str, f64); 5] {
        [
            ("popularity", self.popularity),
            ("community", self.community),
            ("velocity", self.velocity),
            ("maturity", self.maturity),
            ("risk", self.risk),
        ]
    }

    pub fn sum(&self) -> f64 {
        self.entries().iter().map(|(_, w)| w).sum()
    }

    fn validate_as(&self, field: &str) -> crate::error::Result<()> {
        crate::validation::check_weight_row(field, &self.entries())
    }
}

/// Sub-score weights for every recognized persona
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonasConfig {
    /// Looking for approachable projects to contribute to
    #[serde(default = "default_contributor")]
    pub contributor: DimensionWeights,

    /// Looking for new, fast-moving projects
    #[serde(default = "default_early_adopter")]
    pub early_adopter: DimensionWeights,

    /// Looking for stable, low-risk dependencies
    #[serde(default = "default_enterprise")]
    pub enterprise: DimensionWeights,

    /// Looking for well-documented projects to learn from
    #[serde(default = "default_learner")]
    pub learner: DimensionWeights,
}

impl PersonasConfig {
    /// Persona keys as they appear in config files and env vars
    pub const NAMES: [&'static str; 4] = ["contributor", "early_adopter", "enterprise", "learner"];

    /// Look up weights by persona key
    pub fn by_name(&self, name: &str) -> Option<&DimensionWeights> {
        match name {
            "contributor" => Some(&self.contributor),
            "early_adopter" => Some(&self.early_adopter),
            "enterprise" => Some(&self.enterprise),
            "learner" => Some(&self.learner),
            _ => None,
        }
    }

    pub fn by_name_mut(&mut self, name: &str) -> Option<&mut DimensionWeights> {
        match name {
            "contributor" => Some(&mut self.contributor),
            "early_adopter" => Some(&mut self.early_adopter),
            "enterprise" => Some(&mut self.enterprise),
            "learner" => Some(&mut self.learner),
            _ => None,
        }
    }
}

impl Default for PersonasConfig {
    fn default() -> Self {
        Self {
            contributor: default_contributor(),
            early_adopter: default_early_adopter(),
            enterprise: default_enterprise(),
            learner: default_learner(),
        }
    }
}

impl crate::validation::Validate for PersonasConfig {
    fn validate(&self) -> crate::error::Result<()> {
        self.contributor.validate_as("personas.contributor")?;
        self.early_adopter.validate_as("personas.early_adopter")?;
        self.enterprise.validate_as("personas.enterprise")?;
        self.learner.validate_as("personas.learner")?;
        Ok(())
    }
}

fn default_contributor() -> DimensionWeights {
    DimensionWeights::new(0.15, 0.35, 0.25, 0.15, 0.10)
}

fn default_early_adopter() -> DimensionWeights {
    DimensionWeights::new(0.10, 0.15, 0.40, 0.20, 0.15)
}

fn default_enterprise() -> DimensionWeights {
    DimensionWeights::new(0.20, 0.10, 0.15, 0.35, 0.20)
}

fn default_learner() -> DimensionWeights {
    DimensionWeights::new(0.25, 0.35, 0.10, 0.25, 0.05)
}
