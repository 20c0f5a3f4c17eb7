//! Errors surfaced by the ranking engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RankError>;

#[derive(Debug, Error)]
pub enum RankError {
    /// Persona label outside the recognized set
    #[error("Invalid persona: '{persona}'\n  Valid options: contributor, early_adopter, enterprise, learner\n  Hint: {hint}")]
    InvalidPersona { persona: String, hint: String },

    /// A profile field outside the domain the scorer accepts
    #[error("Malformed profile {full_name}: {field} = {value} (expected a ratio in [0, 1])")]
    MalformedProfile {
        full_name: String,
        field: &'static str,
        value: f64,
    },

    /// The per-request lexical index failed
    #[error("Lexical index failure: {0}")]
    Index(#[source] anyhow::Error),
}
