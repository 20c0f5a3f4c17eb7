//! Lexical index field boosts

use serde::{Deserialize, Serialize};

/// Per-field boosts for the relevance index
///
/// Name and topic matches should outweigh incidental readme mentions, so the
/// defaults bias heavily toward them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LexicalConfig {
    /// Boost for the repository name
    #[serde(default = "default_name_boost")]
    pub name_boost: f32,

    /// Boost for topics (joined with spaces)
    #[serde(default = "default_topics_boost")]
    pub topics_boost: f32,

    /// Boost for the description
    #[serde(default = "default_field_boost")]
    pub description_boost: f32,

    /// Boost for the readme body
    #[serde(default = "default_field_boost")]
    pub readme_boost: f32,
}

impl Default for LexicalConfig {
    fn default() -> Self {
        Self {
            name_boost: default_name_boost(),
            topics_boost: default_topics_boost(),
            description_boost: default_field_boost(),
            readme_boost: default_field_boost(),
        }
    }
}

impl crate::validation::Validate for LexicalConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::check_boost;

        check_boost("lexical.name_boost", self.name_boost)?;
        check_boost("lexical.topics_boost", self.topics_boost)?;
        check_boost("lexical.description_boost", self.description_boost)?;
        check_boost("lexical.readme_boost", self.readme_boost)
    }
}

fn default_name_boost() -> f32 {
    10.0
}

fn default_topics_boost() -> f32 {
    5.0
}

fn default_field_boost() -> f32 {
    1.0
}
