//! Configuration type definitions
//!
//! One module per concern. Each type carries its own defaults and validation.

pub mod cold_start;
pub mod lexical;
pub mod output;
pub mod personas;

pub use cold_start::ColdStartConfig;
pub use lexical::LexicalConfig;
pub use output::{OutputConfig, OutputFormat};
pub use personas::{DimensionWeights, PersonasConfig};

use serde::{Deserialize, Serialize};

/// Main configuration struct aggregating all settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Sub-score weights for each persona
    #[serde(default)]
    pub personas: PersonasConfig,

    /// Field boosts for the per-request lexical index
    #[serde(default)]
    pub lexical: LexicalConfig,

    /// Young-repository boost settings
    #[serde(default)]
    pub cold_start: ColdStartConfig,

    /// Result presentation
    #[serde(default)]
    pub output: OutputConfig,
}

impl crate::validation::Validate for Config {
    fn validate(&self) -> crate::error::Result<()> {
        self.personas.validate()?;
        self.lexical.validate()?;
        self.cold_start.validate()?;
        self.output.validate()?;

        Ok(())
    }
}
