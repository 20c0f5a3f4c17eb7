//! Result presentation configuration

use serde::{Deserialize, Serialize};

/// Upper bound on `top_n`
pub const MAX_TOP_N: usize = 1000;

/// How ranked results are handed back to the user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Number of top results to include in a response
    #[serde(default = "default_top_n")]
    pub top_n: usize,

    /// Rendering format
    #[serde(default)]
    pub format: OutputFormat,
}

/// Output format enum
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON response document
    Json,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            format: OutputFormat::default(),
        }
    }
}

impl crate::validation::Validate for OutputConfig {
    fn validate(&self) -> crate::error::Result<()> {
        use crate::validation::check_above;

        check_above("output.top_n", self.top_n, 0)?;
        if self.top_n > MAX_TOP_N {
            return Err(crate::error::ConfigError::ValidationError {
                field: "output.top_n".to_string(),
                message: format!("{} results is more than the cap of {}", self.top_n, MAX_TOP_N),
            });
        }
        Ok(())
    }
}

fn default_top_n() -> usize {
    10
}
