//! Cold-start boost configuration

use serde::{Deserialize, Serialize};

/// Longest accepted window, about a century
pub const MAX_WINDOW_DAYS: u32 = 36_500;

/// Settings for boosting young repositories
///
/// Repositories created within `window_days` of the ranking time get their
/// final score multiplied by `1 + documentation quality`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColdStartConfig {
    /// Apply the boost at all
    #[serde(default = "default_enabled")]
    pub enabled: bool,

    /// Age threshold in days
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl Default for ColdStartConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            window_days: default_window_days(),
        }
    }
}

impl crate::validation::Validate for ColdStartConfig {
    fn validate(&self) -> crate::error::Result<()> {
        crate::validation::check_above("cold_start.window_days", self.window_days as usize, 0)?;
        if self.window_days > MAX_WINDOW_DAYS {
            return Err(crate::error::ConfigError::ValidationError {
                field: "cold_start.window_days".to_string(),
                message: format!(
                    "{} days is more than the cap of {}",
                    self.window_days, MAX_WINDOW_DAYS
                ),
            });
        }
        Ok(())
    }
}

fn default_enabled() -> bool {
    true
}

fn default_window_days() -> u32 {
    60
}
