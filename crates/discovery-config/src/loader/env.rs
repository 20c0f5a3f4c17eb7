//! Environment variable configuration overlay
//!
//! Variables take the form `DISCOVERY_<section>_<field>=value`:
//! - `DISCOVERY_PERSONAS_ENTERPRISE_RISK=0.25` with
//!   `DISCOVERY_PERSONAS_ENTERPRISE_MATURITY=0.30` (a persona row must still
//!   sum to 1, so weights move in pairs)
//! - `DISCOVERY_LEXICAL_NAME_BOOST=8`
//! - `DISCOVERY_COLD_START_WINDOW_DAYS=30`
//! - `DISCOVERY_OUTPUT_FORMAT=json`

use crate::{error::ConfigError, types::*, Config, Result};
use std::env;
use tracing::warn;

pub const ENV_PREFIX: &str = "DISCOVERY_";

const SECTIONS: [&str; 4] = ["personas", "lexical", "cold_start", "output"];

/// Parse configuration from environment variables
///
/// Returns `None` when no `DISCOVERY_` variable is set. Variables that fail
/// to parse are logged and skipped.
pub fn from_env() -> Result<Option<Config>> {
    let env_vars: Vec<(String, String)> = env::vars()
        .filter(|(k, _)| k.starts_with(ENV_PREFIX))
        .collect();

    if env_vars.is_empty() {
        return Ok(None);
    }

    let mut config = Config::default();
    for (key, value) in env_vars {
        if let Err(e) = apply_env_var(&mut config, &key, &value) {
            warn!("ignoring {}: {}", key, e);
        }
    }

    Ok(Some(config))
}

/// Apply a single environment variable to config
fn apply_env_var(config: &mut Config, key: &str, value: &str) -> Result<()> {
    let key = key.strip_prefix(ENV_PREFIX).unwrap_or(key).to_lowercase();

    // Section names contain underscores, so match on known prefixes
    let (section, field) = SECTIONS
        .iter()
        .find_map(|s| {
            key.strip_prefix(s)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|field| (*s, field))
        })
        .ok_or_else(|| ConfigError::EnvVarError {
            var: format!("{}{}", ENV_PREFIX, key.to_uppercase()),
            message: format!(
                "Expected {}<section>_<field> with section one of: {}",
                ENV_PREFIX,
                SECTIONS.join(", ")
            ),
        })?;

    match section {
        "personas" => apply_personas_var(&mut config.personas, field, value),
        "lexical" => apply_lexical_var(&mut config.lexical, field, value),
        "cold_start" => apply_cold_start_var(&mut config.cold_start, field, value),
        "output" => apply_output_var(&mut config.output, field, value),
        _ => Err(ConfigError::invalid_enum("section", section, &SECTIONS)),
    }
}

fn apply_personas_var(config: &mut PersonasConfig, field: &str, value: &str) -> Result<()> {
    let var = format!("{}PERSONAS_{}", ENV_PREFIX, field.to_uppercase());

    let (persona, dimension) = PersonasConfig::NAMES
        .iter()
        .find_map(|p| {
            field
                .strip_prefix(p)
                .and_then(|rest| rest.strip_prefix('_'))
                .map(|dim| (*p, dim))
        })
        .ok_or_else(|| {
            let guess = field.rsplit_once('_').map(|(p, _)| p).unwrap_or(field);
            ConfigError::invalid_enum("personas", guess, &PersonasConfig::NAMES)
        })?;

    let weight: f64 = value.parse().map_err(|_| ConfigError::EnvVarError {
        var: var.clone(),
        message: format!("Invalid float: {}", value),
    })?;

    let weights = config
        .by_name_mut(persona)
        .ok_or_else(|| ConfigError::invalid_enum("personas", persona, &PersonasConfig::NAMES))?;

    match dimension {
        "popularity" => weights.popularity = weight,
        "community" => weights.community = weight,
        "velocity" => weights.velocity = weight,
        "maturity" => weights.maturity = weight,
        "risk" => weights.risk = weight,
        _ => {
            return Err(ConfigError::invalid_enum(
                format!("personas.{}", persona),
                dimension,
                &["popularity", "community", "velocity", "maturity", "risk"],
            ))
        }
    }
    Ok(())
}

fn apply_lexical_var(config: &mut LexicalConfig, field: &str, value: &str) -> Result<()> {
    let parse_float = |v: &str| -> Result<f32> {
        v.parse().map_err(|_| ConfigError::EnvVarError {
            var: format!("{}LEXICAL_{}", ENV_PREFIX, field.to_uppercase()),
            message: format!("Invalid float: {}", v),
        })
    };

    match field {
        "name_boost" => config.name_boost = parse_float(value)?,
        "topics_boost" => config.topics_boost = parse_float(value)?,
        "description_boost" => config.description_boost = parse_float(value)?,
        "readme_boost" => config.readme_boost = parse_float(value)?,
        _ => {
            return Err(ConfigError::EnvVarError {
                var: format!("{}LEXICAL_{}", ENV_PREFIX, field.to_uppercase()),
                message: format!("Unknown field: {}", field),
            })
        }
    }
    Ok(())
}

fn apply_cold_start_var(config: &mut ColdStartConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "enabled" => config.enabled = parse_bool(value)?,
        "window_days" => {
            config.window_days = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: format!("{}COLD_START_WINDOW_DAYS", ENV_PREFIX),
                message: format!("Invalid integer: {}", value),
            })?;
        }
        _ => {
            return Err(ConfigError::EnvVarError {
                var: format!("{}COLD_START_{}", ENV_PREFIX, field.to_uppercase()),
                message: format!("Unknown field: {}", field),
            })
        }
    }
    Ok(())
}

fn apply_output_var(config: &mut OutputConfig, field: &str, value: &str) -> Result<()> {
    match field {
        "top_n" => {
            config.top_n = value.parse().map_err(|_| ConfigError::EnvVarError {
                var: format!("{}OUTPUT_TOP_N", ENV_PREFIX),
                message: format!("Invalid integer: {}", value),
            })?;
        }
        "format" => {
            config.format = match value.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::invalid_enum(
                        "output.format",
                        value,
                        &["table", "json"],
                    ))
                }
            };
        }
        _ => {
            return Err(ConfigError::EnvVarError {
                var: format!("{}OUTPUT_{}", ENV_PREFIX, field.to_uppercase()),
                message: format!("Unknown field: {}", field),
            })
        }
    }
    Ok(())
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::EnvVarError {
            var: value.to_string(),
            message: format!(
                "Invalid boolean: {} (use true/false, 1/0, yes/no, on/off)",
                value
            ),
        }),
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::sync::Mutex;

    // Serializes every test in this crate that touches DISCOVERY_ vars
    pub(crate) static ENV_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn cleanup_discovery_env_vars() {
        let keys: Vec<String> = env::vars()
            .filter(|(k, _)| k.starts_with(ENV_PREFIX))
            .map(|(k, _)| k)
            .collect();
        for key in keys {
            env::remove_var(&key);
        }
    }

    #[test]
    fn test_persona_weight_env() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_discovery_env_vars();
        env::set_var("DISCOVERY_PERSONAS_EARLY_ADOPTER_VELOCITY", "0.35");
        let config = from_env().unwrap().unwrap();
        assert_eq!(config.personas.early_adopter.velocity, 0.35);
        cleanup_discovery_env_vars();
    }

    #[test]
    fn test_persona_weights_rebalanced_in_pairs() {
        use crate::Validate;

        let mut config = Config::default();
        apply_env_var(&mut config, "DISCOVERY_PERSONAS_ENTERPRISE_RISK", "0.25").unwrap();
        assert!(config.validate().is_err());

        apply_env_var(&mut config, "DISCOVERY_PERSONAS_ENTERPRISE_MATURITY", "0.30").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.personas.enterprise.risk, 0.25);
    }

    #[test]
    fn test_cold_start_window_env() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_discovery_env_vars();
        env::set_var("DISCOVERY_COLD_START_WINDOW_DAYS", "30");
        let config = from_env().unwrap().unwrap();
        assert_eq!(config.cold_start.window_days, 30);
        cleanup_discovery_env_vars();
    }

    #[test]
    fn test_bad_value_is_skipped() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_discovery_env_vars();
        env::set_var("DISCOVERY_OUTPUT_TOP_N", "lots");
        let config = from_env().unwrap().unwrap();
        assert_eq!(config.output.top_n, OutputConfig::default().top_n);
        cleanup_discovery_env_vars();
    }

    #[test]
    fn test_no_env_vars() {
        let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        cleanup_discovery_env_vars();
        assert!(from_env().unwrap().is_none());
    }

    #[test]
    fn test_unknown_persona_suggests() {
        let mut config = Config::default();
        let err = apply_env_var(&mut config, "DISCOVERY_PERSONAS_LERNER_RISK", "0.1").unwrap_err();
        assert!(err.to_string().contains("Did you mean 'learner'?"));
    }

    #[test]
    fn test_unknown_section() {
        let mut config = Config::default();
        assert!(apply_env_var(&mut config, "DISCOVERY_CACHE_TTL", "10").is_err());
    }

    #[test]
    fn test_output_format_env() {
        let mut config = Config::default();
        apply_env_var(&mut config, "DISCOVERY_OUTPUT_FORMAT", "JSON").unwrap();
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_bool_parsing() {
        assert!(parse_bool("true").unwrap());
        assert!(parse_bool("1").unwrap());
        assert!(parse_bool("yes").unwrap());
        assert!(!parse_bool("false").unwrap());
        assert!(!parse_bool("0").unwrap());
        assert!(parse_bool("invalid").is_err());
    }
}
