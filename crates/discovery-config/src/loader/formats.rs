//! Deserializers for the supported file formats

use super::ConfigFormat;
use crate::{error::ConfigError, Config, Result};

/// Deserialize `content`; `origin` names the file in error messages
pub fn parse(format: ConfigFormat, content: &str, origin: Option<&str>) -> Result<Config> {
    match format {
        ConfigFormat::Toml => ::toml::from_str(content)
            .map_err(|e| ConfigError::from_toml_error(e, content, origin)),
        ConfigFormat::Yaml => serde_yaml::from_str(content)
            .map_err(|e| ConfigError::from_yaml_error(e, content, origin)),
        ConfigFormat::Json => serde_json::from_str(content)
            .map_err(|e| ConfigError::from_json_error(e, content, origin)),
    }
}
