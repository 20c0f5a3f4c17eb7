//! Layered configuration loading
//!
//! Defaults, then a file, then `DISCOVERY_*` variables, then anything set in
//! code. Later layers win field by field and the result is validated once.

pub mod env;
pub mod file;
pub mod formats;
pub mod merge;

use crate::{Config, Result, Validate};
use std::path::{Path, PathBuf};

/// Config file syntax, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    /// `.yml` or `.yaml`
    Yaml,
    Json,
}

/// One layer of a [`ConfigBuilder`]
#[derive(Debug, Clone)]
pub enum ConfigSource {
    File(PathBuf),
    Environment,
    Explicit(Config),
}

impl ConfigSource {
    /// The config this layer contributes, if any
    fn resolve(self) -> Result<Option<Config>> {
        match self {
            ConfigSource::File(path) => file::load_from_file(&path).map(Some),
            ConfigSource::Environment => env::from_env(),
            ConfigSource::Explicit(config) => Ok(Some(config)),
        }
    }
}

/// Stack config layers on top of the defaults
///
/// ```no_run
/// use discovery_config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .with_file(".discovery.toml")
///     .with_env()
///     .build()?;
/// # Ok::<(), discovery_config::ConfigError>(())
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    layers: Vec<ConfigSource>,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file<P: AsRef<Path>>(self, path: P) -> Self {
        self.layer(ConfigSource::File(path.as_ref().to_path_buf()))
    }

    pub fn with_env(self) -> Self {
        self.layer(ConfigSource::Environment)
    }

    pub fn with_config(self, config: Config) -> Self {
        self.layer(ConfigSource::Explicit(config))
    }

    fn layer(mut self, source: ConfigSource) -> Self {
        self.layers.push(source);
        self
    }

    /// Resolve every layer in order, merge, then validate the result
    pub fn build(self) -> Result<Config> {
        let mut config = Config::default();
        for source in self.layers {
            if let Some(overlay) = source.resolve()? {
                config = merge::merge(config, overlay);
            }
        }
        config.validate()?;
        Ok(config)
    }
}

/// File names probed by [`Config::load`], in order
pub const DEFAULT_PATHS: [&str; 4] = [
    ".discovery.toml",
    ".discovery.yml",
    ".discovery.yaml",
    ".discovery.json",
];

impl Config {
    /// First default file in the working directory (if any) plus the
    /// environment; plain defaults otherwise
    pub fn load() -> Result<Self> {
        let builder = match file::find_default(Path::new(".")) {
            Some(path) => ConfigBuilder::new().with_file(path),
            None => ConfigBuilder::new(),
        };
        builder.with_env().build()
    }

    /// A specific file plus the environment
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigBuilder::new().with_file(path).with_env().build()
    }
}
