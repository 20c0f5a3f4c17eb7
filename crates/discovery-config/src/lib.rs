//! Settings for the repository ranking engine
//!
//! Persona weight tables, lexical field boosts, the cold-start window and
//! output options, loaded from TOML, YAML or JSON and overlaid with
//! `DISCOVERY_*` environment variables. Everything is validated before use.
//!
//! ```no_run
//! use discovery_config::Config;
//!
//! // .discovery.{toml,yml,yaml,json} in the working directory, or defaults
//! let config = Config::load()?;
//!
//! // An explicit file
//! let config = Config::from_file("ranking.toml")?;
//!
//! let window = config.cold_start.window_days;
//! let contributor = &config.personas.contributor;
//! # Ok::<(), discovery_config::ConfigError>(())
//! ```

pub mod error;
pub mod loader;
pub mod types;
pub mod validation;

pub use error::{suggest_option, ConfigError, ErrorFormatter, Result};
pub use loader::ConfigBuilder;
pub use types::*;
pub use validation::Validate;
