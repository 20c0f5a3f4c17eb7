//! Reading configuration files from disk

use super::{formats, ConfigFormat, DEFAULT_PATHS};
use crate::{error::ConfigError, Config, Result, Validate};
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

impl ConfigFormat {
    /// Pick a parser from the file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Ok(ConfigFormat::Toml),
            Some("yml" | "yaml") => Ok(ConfigFormat::Yaml),
            Some("json") => Ok(ConfigFormat::Json),
            _ => Err(ConfigError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// First default config file present in `dir`, in [`DEFAULT_PATHS`] order
pub fn find_default(dir: &Path) -> Option<PathBuf> {
    DEFAULT_PATHS
        .iter()
        .map(|name| dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Parse and validate one file
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path = path.as_ref();
    let format = ConfigFormat::from_path(path)?;

    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::IoError {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let config = formats::parse(format, &content, path.to_str())?;
    config.validate()?;

    debug!(path = %path.display(), ?format, "Loaded configuration file");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_format_from_extension() {
        let cases = [
            (".discovery.toml", ConfigFormat::Toml),
            ("ranking.yml", ConfigFormat::Yaml),
            ("ranking.yaml", ConfigFormat::Yaml),
            ("ranking.json", ConfigFormat::Json),
        ];
        for (name, expected) in cases {
            assert_eq!(ConfigFormat::from_path(Path::new(name)).unwrap(), expected);
        }
        assert!(ConfigFormat::from_path(Path::new("ranking.ini")).is_err());
        assert!(ConfigFormat::from_path(Path::new("Makefile")).is_err());
    }

    #[test]
    fn test_find_default_prefers_toml() {
        let dir = tempdir().unwrap();
        assert!(find_default(dir.path()).is_none());

        fs::write(dir.path().join(".discovery.json"), "{}").unwrap();
        assert_eq!(
            find_default(dir.path()),
            Some(dir.path().join(".discovery.json"))
        );

        fs::write(dir.path().join(".discovery.toml"), "").unwrap();
        assert_eq!(
            find_default(dir.path()),
            Some(dir.path().join(".discovery.toml"))
        );
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let dir = tempdir().unwrap();
        let err = load_from_file(dir.path().join("absent.yml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound { .. }));
    }

    #[test]
    fn test_invalid_values_fail_validation() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.yml");
        fs::write(&path, "output:\n  top_n: 0\n").unwrap();
        assert!(load_from_file(&path).is_err());
    }
}
