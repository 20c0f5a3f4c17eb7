//! Terminal rendering of configuration errors
//!
//! Every error becomes a headline plus labelled detail lines. Colors are used
//! only when stderr is a terminal and `NO_COLOR` is unset.

use crate::error::ConfigError;
use crate::loader::DEFAULT_PATHS;
use std::fmt;
use yansi::{Paint, Style};

const MARK: Style = Style::new().red().bold();
const FIELD: Style = Style::new().cyan();
const BAD: Style = Style::new().yellow();
const GOOD: Style = Style::new().green();
const LABEL: Style = Style::new().bold();

pub struct ErrorFormatter {
    error: ConfigError,
    use_colors: bool,
}

impl ErrorFormatter {
    pub fn new(error: ConfigError) -> Self {
        Self {
            error,
            use_colors: supports_color(),
        }
    }

    /// Force colors on or off regardless of the terminal
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    pub fn error(&self) -> &ConfigError {
        &self.error
    }

    pub fn format(&self) -> String {
        let mut out = format!("{} {}", self.paint("✗", MARK), self.headline());
        for (label, value) in self.details() {
            out.push_str(&format!("\n  {}: {}", self.paint(label, LABEL), value));
        }
        if let Some(context) = self.parse_context() {
            for line in context.lines() {
                out.push('\n');
                if line.starts_with('→') || line.trim_start().starts_with('^') {
                    out.push_str(&self.paint(line, MARK));
                } else {
                    out.push_str(line);
                }
            }
        }
        out
    }

    fn headline(&self) -> String {
        match &self.error {
            ConfigError::FileNotFound { path } => format!(
                "Configuration file not found: {}",
                self.paint(path.display(), BAD)
            ),
            ConfigError::UnknownFormat { path } => format!(
                "Cannot tell the format of {}",
                self.paint(path.display(), BAD)
            ),
            ConfigError::Parse {
                format, location, ..
            } => format!("Failed to parse {} configuration{}", format, location),
            ConfigError::IoError { path, .. } => format!(
                "Failed to read configuration file: {}",
                self.paint(path.display(), BAD)
            ),
            ConfigError::InvalidEnum { field, value, .. } => format!(
                "Invalid value {} for {}",
                self.paint(format!("'{}'", value), BAD),
                self.paint(field, FIELD)
            ),
            ConfigError::InvalidWeightSum { field, .. } => {
                format!("Weights of {} do not sum to one", self.paint(field, FIELD))
            }
            ConfigError::OutOfRange { field, value, .. } => format!(
                "{} is out of range: {}",
                self.paint(field, FIELD),
                self.paint(value, BAD)
            ),
            ConfigError::InvalidInteger { field, value, .. } => format!(
                "{} is too small: {}",
                self.paint(field, FIELD),
                self.paint(value, BAD)
            ),
            ConfigError::EnvVarError { var, .. } => {
                format!("Cannot use environment variable {}", self.paint(var, FIELD))
            }
            ConfigError::ValidationError { field, message } => {
                format!("{}: {}", self.paint(field, FIELD), message)
            }
        }
    }

    fn details(&self) -> Vec<(&'static str, String)> {
        match &self.error {
            ConfigError::FileNotFound { .. } => vec![(
                "Hint",
                format!(
                    "Omit --config to pick up {} from the working directory",
                    DEFAULT_PATHS.join(", ")
                ),
            )],
            ConfigError::UnknownFormat { .. } => {
                vec![("Supported", ".toml, .yml, .yaml, .json".to_string())]
            }
            ConfigError::Parse { message, .. } => vec![("Reason", message.clone())],
            ConfigError::IoError { source, .. } => vec![("Reason", source.to_string())],
            ConfigError::InvalidEnum { options, hint, .. } => vec![
                ("Valid options", options.clone()),
                ("Hint", self.paint(hint, GOOD)),
            ],
            ConfigError::InvalidWeightSum {
                expected,
                actual,
                hint,
                ..
            } => vec![
                ("Expected sum", self.paint(expected, GOOD)),
                ("Actual sum", self.paint(format!("{:.3}", actual), BAD)),
                ("Hint", hint.clone()),
            ],
            ConfigError::OutOfRange { min, max, .. } => {
                vec![("Allowed", self.paint(format!("{} to {}", min, max), GOOD))]
            }
            ConfigError::InvalidInteger { min, .. } => {
                vec![("Allowed", self.paint(format!("greater than {}", min), GOOD))]
            }
            ConfigError::EnvVarError { message, .. } => vec![("Reason", message.clone())],
            ConfigError::ValidationError { .. } => Vec::new(),
        }
    }

    fn parse_context(&self) -> Option<&str> {
        match &self.error {
            ConfigError::Parse { context, .. } if !context.is_empty() => Some(context.as_str()),
            _ => None,
        }
    }

    fn paint(&self, text: impl fmt::Display, style: Style) -> String {
        if self.use_colors {
            text.paint(style).to_string()
        } else {
            text.to_string()
        }
    }
}

fn supports_color() -> bool {
    std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stderr)
}

impl fmt::Display for ErrorFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn plain(error: ConfigError) -> String {
        ErrorFormatter::new(error).with_colors(false).format()
    }

    #[test]
    fn test_invalid_enum_lists_options_and_hint() {
        let output = plain(ConfigError::invalid_enum(
            "output.format",
            "tabel",
            &["table", "json"],
        ));
        assert!(output.starts_with("✗ Invalid value 'tabel' for output.format"));
        assert!(output.contains("Valid options: table, json"));
        assert!(output.contains("Hint: Did you mean 'table'?"));
    }

    #[test]
    fn test_missing_file_points_at_default_lookup() {
        let output = plain(ConfigError::FileNotFound {
            path: PathBuf::from("nope.toml"),
        });
        assert!(output.contains("nope.toml"));
        assert!(output.contains(".discovery.toml"));
    }

    #[test]
    fn test_parse_error_includes_context() {
        let error = ConfigError::Parse {
            format: "TOML",
            location: " in bad.toml".to_string(),
            message: "expected a value".to_string(),
            context: "    1 | [output]\n→   2 | top_n = =".to_string(),
        };
        let output = plain(error);
        assert!(output.contains("Failed to parse TOML configuration in bad.toml"));
        assert!(output.contains("Reason: expected a value"));
        assert!(output.ends_with("→   2 | top_n = ="));
    }

    #[test]
    fn test_colors_keep_the_text() {
        let error = ConfigError::InvalidWeightSum {
            field: "personas.learner".to_string(),
            expected: 1.0,
            actual: 0.8,
            hint: "Adjust".to_string(),
        };
        let output = ErrorFormatter::new(error).with_colors(true).format();
        assert!(output.contains("personas.learner"));
        assert!(output.contains("0.800"));
        assert!(output.contains('\u{1b}'));
    }
}
