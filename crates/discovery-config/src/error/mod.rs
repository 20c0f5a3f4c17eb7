//! Configuration errors

pub mod format;

use std::path::PathBuf;
use thiserror::Error;

pub use format::ErrorFormatter;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Cannot tell the format of {path} (expected .toml, .yml, .yaml or .json)")]
    UnknownFormat { path: PathBuf },

    /// Syntax or type error in a config file, with the offending lines
    #[error("Failed to parse {format} configuration{location}:\n{message}\n{context}")]
    Parse {
        format: &'static str,
        location: String,
        message: String,
        context: String,
    },

    #[error("Failed to read configuration file {path}: {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A name outside a closed set, such as an unknown persona
    #[error("Invalid value '{value}' for {field}\n  Valid options: {options}\n  Hint: {hint}")]
    InvalidEnum {
        field: String,
        value: String,
        options: String,
        hint: String,
    },

    /// A persona's weights do not add up to one
    #[error("Weights of {field} sum to {actual:.3}, expected {expected}\n  Hint: {hint}")]
    InvalidWeightSum {
        field: String,
        expected: f64,
        actual: f64,
        hint: String,
    },

    #[error("{field} = {value} is outside [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field} = {value} must be greater than {min}")]
    InvalidInteger {
        field: String,
        value: usize,
        min: usize,
    },

    #[error("Cannot use environment variable {var}: {message}")]
    EnvVarError { var: String, message: String },

    #[error("Invalid {field}: {message}")]
    ValidationError { field: String, message: String },
}

impl ConfigError {
    /// Unknown name in a closed set, with a "did you mean" hint when one is
    /// close enough
    pub fn invalid_enum(
        field: impl Into<String>,
        value: impl Into<String>,
        options: &[&str],
    ) -> Self {
        let value = value.into();
        let hint = suggest_option(&value, options)
            .map(|opt| format!("Did you mean '{}'?", opt))
            .unwrap_or_else(|| format!("Use one of: {}", options.join(", ")));
        Self::InvalidEnum {
            field: field.into(),
            value,
            options: options.join(", "),
            hint,
        }
    }

    pub fn from_yaml_error(err: serde_yaml::Error, content: &str, path: Option<&str>) -> Self {
        let line = err.location().map(|loc| loc.line());
        Self::parse_error("YAML", err.to_string(), content, path, line, None)
    }

    pub fn from_toml_error(err: toml::de::Error, content: &str, path: Option<&str>) -> Self {
        // toml reports a byte span; count newlines before it for the line
        let line = err.span().map(|span| {
            content[..span.start.min(content.len())].matches('\n').count() + 1
        });
        Self::parse_error("TOML", err.message().to_string(), content, path, line, None)
    }

    pub fn from_json_error(err: serde_json::Error, content: &str, path: Option<&str>) -> Self {
        let (line, column) = (err.line(), err.column());
        Self::parse_error("JSON", err.to_string(), content, path, Some(line), Some(column))
    }

    fn parse_error(
        format: &'static str,
        message: String,
        content: &str,
        path: Option<&str>,
        line: Option<usize>,
        column: Option<usize>,
    ) -> Self {
        let mut location = path.map(|p| format!(" in {}", p)).unwrap_or_default();
        if let Some(line) = line.filter(|l| *l > 0) {
            location.push_str(&format!(" at line {}", line));
        }
        let context = line
            .map(|line| line_context(content, line, column))
            .unwrap_or_default();
        Self::Parse {
            format,
            location,
            message,
            context,
        }
    }
}

/// Closest option to a mistyped value, if within three edits
pub fn suggest_option<'a>(input: &str, options: &[&'a str]) -> Option<&'a str> {
    let needle = input.to_lowercase();
    options
        .iter()
        .map(|opt| (*opt, edit_distance(&needle, &opt.to_lowercase())))
        .filter(|(_, d)| *d <= 3)
        .min_by_key(|(_, d)| *d)
        .map(|(opt, _)| opt)
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let target: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=target.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in target.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[target.len()]
}

/// The failing line (1-based) with one line either side, the failing one
/// marked with an arrow and, when known, a caret under the column
fn line_context(content: &str, line_num: usize, column: Option<usize>) -> String {
    let lines: Vec<&str> = content.lines().collect();
    if line_num == 0 || line_num > lines.len() {
        return String::new();
    }

    let first = line_num.saturating_sub(1).max(1);
    let last = (line_num + 1).min(lines.len());

    let mut out = Vec::new();
    for num in first..=last {
        let text = lines[num - 1];
        if num == line_num {
            out.push(format!("→ {:3} | {}", num, text));
            if let Some(col) = column.filter(|c| *c > 0) {
                out.push(format!("        {}^", " ".repeat(col - 1)));
            }
        } else {
            out.push(format!("  {:3} | {}", num, text));
        }
    }
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSONAS: [&str; 4] = ["contributor", "early_adopter", "enterprise", "learner"];

    #[test]
    fn test_suggest_close_match() {
        assert_eq!(suggest_option("lerner", &PERSONAS), Some("learner"));
        assert_eq!(suggest_option("Enterprize", &PERSONAS), Some("enterprise"));
        assert_eq!(suggest_option("early-adopter", &PERSONAS), Some("early_adopter"));
    }

    #[test]
    fn test_suggest_nothing_close() {
        assert_eq!(suggest_option("administrator", &PERSONAS), None);
    }

    #[test]
    fn test_edit_distance() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("same", "same"), 0);
    }

    #[test]
    fn test_invalid_enum_hint() {
        let msg = ConfigError::invalid_enum("output.format", "jsn", &["table", "json"]).to_string();
        assert!(msg.contains("Did you mean 'json'?"));
        assert!(msg.contains("table, json"));

        let msg = ConfigError::invalid_enum("output.format", "spreadsheet", &["table", "json"])
            .to_string();
        assert!(msg.contains("Use one of: table, json"));
    }

    #[test]
    fn test_line_context_marks_line() {
        let ctx = line_context("a\nb\nc\nd", 3, None);
        assert_eq!(ctx, "    2 | b\n→   3 | c\n    4 | d");
    }

    #[test]
    fn test_line_context_caret() {
        let ctx = line_context("{\n  \"x\": ?\n}", 2, Some(8));
        assert!(ctx.contains("→   2 |   \"x\": ?"));
        assert!(ctx.contains("\n               ^"));
    }

    #[test]
    fn test_line_context_out_of_bounds() {
        assert!(line_context("a", 5, None).is_empty());
        assert!(line_context("a", 0, None).is_empty());
    }
}
