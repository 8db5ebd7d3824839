// Error types and user-friendly error messages
//
// Classification and contact resolution never fail. Errors only come from
// the edges: config files, keyword files, the entry store and input checks
// on mood check-ins and community posts.

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MindhavenError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("{field} value {value} is out of range")]
    InvalidMoodEntry { field: &'static str, value: u8 },

    #[error("{field} must not be empty")]
    EmptyField { field: &'static str },

    #[error("entry store error: {0}")]
    Store(String),
}

/// Format a config parse error with helpful suggestions
pub fn config_parse_error(path: &Path, error: &str) -> String {
    format!(
        "Failed to parse config file\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check config file syntax:\n\
           \x1b[36mcat {}\x1b[0m\n\n\
        2. Known keys: country, data_dir, crisis_keywords_path, debug_logging,\n\
           display_name\n\n\
        3. Move the file aside to fall back to defaults:\n\
           \x1b[36mmv {} {}.backup\x1b[0m",
        error,
        path.display(),
        path.display(),
        path.display()
    )
}

/// Format a store error with helpful suggestions
pub fn store_error(dir: &Path, error: impl std::fmt::Display) -> String {
    format!(
        "Could not access saved entries in {}\n\n\
        \x1b[1;33mError:\x1b[0m {}\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • Directory is not writable\n\
        • A journal.jsonl or mood.jsonl line was edited by hand\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Check permissions:\n\
           \x1b[36mls -la {}\x1b[0m\n\n\
        2. Point data_dir in ~/.mindhaven/config.toml at another directory",
        dir.display(),
        error,
        dir.display()
    )
}

/// Message shown when the user asks for a country the table does not know
pub fn unknown_country_message(code: &str, fallback: &str) -> String {
    format!(
        "No crisis contacts listed for '{}'; showing {} instead.\n\
        Run \x1b[36mmindhaven countries\x1b[0m to see supported codes.",
        code, fallback
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_parse_error_names_file() {
        let msg = config_parse_error(Path::new("/tmp/config.toml"), "expected `=`");
        assert!(msg.contains("/tmp/config.toml"));
        assert!(msg.contains("expected `=`"));
        assert!(msg.contains("crisis_keywords_path"));
    }

    #[test]
    fn test_invalid_mood_display() {
        let err = MindhavenError::InvalidMoodEntry {
            field: "stress",
            value: 9,
        };
        assert_eq!(err.to_string(), "stress value 9 is out of range");
    }

    #[test]
    fn test_unknown_country_message() {
        let msg = unknown_country_message("ZZ", "US");
        assert!(msg.contains("'ZZ'"));
        assert!(msg.contains("mindhaven countries"));
    }
}
