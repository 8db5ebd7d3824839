// Configuration structs

use anyhow::Result;
use std::path::PathBuf;

use crate::classifier::Classifier;
use crate::crisis::{CrisisDetector, DEFAULT_COUNTRY};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Country code used for crisis contacts
    pub country: String,

    /// Directory holding journal.jsonl and mood.jsonl
    pub data_dir: PathBuf,

    /// Optional JSON file replacing the built-in crisis phrases
    pub crisis_keywords_path: Option<PathBuf>,

    /// Raise log verbosity to debug
    pub debug_logging: bool,

    /// Author name on community posts that are not anonymous
    pub display_name: String,
}

/// Author name used when the config sets none
pub const DEFAULT_DISPLAY_NAME: &str = "You";

impl Default for Config {
    fn default() -> Self {
        Self {
            country: DEFAULT_COUNTRY.to_string(),
            data_dir: default_data_dir(),
            crisis_keywords_path: None,
            debug_logging: false,
            display_name: DEFAULT_DISPLAY_NAME.to_string(),
        }
    }
}

/// ~/.mindhaven, or ./.mindhaven when there is no home directory
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".mindhaven"))
        .unwrap_or_else(|| PathBuf::from(".mindhaven"))
}

impl Config {
    /// Replace the country when an override is present and non-blank
    pub fn apply_country_override(&mut self, value: Option<String>) {
        if let Some(country) = value {
            let country = country.trim();
            if !country.is_empty() {
                self.country = country.to_string();
            }
        }
    }

    /// Classifier using the configured crisis phrases
    pub fn classifier(&self) -> Result<Classifier> {
        let detector = match &self.crisis_keywords_path {
            Some(path) => CrisisDetector::load_from_file(path)?,
            None => CrisisDetector::default(),
        };
        Ok(Classifier::new(detector))
    }
}
