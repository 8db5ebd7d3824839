// Configuration loader
// Loads settings from ~/.mindhaven/config.toml plus environment overrides

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use super::settings::Config;
use crate::errors::MindhavenError;

/// Environment variable overriding the configured country
pub const COUNTRY_ENV: &str = "MINDHAVEN_COUNTRY";

#[derive(Debug, Default, Deserialize)]
struct TomlConfig {
    #[serde(default)]
    country: Option<String>,
    #[serde(default)]
    data_dir: Option<PathBuf>,
    #[serde(default)]
    crisis_keywords_path: Option<PathBuf>,
    #[serde(default)]
    debug_logging: bool,
    #[serde(default)]
    display_name: Option<String>,
}

/// Path of the user config file
pub fn config_path() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(".mindhaven").join("config.toml"))
}

/// Load configuration from the user config file and environment
pub fn load_config() -> Result<Config> {
    let mut config = match config_path() {
        Ok(path) => load_config_from(&path)?,
        Err(e) => {
            tracing::debug!("Using default config: {}", e);
            Config::default()
        }
    };

    config.apply_country_override(std::env::var(COUNTRY_ENV).ok());
    Ok(config)
}

/// Load configuration from a specific file. A missing file yields defaults.
///
/// Relative `data_dir` and `crisis_keywords_path` values are resolved
/// against the directory containing the file.
pub fn load_config_from(path: &Path) -> Result<Config> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let contents = fs::read_to_string(path).map_err(|source| MindhavenError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let toml_config: TomlConfig =
        toml::from_str(&contents).map_err(|e| MindhavenError::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let base = path.parent().unwrap_or_else(|| Path::new("."));
    let resolve = |p: PathBuf| if p.is_relative() { base.join(p) } else { p };

    let mut config = Config::default();
    config.apply_country_override(toml_config.country);
    if let Some(dir) = toml_config.data_dir {
        config.data_dir = resolve(dir);
    }
    config.crisis_keywords_path = toml_config.crisis_keywords_path.map(resolve);
    config.debug_logging = toml_config.debug_logging;
    if let Some(name) = toml_config.display_name.filter(|n| !n.trim().is_empty()) {
        config.display_name = name.trim().to_string();
    }

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.country, "US");
    }

    #[test]
    fn test_relative_paths_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "country = \"AU\"\ndata_dir = \"data\"\ncrisis_keywords_path = \"/etc/phrases.json\"\n",
        )
        .unwrap();

        let config = load_config_from(&path).unwrap();
        assert_eq!(config.country, "AU");
        assert_eq!(config.data_dir, dir.path().join("data"));
        assert_eq!(
            config.crisis_keywords_path,
            Some(PathBuf::from("/etc/phrases.json"))
        );
        assert!(!config.debug_logging);
        assert_eq!(config.display_name, "You");
    }

    #[test]
    fn test_display_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "display_name = \" Robin \"\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().display_name, "Robin");

        fs::write(&path, "display_name = \"\"\n").unwrap();
        assert_eq!(load_config_from(&path).unwrap().display_name, "You");
    }
}
