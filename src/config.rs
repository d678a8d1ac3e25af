use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

use docfinder::api::DEFAULT_ENDPOINT;
use docfinder::logic::search::DEFAULT_SUGGESTION_LIMIT;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_endpoint_url")]
    pub endpoint_url: String,
    #[serde(default)]
    pub vim_mode: bool,
    #[serde(default = "default_suggestion_limit")]
    pub suggestion_limit: usize,
}

fn default_endpoint_url() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_suggestion_limit() -> usize {
    DEFAULT_SUGGESTION_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint_url: default_endpoint_url(),
            vim_mode: false,
            suggestion_limit: default_suggestion_limit(),
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file deserializes to unit, not a mapping
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(text)?)
    }

    /// Load the config file, or the defaults when there is none
    pub fn load(cli_path: Option<String>) -> Result<(Self, Option<PathBuf>)> {
        let Some(path) = get_config_path(cli_path)? else {
            return Ok((Self::default(), None));
        };

        let text = std::fs::read_to_string(&path)?;
        let config = Self::from_yaml(&text)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok((config, Some(path)))
    }
}

/// Determine the config file path with fallback logic
///
/// An explicit `--config` path must exist; the default locations are optional.
pub fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/docfinder/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("docfinder").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}
