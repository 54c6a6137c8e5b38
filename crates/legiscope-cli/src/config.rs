use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

fn default_api_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_group() -> String {
    "Permanentes".to_string()
}

fn default_news_source() -> String {
    "diario_oficial".to_string()
}

/// Client configuration, stored as `config.toml` in the data directory.
///
/// Every field has a default, so a missing file is equivalent to an empty
/// one. The backend URL resolution order is: `--api-url` flag, then the
/// `LEGISCOPE_API_URL` environment variable, then this file, then the
/// default local address.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_group")]
    pub default_group: String,
    #[serde(default = "default_news_source")]
    pub news_source: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            default_group: default_group(),
            news_source: default_news_source(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::default_path()?)
    }

    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> Result<PathBuf> {
        Ok(resolve_data_dir()?.join("config.toml"))
    }

    /// Effective backend URL given an optional --api-url override.
    pub fn resolve_api_url(&self, flag: Option<&str>) -> String {
        if let Some(url) = flag {
            return url.trim_end_matches('/').to_string();
        }
        if let Ok(url) = std::env::var("LEGISCOPE_API_URL") {
            if !url.trim().is_empty() {
                return url.trim_end_matches('/').to_string();
            }
        }
        self.api_url.trim_end_matches('/').to_string()
    }
}

/// Resolve the client data directory:
/// 1. LEGISCOPE_PATH environment variable (with tilde expansion)
/// 2. XDG data directory
/// 3. ~/.legiscope fallback
pub fn resolve_data_dir() -> Result<PathBuf> {
    if let Ok(env_path) = std::env::var("LEGISCOPE_PATH") {
        if !env_path.trim().is_empty() {
            return Ok(expand_tilde(&env_path));
        }
    }

    if let Some(data_dir) = dirs::data_dir() {
        return Ok(data_dir.join("legiscope"));
    }

    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".legiscope"));
    }

    anyhow::bail!("could not determine data directory: no HOME or XDG data directory")
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(stripped);
        }
    }
    PathBuf::from(path)
}
