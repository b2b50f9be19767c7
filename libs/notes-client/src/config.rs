use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Client settings: where the API and the summarizer live and where the
/// session is kept between invocations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub summarizer_url: String,
    /// Empty means `~/.notes/session.json`.
    pub session_file: String,
    pub timeout_sec: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://127.0.0.1:8000".to_string(),
            summarizer_url: "http://localhost:5000/summarize".to_string(),
            session_file: String::new(),
            timeout_sec: 30,
        }
    }
}

const DEFAULT_SUBDIR: &str = ".notes";
const SESSION_FILE: &str = "session.json";

impl ClientConfig {
    /// Defaults → optional YAML file → environment (`NOTES__API_BASE_URL=...`).
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        use figment::{
            providers::{Env, Format, Serialized, Yaml},
            Figment,
        };

        let mut figment = Figment::new().merge(Serialized::defaults(ClientConfig::default()));
        if let Some(path) = config_path {
            if !path.is_file() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            figment = figment.merge(Yaml::file(path));
        }

        figment
            .merge(Env::prefixed("NOTES__").split("__"))
            .extract()
            .context("Failed to extract client config")
    }

    pub fn session_path(&self) -> Result<PathBuf> {
        let raw = self.session_file.trim();
        if raw.is_empty() {
            let home = runtime::paths::resolve_home_dir(None, DEFAULT_SUBDIR, false)?;
            return Ok(home.join(SESSION_FILE));
        }
        runtime::paths::expand_tilde(raw)
    }

    pub fn timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.timeout_sec)
    }
}
