//! Bridge configuration.
//!
//! Values come from an optional TOML file and are then overridden by
//! command-line flags (which clap also fills from the environment).

use std::error::Error;
use std::fs;
use std::path::Path;

use serde::Deserialize;

pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";
pub const DEFAULT_LLM_URL: &str = "http://localhost:1234/v1";
pub const DEFAULT_MODEL: &str = "qwen-coder";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Base URL of the analysis backend.
    pub backend_url: String,
    /// Base URL of the OpenAI-compatible chat completions server.
    pub llm_url: String,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            llm_url: DEFAULT_LLM_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Read a config file. Keys missing from the file keep their defaults.
    pub fn load(path: &Path) -> Result<Self, Box<dyn Error>> {
        let text = fs::read_to_string(path)
            .map_err(|e| format!("cannot read config '{}': {e}", path.display()))?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| format!("invalid config '{}': {e}", path.display()))?;
        Ok(config)
    }

    /// Defaults, or the file's values when `path` is given.
    pub fn from_file(path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    pub fn with_backend_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.backend_url = url.to_string();
        }
        self
    }

    pub fn with_llm(mut self, llm_url: Option<&str>, model: Option<&str>) -> Self {
        if let Some(url) = llm_url {
            self.llm_url = url.to_string();
        }
        if let Some(model) = model {
            self.model = model.to_string();
        }
        self
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
