use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use crate::llm::{gemini, ollama, GeminiClient, LlmClient, OfflineClient, OllamaClient};
use crate::prompts::{Catalog, CatalogLoader};
use crate::traits::Translate;
use crate::types::Locale;

pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Delays and counts for the scripted sequences, all in milliseconds
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Timings {
    pub mission_brief_delay_ms: u64,
    pub blank_glitch_ms: u64,
    pub blank_clear_ms: u64,
    pub bsod_ms: u64,
    pub yell_ticks: u32,
    pub yell_interval_ms: u64,
    pub flash_probability: f64,
    pub ending_delay_ms: u64,
    /// Gaps before the 2nd..5th ending lines
    pub ending_gaps_ms: Vec<u64>,
    pub ending_popup_ms: u64,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            mission_brief_delay_ms: 500,
            blank_glitch_ms: 1500,
            blank_clear_ms: 2000,
            bsod_ms: 4000,
            yell_ticks: 12,
            yell_interval_ms: 300,
            flash_probability: 0.4,
            ending_delay_ms: 1500,
            ending_gaps_ms: vec![1500, 2000, 2000, 2000],
            ending_popup_ms: 3000,
        }
    }
}

impl Timings {
    pub fn ending_delay(&self) -> Duration {
        Duration::from_millis(self.ending_delay_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    #[default]
    Gemini,
    Ollama,
    Offline,
}

/// Engine settings: JSON file first, then environment overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub locale: Locale,
    pub backend: Backend,
    pub model: Option<String>,
    pub endpoint: Option<String>,
    #[serde(skip_serializing)]
    pub api_key: Option<String>,
    pub api_key_file: PathBuf,
    pub data_dir: PathBuf,
    pub timings: Timings,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            backend: Backend::Gemini,
            model: None,
            endpoint: None,
            api_key: None,
            api_key_file: PathBuf::from("api_key.txt"),
            data_dir: PathBuf::from("data"),
            timings: Timings::default(),
        }
    }
}

impl EngineConfig {
    /// Reads `path` if it exists, then applies environment overrides
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = if path.exists() {
            log::debug!("Loading config from: {:?}", path);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {:?}", path))?;
            Self::from_json(&content)?
        } else {
            log::debug!("No config at {:?}, using defaults", path);
            Self::default()
        };
        Ok(config.with_env_overrides(|name| std::env::var(name).ok()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse config")
    }

    /// Applies `AURA_LOCALE`, `GEMINI_API_KEY`, `OLLAMA_ENDPOINT` and `OLLAMA_MODEL`
    pub fn with_env_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(code) = lookup("AURA_LOCALE") {
            match Locale::from_code(&code) {
                Some(locale) => self.locale = locale,
                None => log::warn!("Unsupported AURA_LOCALE '{}', keeping {}", code, self.locale),
            }
        }
        if let Some(key) = lookup("GEMINI_API_KEY").filter(|key| !key.trim().is_empty()) {
            self.api_key = Some(key.trim().to_string());
        }
        if let Some(endpoint) = lookup("OLLAMA_ENDPOINT") {
            self.backend = Backend::Ollama;
            self.endpoint = Some(endpoint);
        }
        if let Some(model) = lookup("OLLAMA_MODEL") {
            self.backend = Backend::Ollama;
            self.model = Some(model);
        }
        self
    }

    /// The configured key, else the first line of the key file
    pub fn resolve_api_key(&self) -> Option<String> {
        if let Some(key) = &self.api_key {
            return Some(key.clone());
        }
        let content = fs::read_to_string(&self.api_key_file).ok()?;
        let key = content.lines().next()?.trim();
        if key.is_empty() {
            None
        } else {
            log::info!("API key loaded from {:?}", self.api_key_file);
            Some(key.to_string())
        }
    }

    /// Picks the configured backend; `strings` feeds the offline placeholder
    pub fn build_client(&self, strings: Arc<dyn Translate>) -> Arc<dyn LlmClient> {
        match self.backend {
            Backend::Gemini => match self.resolve_api_key() {
                Some(key) => {
                    let base = self.endpoint.as_deref().unwrap_or(gemini::DEFAULT_BASE_URL);
                    let model = self.model.as_deref().unwrap_or(gemini::DEFAULT_MODEL);
                    log::info!("Using Gemini backend ({})", model);
                    Arc::new(GeminiClient::with_endpoint(base, model, key))
                }
                None => {
                    log::warn!("No API key configured; running with the offline placeholder");
                    Arc::new(OfflineClient::new(strings))
                }
            },
            Backend::Ollama => {
                let endpoint = self.endpoint.as_deref().unwrap_or(ollama::DEFAULT_ENDPOINT);
                let model = self.model.as_deref().unwrap_or(DEFAULT_OLLAMA_MODEL);
                log::info!("Using Ollama backend ({} at {})", model, endpoint);
                Arc::new(OllamaClient::with_endpoint(endpoint, model))
            }
            Backend::Offline => Arc::new(OfflineClient::new(strings)),
        }
    }

    /// Built-in strings with any overrides found under `data_dir`
    pub fn catalog(&self) -> Result<Catalog> {
        CatalogLoader::new(&self.data_dir).load(self.locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn builtin() -> Arc<dyn Translate> {
        Arc::new(Catalog::builtin(Locale::En))
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "locale": "ko", "timings": { "yell_ticks": 3 } }"#)
            .unwrap();
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.backend, Backend::Gemini);
        assert_eq!(config.timings.yell_ticks, 3);
        assert_eq!(config.timings.yell_interval_ms, 300);
        assert_eq!(config.timings.ending_gaps_ms, vec![1500, 2000, 2000, 2000]);
    }

    #[test]
    fn env_overrides_win() {
        let config = EngineConfig::default().with_env_overrides(env(&[
            ("AURA_LOCALE", "KO"),
            ("OLLAMA_MODEL", "qwen2.5:1b"),
        ]));
        assert_eq!(config.locale, Locale::Ko);
        assert_eq!(config.backend, Backend::Ollama);
        assert_eq!(config.model.as_deref(), Some("qwen2.5:1b"));
    }

    #[test]
    fn unknown_locale_is_ignored() {
        let config = EngineConfig::default().with_env_overrides(env(&[("AURA_LOCALE", "fr")]));
        assert_eq!(config.locale, Locale::En);
    }

    #[test]
    fn api_key_comes_from_first_line_of_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("api_key.txt");
        fs::write(&path, "  abc123  \nsecond line\n").unwrap();

        let config = EngineConfig {
            api_key_file: path,
            ..EngineConfig::default()
        };
        assert_eq!(config.resolve_api_key().as_deref(), Some("abc123"));
        assert_eq!(config.build_client(builtin()).name(), "gemini");
    }

    #[test]
    fn missing_key_falls_back_to_offline() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig {
            api_key_file: dir.path().join("missing.txt"),
            ..EngineConfig::default()
        };
        assert_eq!(config.resolve_api_key(), None);
        assert_eq!(config.build_client(builtin()).name(), "offline");
    }

    #[test]
    fn missing_config_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load(dir.path().join("aura.json")).unwrap();
        assert_eq!(config.timings, Timings::default());
    }
}
