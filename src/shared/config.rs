//! Application configuration. API credentials, model, paths.

use crate::domain::{DomainError, LlmSettings};
use serde::Deserialize;

/// Sampling temperature for every call. Fixed: maximal diversity.
pub const TEMPERATURE: f32 = 1.0;

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
pub const DEFAULT_API_URL: &str = "https://api.openai.com/v1/chat/completions";
pub const DEFAULT_ARTICLES_DIR: &str = "./data/articles";
pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_OUTPUT_DIR: &str = "./output";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct AppConfig {
    /// LLM API key. Read from NEWSTRAIL_AI_API_KEY, the config file, or OPENAI_API_KEY.
    #[serde(default)]
    pub ai_api_key: Option<String>,

    /// Chat completions endpoint. Read from NEWSTRAIL_AI_API_URL.
    #[serde(default)]
    pub ai_api_url: Option<String>,

    /// Model name. Read from NEWSTRAIL_AI_MODEL.
    #[serde(default)]
    pub ai_model: Option<String>,

    /// Folder scanned for `*.txt` articles. Read from NEWSTRAIL_ARTICLES_DIR.
    #[serde(default)]
    pub articles_dir: Option<String>,

    /// Where the intermediate analysis is written. Read from NEWSTRAIL_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Where the composite article is written. Read from NEWSTRAIL_OUTPUT_DIR.
    #[serde(default)]
    pub output_dir: Option<String>,
}

impl AppConfig {
    /// Load `.env`, an optional file named by NEWSTRAIL_CONFIG, then NEWSTRAIL_* env vars.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var("NEWSTRAIL_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix("NEWSTRAIL"));
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // OPENAI_API_KEY is read directly (no prefix) so an existing .env works unchanged
        if cfg.ai_api_key.as_deref().is_none_or(|k| k.trim().is_empty()) {
            cfg.ai_api_key = std::env::var("OPENAI_API_KEY").ok();
        }
        Ok(cfg)
    }

    /// Returns the API key, or a configuration error when it is missing or blank.
    pub fn api_key(&self) -> Result<&str, DomainError> {
        self.ai_api_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                DomainError::Configuration(
                    "OPENAI_API_KEY is not set in the environment variables or .env file"
                        .to_string(),
                )
            })
    }

    pub fn ai_api_url_or_default(&self) -> String {
        self.ai_api_url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    pub fn ai_model_or_default(&self) -> String {
        self.ai_model
            .clone()
            .unwrap_or_else(|| DEFAULT_MODEL.to_string())
    }

    pub fn articles_dir_or_default(&self) -> String {
        self.articles_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_ARTICLES_DIR.to_string())
    }

    pub fn data_dir_or_default(&self) -> String {
        self.data_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_DATA_DIR.to_string())
    }

    pub fn output_dir_or_default(&self) -> String {
        self.output_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_OUTPUT_DIR.to_string())
    }

    /// Model settings handed to the LLM client. Temperature is always [`TEMPERATURE`].
    pub fn llm_settings(&self) -> LlmSettings {
        LlmSettings {
            model: self.ai_model_or_default(),
            temperature: TEMPERATURE,
        }
    }
}
