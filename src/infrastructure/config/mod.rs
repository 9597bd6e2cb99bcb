use serde::Deserialize;
use std::env;
use std::time::Duration;

use crate::infrastructure::repositories::gemini_text_repository::DEFAULT_GEMINI_BASE_URL;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    pub log_format: LogFormat,
    // Text generation provider
    pub llm_provider: LlmProvider,
    pub llm_timeout_secs: u64,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub openai_api_key: Option<String>,
    pub openai_model: String,
    pub openai_base_url: Option<String>,
    // Extension loop
    pub max_extension_attempts: u32,
    // Script cache
    pub script_cache_capacity: u64,
    pub script_cache_ttl_minutes: u64,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LlmProvider {
    Gemini,
    OpenAi,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()?,
            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "production" => Environment::Production,
                    _ => Environment::Development,
                })?,
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
            llm_provider: parse_provider(
                &env::var("LLM_PROVIDER").unwrap_or_else(|_| "gemini".to_string()),
            )?,
            llm_timeout_secs: env::var("LLM_TIMEOUT_SECS")
                .unwrap_or_else(|_| "120".to_string())
                .parse()?,
            gemini_api_key: optional_var("GEMINI_API_KEY"),
            gemini_model: env::var("GEMINI_MODEL")
                .unwrap_or_else(|_| "gemini-2.5-flash".to_string()),
            gemini_base_url: env::var("GEMINI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_GEMINI_BASE_URL.to_string()),
            openai_api_key: optional_var("OPENAI_API_KEY"),
            openai_model: env::var("OPENAI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            openai_base_url: optional_var("OPENAI_BASE_URL"),
            max_extension_attempts: env::var("MAX_EXTENSION_ATTEMPTS")
                .unwrap_or_else(|_| "3".to_string())
                .parse()?,
            script_cache_capacity: env::var("SCRIPT_CACHE_CAPACITY")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            script_cache_ttl_minutes: env::var("SCRIPT_CACHE_TTL_MINUTES")
                .unwrap_or_else(|_| "30".to_string())
                .parse()?,
        };

        Ok(config)
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }

    /// Server-side key for the configured provider, if any
    pub fn provider_api_key(&self) -> Option<String> {
        match self.llm_provider {
            LlmProvider::Gemini => self.gemini_api_key.clone(),
            LlmProvider::OpenAi => self.openai_api_key.clone(),
        }
    }

    pub fn llm_timeout(&self) -> Duration {
        Duration::from_secs(self.llm_timeout_secs)
    }

    pub fn script_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.script_cache_ttl_minutes * 60)
    }
}

/// Unset and blank variables both count as missing
fn optional_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|value| !value.trim().is_empty())
}

fn parse_provider(value: &str) -> Result<LlmProvider, String> {
    match value.trim().to_lowercase().as_str() {
        "gemini" => Ok(LlmProvider::Gemini),
        "openai" => Ok(LlmProvider::OpenAi),
        other => Err(format!(
            "Unsupported LLM_PROVIDER '{}', expected 'gemini' or 'openai'",
            other
        )),
    }
}
