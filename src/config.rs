use dotenvy::dotenv;
use std::env;

use crate::error::GleanError;

pub const TAVILY_KEY_VAR: &str = "TAVILY_API_KEY";
pub const OPENROUTER_KEY_VAR: &str = "OPEN_ROUTER_KEY";

pub const DEFAULT_MODEL: &str = "moonshotai/kimi-k2:free";
pub const TAVILY_BASE_URL: &str = "https://api.tavily.com";
pub const OPENROUTER_BASE_URL: &str = "https://openrouter.ai/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub search_api_key: String,
    pub llm_api_key: String,
    pub search_base_url: String,
    pub llm_base_url: String,
}

impl Config {
    /// Resolves configuration from explicit keys and the environment.
    /// Explicit keys win; empty strings count as absent. Fails before any
    /// client is built when a credential is missing from both.
    pub fn resolve(
        search_key: Option<String>,
        llm_key: Option<String>,
    ) -> Result<Config, GleanError> {
        dotenv().ok(); // Load .env file if present

        let search_api_key = pick_credential(search_key, get_env(TAVILY_KEY_VAR), TAVILY_KEY_VAR)?;
        let llm_api_key =
            pick_credential(llm_key, get_env(OPENROUTER_KEY_VAR), OPENROUTER_KEY_VAR)?;

        Ok(Config {
            search_api_key,
            llm_api_key,
            search_base_url: get_env_or_default("TAVILY_BASE_URL", TAVILY_BASE_URL),
            llm_base_url: get_env_or_default("OPENROUTER_BASE_URL", OPENROUTER_BASE_URL),
        })
    }
}

fn pick_credential(
    explicit: Option<String>,
    fallback: Option<String>,
    var: &'static str,
) -> Result<String, GleanError> {
    explicit
        .filter(|v| !v.is_empty())
        .or(fallback)
        .ok_or(GleanError::MissingCredential(var))
}

fn get_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
