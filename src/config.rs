use crate::i18n::Language;
use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct Config {
    // Backend
    pub api_url: String,

    /// Identity used in the per-user food and navigation endpoints.
    /// Assigned by the backend deployment; the client does not authenticate.
    pub user_id: String,

    // UI
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("AI_GLASSES_API_URL").context("AI_GLASSES_API_URL not set")?;

        let default_language = match std::env::var("AI_GLASSES_LANGUAGE") {
            Ok(code) => Language::from_code(code.trim())
                .with_context(|| format!("AI_GLASSES_LANGUAGE is invalid: '{}'", code))?,
            Err(_) => Language::default_language(),
        };

        Ok(Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            user_id: std::env::var("AI_GLASSES_USER_ID").unwrap_or_else(|_| "user123".to_string()),
            default_language,
        })
    }
}
