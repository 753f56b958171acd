use crate::error::{ExtractoError, Result};

pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Advisor configuration, read from the environment. File paths are CLI
/// arguments and never appear here.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_key: String,
    pub model: String,
}

impl Settings {
    /// Loads `.env` if present, then reads `OPENAI_API_KEY` (required) and
    /// `EXTRACTO_MODEL` (optional).
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|v| !v.is_empty())
            .ok_or(ExtractoError::MissingApiKey)?;
        let model =
            std::env::var("EXTRACTO_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        Ok(Self { api_key, model })
    }
}
