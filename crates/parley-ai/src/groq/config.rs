//! Groq API client configuration.

use std::fmt;

use parley_core::ConfigError;

/// Environment variable holding the API credential.
pub const GROQ_API_KEY_VAR: &str = "GROQ_API_KEY";

/// Groq API client configuration.
#[derive(Clone)]
pub struct GroqConfig {
    pub api_key: String,
    pub max_tokens: u32,
    pub temperature: f64,
}

impl fmt::Debug for GroqConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GroqConfig")
            .field("api_key", &"[REDACTED]")
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl GroqConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            max_tokens: 4096,
            temperature: 0.7,
        }
    }

    /// Create config from the `GROQ_API_KEY` environment variable.
    /// A missing or empty credential is a fatal startup condition.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var(GROQ_API_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(ConfigError::MissingCredential(GROQ_API_KEY_VAR)),
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }
}
