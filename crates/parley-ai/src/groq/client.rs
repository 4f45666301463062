//! Groq API client struct, request building, and response parsing.

use parley_core::ProviderError;

use crate::{Completion, ModelId, TokenUsage};

use super::config::GroqConfig;

pub(crate) const GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Groq API client.
pub struct GroqClient {
    pub(crate) config: GroqConfig,
    pub(crate) http: reqwest::Client,
}

impl GroqClient {
    pub fn new(config: GroqConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::builder()
                .connect_timeout(std::time::Duration::from_secs(10))
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("failed to build HTTP client"),
        }
    }

    /// Build the JSON request body for the chat completions API.
    /// The assembled prompt travels as a single user message.
    pub(crate) fn build_request_body(&self, model: ModelId, prompt: &str) -> serde_json::Value {
        serde_json::json!({
            "model": model.as_str(),
            "messages": [{
                "role": "user",
                "content": prompt,
            }],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
        })
    }

    /// Parse a chat completions response.
    pub(crate) fn parse_response(&self, json: serde_json::Value) -> Result<Completion, ProviderError> {
        let content = json["choices"][0]["message"]["content"]
            .as_str()
            .map(String::from)
            .ok_or_else(|| ProviderError::Parse("response has no message content".into()))?;

        let usage = TokenUsage {
            input_tokens: json["usage"]["prompt_tokens"].as_u64().unwrap_or(0),
            output_tokens: json["usage"]["completion_tokens"].as_u64().unwrap_or(0),
        };

        Ok(Completion { content, usage })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GroqClient {
        GroqClient::new(GroqConfig::new("gsk_test").with_max_tokens(256))
    }

    #[test]
    fn request_body_shape() {
        let body = client().build_request_body(ModelId::Llama31_8bInstant, "hello there");
        assert_eq!(body["model"], "llama-3.1-8b-instant");
        assert_eq!(body["messages"][0]["role"], "user");
        assert_eq!(body["messages"][0]["content"], "hello there");
        assert_eq!(body["max_tokens"], 256);
    }

    #[test]
    fn parse_well_formed_response() {
        let json = serde_json::json!({
            "choices": [{"message": {"role": "assistant", "content": "hi!"}}],
            "usage": {"prompt_tokens": 12, "completion_tokens": 3},
        });
        let completion = client().parse_response(json).unwrap();
        assert_eq!(completion.content, "hi!");
        assert_eq!(completion.usage.input_tokens, 12);
        assert_eq!(completion.usage.output_tokens, 3);
        assert_eq!(completion.usage.total_tokens(), 15);
    }

    #[test]
    fn parse_missing_content_fails() {
        let json = serde_json::json!({"choices": []});
        let err = client().parse_response(json).unwrap_err();
        assert!(matches!(err, ProviderError::Parse(_)));
    }

    #[test]
    fn parse_missing_usage_defaults_to_zero() {
        let json = serde_json::json!({
            "choices": [{"message": {"content": "ok"}}],
        });
        let completion = client().parse_response(json).unwrap();
        assert_eq!(completion.usage.total_tokens(), 0);
    }
}
