//! ChatClient trait implementation for GroqClient.

use async_trait::async_trait;
use tracing::debug;

use parley_core::ProviderError;

use crate::{ChatClient, Completion, ModelId};

use super::client::{GroqClient, GROQ_API_URL};

#[async_trait]
impl ChatClient for GroqClient {
    async fn complete(&self, model: ModelId, prompt: &str) -> Result<Completion, ProviderError> {
        let body = self.build_request_body(model, prompt);

        debug!(model = %model, "Groq API request");

        let response = self
            .http
            .post(GROQ_API_URL)
            .bearer_auth(&self.config.api_key)
            .header("content-type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Network(e.to_string())
                }
            })?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ProviderError::RateLimited);
        }
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let text = text.chars().take(200).collect::<String>();
            return Err(ProviderError::Api(format!("HTTP {status}: {text}")));
        }

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))?;

        self.parse_response(json)
    }
}
