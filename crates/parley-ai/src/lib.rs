//! Model-provider plumbing for parley.
//!
//! Provides:
//! - The `ChatClient` trait — one synchronous request/response exchange
//!   with a hosted model
//! - A Groq client (OpenAI-compatible chat completions endpoint)
//! - Session orchestration: prompt assembly over the bounded memory
//!   window, atomic commit of turns, usage tracking

pub mod groq;
pub mod model;
pub mod session;
pub mod usage;

use async_trait::async_trait;

pub use groq::{GroqClient, GroqConfig};
pub use model::ModelId;
pub use session::ChatSession;
pub use usage::UsageTracker;

use parley_core::ProviderError;

#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send one assembled prompt to the given model and return its reply.
    async fn complete(&self, model: ModelId, prompt: &str) -> Result<Completion, ProviderError>;
}

/// A model reply plus the token accounting the provider reports for it.
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}
