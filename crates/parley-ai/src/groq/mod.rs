//! Groq API client.
//!
//! Implements the `ChatClient` trait against Groq's OpenAI-compatible
//! chat completions endpoint (https://api.groq.com/openai/v1).
//!
//! Authenticates with a `GROQ_API_KEY` bearer token.

mod api;
mod client;
mod config;

pub use client::GroqClient;
pub use config::GroqConfig;
