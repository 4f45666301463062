//! Core data shapes for parley: conversation turns, the bounded memory
//! window, the unbounded transcript, persona prompt templates, and the
//! error types shared across crates.
//!
//! Everything here is pure and synchronous — no I/O, no async.

pub mod errors;
pub mod memory;
pub mod persona;
pub mod transcript;

pub use errors::{ChatError, ConfigError, ProviderError};
pub use memory::{MemoryWindow, Turn};
pub use persona::Persona;
pub use transcript::Transcript;

pub type Result<T> = std::result::Result<T, ChatError>;
