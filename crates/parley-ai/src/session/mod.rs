//! Chat session orchestration.
//!
//! A `ChatSession` owns one conversation: the bounded memory window
//! replayed to the model, the unbounded transcript shown to the user,
//! the active persona and model, and usage statistics. One instance per
//! user session — never shared.

mod chat;
mod manager;
mod types;

pub use manager::ChatSession;
pub use types::SessionStats;
