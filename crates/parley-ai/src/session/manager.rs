//! ChatSession struct and conversation state management.

use std::sync::atomic::AtomicBool;

use chrono::{DateTime, Utc};

use parley_core::{MemoryWindow, Persona, Transcript, Turn};

use crate::{ModelId, UsageTracker};

use super::types::SessionStats;

/// Default number of past turns replayed to the model.
pub(crate) const DEFAULT_MEMORY_TURNS: usize = 5;

/// One user's conversation: bounded context for the model, full
/// transcript for display.
pub struct ChatSession {
    /// Recent turns replayed as context on each request.
    pub(super) window: MemoryWindow,
    /// Every turn ever exchanged, display-only.
    pub(super) transcript: Transcript,
    /// Active prompt persona.
    pub(super) persona: Persona,
    /// Model requests are sent to.
    pub(super) model: ModelId,
    /// Token usage tracker.
    pub(super) tracker: UsageTracker,
    /// Set on the first successful exchange.
    pub(super) started_at: Option<DateTime<Utc>>,
    /// Whether the session is currently processing a request.
    pub(super) busy: AtomicBool,
}

impl ChatSession {
    pub fn new(model: ModelId) -> Self {
        Self {
            window: MemoryWindow::new(DEFAULT_MEMORY_TURNS),
            transcript: Transcript::new(),
            persona: Persona::Default,
            model,
            tracker: UsageTracker::new(),
            started_at: None,
            busy: AtomicBool::new(false),
        }
    }

    pub fn with_persona(mut self, persona: Persona) -> Self {
        self.persona = persona;
        self
    }

    /// Set how many past turns are replayed to the model.
    pub fn with_memory_turns(mut self, turns: usize) -> Self {
        self.window.set_capacity(turns);
        self
    }

    /// Change the replay capacity mid-session. Excess turns are evicted
    /// immediately, oldest first.
    pub fn set_memory_turns(&mut self, turns: usize) {
        self.window.set_capacity(turns);
    }

    pub fn set_persona(&mut self, persona: Persona) {
        self.persona = persona;
    }

    pub fn set_model(&mut self, model: ModelId) {
        self.model = model;
    }

    /// Forget the recent context without touching the transcript
    /// ("new topic").
    pub fn new_topic(&mut self) {
        self.window.clear();
    }

    /// Wipe the whole conversation: window, transcript, and statistics
    /// ("clear chat history").
    pub fn clear_history(&mut self) {
        self.window.clear();
        self.transcript.clear();
        self.tracker.reset();
        self.started_at = None;
    }

    pub fn persona(&self) -> Persona {
        self.persona
    }

    pub fn model(&self) -> ModelId {
        self.model
    }

    /// The bounded context window.
    pub fn window(&self) -> &MemoryWindow {
        &self.window
    }

    /// The full conversation transcript.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// The latest exchanged turn, if any.
    pub fn latest(&self) -> Option<&Turn> {
        self.transcript.latest()
    }

    pub fn stats(&self) -> SessionStats {
        SessionStats {
            turns: self.transcript.len(),
            started_at: self.started_at,
            calls: self.tracker.call_count(),
            total_tokens: self.tracker.total_tokens(),
        }
    }
}
