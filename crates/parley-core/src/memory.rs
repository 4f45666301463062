//! Bounded conversation memory with FIFO eviction.
//!
//! Chat APIs are stateless: every request must re-supply the conversation
//! context. The window caps how many past turns are replayed, bounding
//! token cost. Eviction is strictly oldest-first — no relevance scoring.

use std::collections::VecDeque;

/// One human input paired with the model's reply. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Turn {
    pub human: String,
    pub ai: String,
}

impl Turn {
    pub fn new(human: impl Into<String>, ai: impl Into<String>) -> Self {
        Self {
            human: human.into(),
            ai: ai.into(),
        }
    }
}

/// A bounded buffer of recent turns, replayed as context for each request.
///
/// Invariant: `len() <= capacity()` after every operation.
#[derive(Debug, Clone)]
pub struct MemoryWindow {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl MemoryWindow {
    /// Create a window retaining at most `capacity` turns.
    /// `capacity` must be positive.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "memory window capacity must be positive");
        Self {
            turns: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a turn at the tail, evicting from the head if full.
    pub fn append(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// Render the retained turns as alternating `Human:` / `AI:` lines.
    /// This is exactly the context sent to the model — never the full
    /// transcript.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for turn in &self.turns {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str("Human: ");
            out.push_str(&turn.human);
            out.push_str("\nAI: ");
            out.push_str(&turn.ai);
        }
        out
    }

    /// Change the capacity, evicting from the head immediately if the
    /// current length exceeds the new capacity.
    pub fn set_capacity(&mut self, capacity: usize) {
        assert!(capacity > 0, "memory window capacity must be positive");
        self.capacity = capacity;
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// Empty the window. The transcript, if any, is a separate structure
    /// and is unaffected.
    pub fn clear(&mut self) {
        self.turns.clear();
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The retained turns, oldest first.
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }
}
