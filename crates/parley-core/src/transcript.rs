//! The full, unbounded conversation record.
//!
//! Display-only counterpart to [`crate::MemoryWindow`]: the window decides
//! what the model sees, the transcript is everything the user has said and
//! heard. Window eviction never touches it.

use crate::Turn;

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    /// All turns, oldest first.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// All turns, most recent first.
    pub fn iter_recent(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter().rev()
    }

    /// The latest turn, if any.
    pub fn latest(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_is_unbounded() {
        let mut transcript = Transcript::new();
        for n in 0..100 {
            transcript.push(Turn::new(format!("q{n}"), format!("a{n}")));
        }
        assert_eq!(transcript.len(), 100);
        assert_eq!(transcript.latest().unwrap().human, "q99");
    }

    #[test]
    fn iter_recent_reverses_order() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::new("first", "1"));
        transcript.push(Turn::new("second", "2"));
        transcript.push(Turn::new("third", "3"));

        let recent: Vec<_> = transcript.iter_recent().map(|t| t.human.as_str()).collect();
        assert_eq!(recent, vec!["third", "second", "first"]);
    }

    #[test]
    fn independent_of_window_eviction() {
        use crate::MemoryWindow;

        let mut window = MemoryWindow::new(2);
        let mut transcript = Transcript::new();
        for n in 0..5 {
            let turn = Turn::new(format!("q{n}"), format!("a{n}"));
            window.append(turn.clone());
            transcript.push(turn);
        }
        assert_eq!(window.len(), 2);
        assert_eq!(transcript.len(), 5);

        window.clear();
        assert_eq!(transcript.len(), 5);
    }
}
