//! Token usage tracking across a session.

use std::collections::HashMap;

use crate::{ModelId, TokenUsage};

/// Tracks cumulative token usage, in total and per model.
#[derive(Debug, Default)]
pub struct UsageTracker {
    total: TokenUsage,
    by_model: HashMap<ModelId, TokenUsage>,
    call_count: u64,
}

impl UsageTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record token usage from one provider call.
    pub fn record(&mut self, model: ModelId, usage: &TokenUsage) {
        self.total.input_tokens += usage.input_tokens;
        self.total.output_tokens += usage.output_tokens;
        self.call_count += 1;

        let entry = self.by_model.entry(model).or_default();
        entry.input_tokens += usage.input_tokens;
        entry.output_tokens += usage.output_tokens;
    }

    pub fn total(&self) -> &TokenUsage {
        &self.total
    }

    pub fn for_model(&self, model: ModelId) -> Option<&TokenUsage> {
        self.by_model.get(&model)
    }

    pub fn total_tokens(&self) -> u64 {
        self.total.total_tokens()
    }

    pub fn call_count(&self) -> u64 {
        self.call_count
    }

    pub fn reset(&mut self) {
        self.total = TokenUsage::default();
        self.by_model.clear();
        self.call_count = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_totals_and_per_model() {
        let mut tracker = UsageTracker::new();
        tracker.record(
            ModelId::Llama31_8bInstant,
            &TokenUsage {
                input_tokens: 10,
                output_tokens: 20,
            },
        );
        tracker.record(
            ModelId::CompoundMini,
            &TokenUsage {
                input_tokens: 5,
                output_tokens: 5,
            },
        );

        assert_eq!(tracker.total_tokens(), 40);
        assert_eq!(tracker.call_count(), 2);
        assert_eq!(
            tracker
                .for_model(ModelId::Llama31_8bInstant)
                .unwrap()
                .output_tokens,
            20
        );
        assert!(tracker.for_model(ModelId::KimiK2Instruct).is_none());
    }

    #[test]
    fn reset_clears_everything() {
        let mut tracker = UsageTracker::new();
        tracker.record(ModelId::CompoundMini, &TokenUsage::default());
        tracker.reset();
        assert_eq!(tracker.call_count(), 0);
        assert_eq!(tracker.total_tokens(), 0);
    }
}
