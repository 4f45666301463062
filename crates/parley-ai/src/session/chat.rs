//! Async send path for ChatSession.

use parley_core::{ChatError, Turn};

use crate::ChatClient;

use super::manager::ChatSession;
use super::types::BusyGuard;

impl ChatSession {
    /// Submit one user input: assemble the prompt from the current
    /// window, issue exactly one provider request, and on success commit
    /// the resulting turn to both window and transcript. On failure
    /// neither is touched.
    pub async fn send(
        &mut self,
        client: &dyn ChatClient,
        input: &str,
    ) -> Result<Turn, ChatError> {
        let _guard = BusyGuard::acquire(&self.busy)?;

        let input = input.trim();
        if input.is_empty() {
            return Err(ChatError::EmptyInput);
        }

        let prompt = self.persona.render_prompt(&self.window.render(), input);
        let completion = client.complete(self.model, &prompt).await?;

        if self.started_at.is_none() {
            self.started_at = Some(chrono::Utc::now());
        }
        self.tracker.record(self.model, &completion.usage);

        let turn = Turn::new(input, completion.content);
        self.window.append(turn.clone());
        self.transcript.push(turn.clone());

        tracing::debug!(
            turns = self.transcript.len(),
            window = self.window.len(),
            "Turn committed"
        );

        Ok(turn)
    }
}
