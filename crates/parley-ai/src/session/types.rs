//! Session types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use chrono::{DateTime, Utc};
use parley_core::ChatError;

/// Point-in-time session statistics for display.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// Turns recorded in the transcript.
    pub turns: usize,
    /// When the first successful exchange happened, if any.
    pub started_at: Option<DateTime<Utc>>,
    /// Provider calls made.
    pub calls: u64,
    /// Total tokens used (input + output).
    pub total_tokens: u64,
}

/// Guard that clears the `busy` flag on drop, ensuring it is always
/// released even if the future is cancelled or an early return occurs.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Attempt to acquire the busy lock. Returns `Err` if already busy.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, ChatError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(ChatError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
