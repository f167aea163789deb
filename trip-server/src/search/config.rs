//! Search pipeline configuration.

use std::time::Duration;

/// Tuning for the search orchestrator and autocomplete fields.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Quiet period after the last keystroke before suggestions are
    /// requested (milliseconds).
    pub debounce_ms: u64,
}

impl SearchConfig {
    pub fn new(debounce_ms: u64) -> Self {
        Self { debounce_ms }
    }

    /// Returns the debounce interval as a Duration.
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { debounce_ms: 200 }
    }
}
