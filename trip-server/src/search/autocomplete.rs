//! Debounced place-name autocomplete for one input field.
//!
//! The raw value follows every keystroke. Suggestions are only requested
//! once input has been quiet for the debounce interval, and a response is
//! only kept if no newer keystroke or choice happened while it was in
//! flight.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::geocode::Suggestion;

use super::provider::PlaceIndex;

#[derive(Debug, Default)]
struct FieldState {
    raw: String,
    suggestions: Vec<Suggestion>,
    open: bool,
    generation: u64,
}

impl FieldState {
    /// The suggestion list is shown while the field is open and holds
    /// text that is not already one of the suggestions.
    fn popover_open(&self) -> bool {
        let trimmed = self.raw.trim();
        self.open
            && !self.raw.is_empty()
            && !self.suggestions.iter().any(|s| s.display_name == trimmed)
    }
}

/// What the front end renders for a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    pub value: String,
    pub suggestions: Vec<Suggestion>,
    /// Whether the suggestion popover is shown
    pub open: bool,
}

/// One autocompleted place input.
pub struct AutocompleteField<P> {
    places: Arc<P>,
    debounce: Duration,
    state: RwLock<FieldState>,
}

impl<P: PlaceIndex> AutocompleteField<P> {
    pub fn new(places: Arc<P>, debounce: Duration) -> Self {
        Self {
            places,
            debounce,
            state: RwLock::new(FieldState::default()),
        }
    }

    /// Handle a keystroke and wait until its suggestions are settled.
    pub async fn input(&self, value: impl Into<String>) {
        let generation = self.set_value(value).await;
        self.settle(generation).await;
    }

    /// Update the raw value immediately and open the field.
    ///
    /// Returns the generation to pass to [`settle`](Self::settle).
    pub async fn set_value(&self, value: impl Into<String>) -> u64 {
        let mut state = self.state.write().await;
        state.raw = value.into();
        state.open = true;
        state.generation += 1;
        state.generation
    }

    /// Wait out the debounce, then fetch and store suggestions unless a
    /// newer keystroke or choice supersedes `generation`.
    pub async fn settle(&self, generation: u64) {
        tokio::time::sleep(self.debounce).await;

        let text = {
            let state = self.state.read().await;
            if state.generation != generation {
                return;
            }
            state.raw.clone()
        };

        let suggestions = if text.trim().is_empty() {
            Vec::new()
        } else {
            self.places.suggest(&text).await
        };

        let mut state = self.state.write().await;
        if state.generation != generation {
            debug!(text = %text, "discarding stale suggestions");
            return;
        }
        state.suggestions = suggestions;
    }

    /// Copy the chosen suggestion into the field and close it.
    ///
    /// Cancels any pending debounce. Returns `None` if `id` is not among
    /// the current suggestions.
    pub async fn choose(&self, id: &str) -> Option<Suggestion> {
        let mut state = self.state.write().await;
        let chosen = state.suggestions.iter().find(|s| s.id == id)?.clone();

        state.raw = chosen.display_name.clone();
        state.open = false;
        state.generation += 1;
        Some(chosen)
    }

    /// Focus or blur the field.
    pub async fn set_open(&self, open: bool) {
        self.state.write().await.open = open;
    }

    /// Current raw value.
    pub async fn value(&self) -> String {
        self.state.read().await.raw.clone()
    }

    pub async fn view(&self) -> FieldView {
        let state = self.state.read().await;
        FieldView {
            value: state.raw.clone(),
            suggestions: state.suggestions.clone(),
            open: state.popover_open(),
        }
    }
}
