//! Search lifecycle state.

use serde::Serialize;

use crate::domain::Route;
use crate::error::ErrorKind;

use super::error::{SearchError, SelectionError};

/// Where the search is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    Idle,
    Searching,
    Success,
    Error,
}

/// Identifies one submit. Only the newest generation may commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

/// What the user is told about a failed search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&SearchError> for SearchFailure {
    fn from(err: &SearchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.user_message(),
        }
    }
}

/// State of one search form.
///
/// # Invariants
///
/// - `routes` is empty unless the phase is `Success`
/// - `error` is set iff the phase is `Error`
/// - `selected`, when set, indexes into `routes`
#[derive(Debug, Clone, PartialEq)]
pub struct SearchState {
    phase: Phase,
    routes: Vec<Route>,
    selected: Option<usize>,
    error: Option<SearchFailure>,
    generation: Generation,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            routes: Vec::new(),
            selected: None,
            error: None,
            generation: Generation(0),
        }
    }
}

impl SearchState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    /// The route the user picked, if any.
    pub fn selected_route(&self) -> Option<&Route> {
        self.selected.and_then(|i| self.routes.get(i))
    }

    pub fn error(&self) -> Option<&SearchFailure> {
        self.error.as_ref()
    }

    pub fn error_kind(&self) -> Option<ErrorKind> {
        self.error.as_ref().map(|e| e.kind)
    }

    /// Generation of the most recent submit.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Enter `Searching` for a new submit, dropping previous results and
    /// the selection.
    pub(crate) fn begin(&mut self) -> Generation {
        self.generation = Generation(self.generation.0 + 1);
        self.phase = Phase::Searching;
        self.routes.clear();
        self.selected = None;
        self.error = None;
        self.generation
    }

    pub(crate) fn is_current(&self, generation: Generation) -> bool {
        self.generation == generation
    }

    pub(crate) fn succeed(&mut self, routes: Vec<Route>) {
        self.phase = Phase::Success;
        self.routes = routes;
        self.selected = None;
        self.error = None;
    }

    pub(crate) fn fail(&mut self, err: &SearchError) {
        self.phase = Phase::Error;
        self.routes.clear();
        self.selected = None;
        self.error = Some(SearchFailure::from(err));
    }

    /// Toggle selection of the route at `index`. The phase is unchanged.
    pub(crate) fn toggle(&mut self, index: usize) -> Result<Option<usize>, SelectionError> {
        if index >= self.routes.len() {
            return Err(SelectionError {
                index,
                len: self.routes.len(),
            });
        }

        self.selected = if self.selected == Some(index) {
            None
        } else {
            Some(index)
        };
        Ok(self.selected)
    }

    pub(crate) fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mode;
    use crate::domain::leg::fixtures::*;
    use crate::geocode::GeocodeError;

    fn routes(n: usize) -> Vec<Route> {
        (0..n)
            .map(|i| Route::new(vec![leg_at(Mode::Bus, i as i64 * 10, 20, 5000.0)]).unwrap())
            .collect()
    }

    #[test]
    fn starts_idle() {
        let state = SearchState::default();
        assert_eq!(state.phase(), Phase::Idle);
        assert!(state.routes().is_empty());
        assert_eq!(state.selected_route(), None);
        assert_eq!(state.error_kind(), None);
    }

    #[test]
    fn begin_clears_results_and_bumps_generation() {
        let mut state = SearchState::default();
        let first = state.begin();
        state.succeed(routes(3));
        state.toggle(1).unwrap();

        let second = state.begin();

        assert!(second > first);
        assert_eq!(state.phase(), Phase::Searching);
        assert!(state.routes().is_empty());
        assert_eq!(state.selected_index(), None);
        assert!(!state.is_current(first));
        assert!(state.is_current(second));
    }

    #[test]
    fn toggle_selects_and_deselects() {
        let mut state = SearchState::default();
        state.begin();
        state.succeed(routes(3));

        assert_eq!(state.toggle(2), Ok(Some(2)));
        assert_eq!(state.selected_route(), Some(&state.routes()[2]));
        assert_eq!(state.toggle(0), Ok(Some(0)));
        assert_eq!(state.toggle(0), Ok(None));
        assert_eq!(state.phase(), Phase::Success);
    }

    #[test]
    fn toggle_out_of_range() {
        let mut state = SearchState::default();
        assert_eq!(state.toggle(0), Err(SelectionError { index: 0, len: 0 }));
    }

    #[test]
    fn fail_records_user_message() {
        let mut state = SearchState::default();
        state.begin();
        state.fail(&SearchError::from_lookups(
            None,
            Some(GeocodeError::NotFound {
                query: "Atlantis".into(),
            }),
        ));

        assert_eq!(state.phase(), Phase::Error);
        assert_eq!(
            state.error(),
            Some(&SearchFailure {
                kind: ErrorKind::Validation,
                message: "Could not find Atlantis.".into(),
            })
        );
    }
}
