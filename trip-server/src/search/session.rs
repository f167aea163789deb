//! One user's search form: the orchestrator plus its two place fields.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use super::autocomplete::AutocompleteField;
use super::config::SearchConfig;
use super::orchestrator::SearchOrchestrator;
use super::provider::{PlaceIndex, TripPlanner};

/// Which place input a request addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Origin,
    Destination,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Origin => f.write_str("origin"),
            Field::Destination => f.write_str("destination"),
        }
    }
}

/// Search state and autocomplete fields for one form.
pub struct SearchSession<P, T> {
    pub search: SearchOrchestrator<P, T>,
    pub origin: AutocompleteField<P>,
    pub destination: AutocompleteField<P>,
}

impl<P: PlaceIndex, T: TripPlanner> SearchSession<P, T> {
    pub fn new(places: Arc<P>, planner: Arc<T>, config: &SearchConfig) -> Self {
        Self {
            origin: AutocompleteField::new(Arc::clone(&places), config.debounce()),
            destination: AutocompleteField::new(Arc::clone(&places), config.debounce()),
            search: SearchOrchestrator::new(places, planner),
        }
    }

    pub fn field(&self, field: Field) -> &AutocompleteField<P> {
        match field {
            Field::Origin => &self.origin,
            Field::Destination => &self.destination,
        }
    }
}
