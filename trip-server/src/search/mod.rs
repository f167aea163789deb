//! Search orchestration.
//!
//! Ties the place index, the routing backend and the user's form
//! together:
//!
//! - [`AutocompleteField`] debounces keystrokes into suggestion requests
//! - [`SearchOrchestrator`] resolves both places concurrently, plans, and
//!   owns the idle/searching/success/error lifecycle
//!
//! Both discard results that a newer action has superseded.

mod autocomplete;
mod config;
mod error;
mod orchestrator;
mod provider;
mod request;
mod session;
mod state;


pub use autocomplete::{AutocompleteField, FieldView};
pub use config::SearchConfig;
pub use error::{NETWORK_MESSAGE, RequestError, SearchError, SelectionError};
pub use orchestrator::{Commit, SearchOrchestrator};
pub use provider::{PlaceIndex, TripPlanner};
pub use request::SearchRequest;
pub use session::{Field, SearchSession};
pub use state::{Generation, Phase, SearchFailure, SearchState};
