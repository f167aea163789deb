//! Pelias place index client.
//!
//! This module resolves free text to geographic points. It offers two
//! query styles with different failure contracts:
//!
//! - `search` is strict: it must find exactly one place, otherwise the
//!   caller gets a validation error naming the query text
//! - `suggest` is best-effort: it returns up to five ranked suggestions
//!   and degrades to an empty list on any failure
//!
//! Every query is biased to the operating region (Skåne), which is a
//! compile-time constant rather than a request parameter.

mod client;
mod error;
mod types;

pub use client::{
    GeocodeClient, GeocodeConfig, OPERATING_REGION, Region, SUGGESTION_LIMIT, Suggestion,
};
pub use error::GeocodeError;
pub use types::{AutocompleteResponse, SearchResponse};
