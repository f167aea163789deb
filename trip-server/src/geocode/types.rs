//! Pelias response DTOs.
//!
//! Only the fields the planner reads are modelled. Fields marked required
//! here make deserialization fail when the place index omits them.

use serde::Deserialize;

/// Response from `/search`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Matched places, best first.
    pub features: Vec<SearchFeature>,

    /// Echo of the query as the index understood it.
    pub geocoding: Option<GeocodingMeta>,
}

/// A matched place.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchFeature {
    pub geometry: Geometry,
}

/// GeoJSON point geometry.
#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    /// `[lon, lat]`
    pub coordinates: Vec<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingMeta {
    pub query: Option<QueryEcho>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryEcho {
    pub text: Option<String>,
}

/// Response from `/autocomplete`.
#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteResponse {
    pub features: Vec<AutocompleteFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AutocompleteFeature {
    pub properties: FeatureProperties,
}

/// Place properties used for suggestions.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureProperties {
    /// Stable Pelias id, e.g. "node/123456"
    pub id: String,
    /// Place name
    pub name: String,
    /// County, e.g. "Lund"
    pub county: Option<String>,
}
