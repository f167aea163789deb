//! Pelias HTTP client.
//!
//! Provides strict single-result search (free text to one point) and
//! ranked autocomplete suggestions. Both are biased to the operating
//! region: results outside the boundary are excluded and results near the
//! focus point rank higher.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use serde::Serialize;
use tracing::{debug, warn};

use crate::domain::Point;

use super::error::GeocodeError;
use super::types::{AutocompleteResponse, SearchResponse};

/// Default base URL for a local Pelias API.
const DEFAULT_BASE_URL: &str = "http://localhost:4000/v1";

/// Default `Accept-Language` sent to the place index.
const DEFAULT_LANGUAGE: &str = "sv";

/// Maximum number of autocomplete suggestions.
pub const SUGGESTION_LIMIT: usize = 5;

/// Place layers searched: named venues and street addresses.
const LAYERS: &str = "venue,address";

/// Geographic bias applied to every query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    /// Who's On First id of the hard boundary
    pub boundary_gid: &'static str,
    /// Focus point latitude
    pub focus_lat: f64,
    /// Focus point longitude
    pub focus_lon: f64,
}

impl Region {
    /// Skåne, focused on Lund.
    pub const SKANE: Region = Region {
        boundary_gid: "whosonfirst:region:85688377",
        focus_lat: 55.702_929_6,
        focus_lon: 13.192_944_9,
    };
}

/// The region all queries are biased to.
pub const OPERATING_REGION: Region = Region::SKANE;

/// Configuration for the geocode client.
#[derive(Debug, Clone)]
pub struct GeocodeConfig {
    /// Base URL of the Pelias API, including the version path
    pub base_url: String,
    /// Value of the `Accept-Language` header
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl GeocodeConfig {
    /// Create a config for the given Pelias base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            timeout_secs: 30,
        }
    }

    /// Set the `Accept-Language` header value.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocodeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// One autocomplete suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Stable place id
    pub id: String,
    /// Text shown in the list and copied into the field when chosen
    pub display_name: String,
}

/// Pelias API client.
#[derive(Debug, Clone)]
pub struct GeocodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl GeocodeClient {
    /// Create a new geocode client with the given configuration.
    pub fn new(config: GeocodeConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let language = HeaderValue::from_str(&config.language)
            .map_err(|_| GeocodeError::Config(format!("invalid language {:?}", config.language)))?;
        headers.insert(ACCEPT_LANGUAGE, language);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Resolve free text to exactly one point.
    ///
    /// # Errors
    ///
    /// - `NotFound` / `Ambiguous` if the index does not return exactly one
    ///   match (validation errors)
    /// - `Http`, `Status` or `Schema` if the request or response is bad
    ///   (network errors)
    pub async fn search(&self, text: &str) -> Result<Point, GeocodeError> {
        let body = self.get("search", text, 1).await?;

        let response: SearchResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Schema {
                message: e.to_string(),
            })?;

        point_from_response(text, response)
    }

    /// Ranked suggestions for partial input.
    ///
    /// Never fails: errors are logged and yield no suggestions, so a
    /// flaky place index cannot break the input field.
    pub async fn suggest(&self, text: &str) -> Vec<Suggestion> {
        match self.try_suggest(text).await {
            Ok(suggestions) => suggestions,
            Err(e) => {
                warn!(error = %e, text, "autocomplete request failed");
                Vec::new()
            }
        }
    }

    /// Ranked suggestions for partial input, surfacing errors.
    ///
    /// Blank input returns an empty list without a request.
    pub async fn try_suggest(&self, text: &str) -> Result<Vec<Suggestion>, GeocodeError> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let body = self.get("autocomplete", text, SUGGESTION_LIMIT).await?;

        let response: AutocompleteResponse =
            serde_json::from_str(&body).map_err(|e| GeocodeError::Schema {
                message: e.to_string(),
            })?;

        Ok(suggestions_from_response(response))
    }

    /// Issue a region-biased GET and return the body of a 2xx response.
    async fn get(&self, endpoint: &str, text: &str, size: usize) -> Result<String, GeocodeError> {
        let url = format!("{}/{endpoint}", self.base_url);
        debug!(%url, text, "querying place index");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("text", text.to_string()),
                ("layers", LAYERS.to_string()),
                ("size", size.to_string()),
                ("boundary.gid", OPERATING_REGION.boundary_gid.to_string()),
                ("focus.point.lat", OPERATING_REGION.focus_lat.to_string()),
                ("focus.point.lon", OPERATING_REGION.focus_lon.to_string()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.text().await?)
    }
}

/// Validate a search response and extract its single point.
fn point_from_response(text: &str, response: SearchResponse) -> Result<Point, GeocodeError> {
    if let Some(echo) = response
        .geocoding
        .as_ref()
        .and_then(|g| g.query.as_ref())
        .and_then(|q| q.text.as_deref())
        && echo != text
    {
        debug!(text, echo, "place index normalized query text");
    }

    let feature = match response.features.as_slice() {
        [] => {
            return Err(GeocodeError::NotFound {
                query: text.to_string(),
            });
        }
        [only] => only,
        many => {
            return Err(GeocodeError::Ambiguous {
                query: text.to_string(),
                count: many.len(),
            });
        }
    };

    let &[lon, lat, ..] = feature.geometry.coordinates.as_slice() else {
        return Err(GeocodeError::Schema {
            message: format!(
                "expected [lon, lat], got {} coordinates",
                feature.geometry.coordinates.len()
            ),
        });
    };

    Point::new(lat, lon, text).map_err(|e| GeocodeError::Schema {
        message: e.to_string(),
    })
}

/// Turn autocomplete features into at most [`SUGGESTION_LIMIT`] suggestions.
fn suggestions_from_response(response: AutocompleteResponse) -> Vec<Suggestion> {
    response
        .features
        .into_iter()
        .take(SUGGESTION_LIMIT)
        .map(|f| {
            let p = f.properties;
            let display_name = match p.county {
                Some(county) if !county.is_empty() => format!("{}, {county}", p.name),
                _ => p.name,
            };
            Suggestion {
                id: p.id,
                display_name,
            }
        })
        .collect()
}
