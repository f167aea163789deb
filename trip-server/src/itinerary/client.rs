//! OpenTripPlanner GraphQL client.

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{debug, info};

use crate::domain::{Point, Route, Timestamp};

use super::error::PlanError;
use super::query::{Direction, PlanRequest};
use super::types::PlanResponse;

/// Default GraphQL endpoint of a local OpenTripPlanner.
const DEFAULT_URL: &str = "http://localhost:8080/otp/gtfs/v1";

/// Configuration for the itinerary client.
#[derive(Debug, Clone)]
pub struct ItineraryConfig {
    /// GraphQL endpoint URL
    pub url: String,
    /// Value of the `Accept-Language` header
    pub language: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ItineraryConfig {
    /// Create a config for the given endpoint.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            language: "sv".to_string(),
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

impl Default for ItineraryConfig {
    fn default() -> Self {
        Self::new(DEFAULT_URL)
    }
}

/// Routing backend client.
#[derive(Debug, Clone)]
pub struct ItineraryClient {
    http: reqwest::Client,
    url: String,
}

impl ItineraryClient {
    /// Create a new itinerary client with the given configuration.
    pub fn new(config: ItineraryConfig) -> Result<Self, PlanError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        let language = HeaderValue::from_str(&config.language)
            .map_err(|_| PlanError::Config(format!("invalid language {:?}", config.language)))?;
        headers.insert(ACCEPT_LANGUAGE, language);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            url: config.url,
        })
    }

    /// Request itineraries between two points.
    ///
    /// Returns an empty list when the backend finds no itinerary.
    ///
    /// # Errors
    ///
    /// - `Http` on transport failure
    /// - `Status` on a non-2xx response, carrying the raw body
    /// - `Schema` if the response lacks required fields or contains an
    ///   invalid itinerary
    pub async fn plan(
        &self,
        origin: &Point,
        destination: &Point,
        direction: Direction,
        time: Timestamp,
    ) -> Result<Vec<Route>, PlanError> {
        let request = PlanRequest::new(origin, destination, direction, time);
        debug!(%origin, %destination, ?direction, %time, "requesting itineraries");

        let response = self.http.post(&self.url).json(&request).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PlanError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text().await?;

        let parsed: PlanResponse =
            serde_json::from_str(&body).map_err(|e| PlanError::Schema {
                message: e.to_string(),
            })?;

        let routes = routes_from_response(parsed)?;
        info!(count = routes.len(), "received itineraries");
        Ok(routes)
    }
}

/// Validate a GraphQL response and turn each edge into a `Route`.
fn routes_from_response(response: PlanResponse) -> Result<Vec<Route>, PlanError> {
    let Some(data) = response.data else {
        let messages: Vec<String> = response
            .errors
            .unwrap_or_default()
            .into_iter()
            .map(|e| e.message)
            .collect();
        let message = if messages.is_empty() {
            "response has no data".to_string()
        } else {
            messages.join("; ")
        };
        return Err(PlanError::Schema { message });
    };

    data.plan_connection
        .edges
        .into_iter()
        .enumerate()
        .map(|(i, edge)| {
            Route::new(edge.node.legs).map_err(|e| PlanError::Schema {
                message: format!("itinerary {i}: {e}"),
            })
        })
        .collect()
}
