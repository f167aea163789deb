//! HTTP route handlers.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;
use uuid::Uuid;

use crate::itinerary::Direction;
use crate::search::{Field, FieldView, RequestError, SearchRequest, SelectionError};

use super::dto::*;
use super::state::{AppState, Session};

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/sessions", post(create_session))
        .route("/api/sessions/:id", get(get_session).delete(delete_session))
        .route("/api/sessions/:id/search", post(submit_search))
        .route("/api/sessions/:id/select", post(select_route))
        .route(
            "/api/sessions/:id/fields/:field",
            get(get_field).post(field_input),
        )
        .route("/api/sessions/:id/fields/:field/choose", post(choose_suggestion))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

async fn create_session(State(state): State<AppState>) -> impl IntoResponse {
    let session_id = state.open_session().await;
    (StatusCode::CREATED, Json(SessionCreated { session_id }))
}

async fn delete_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if state.close_session(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::session_not_found(id))
    }
}

/// Look up a session or fail with 404.
async fn find_session(state: &AppState, id: Uuid) -> Result<Arc<Session>, AppError> {
    state
        .session(id)
        .await
        .ok_or_else(|| AppError::session_not_found(id))
}

async fn state_view(state: &AppState, session: &Session) -> SearchStateView {
    SearchStateView::build(&session.search.snapshot().await, &state.decomposer)
}

async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SearchStateView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(state_view(&state, &session).await))
}

/// Submit a search. The search runs in the background; the response is
/// the `searching` state.
async fn submit_search(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<SearchForm>,
) -> Result<(StatusCode, Json<SearchStateView>), AppError> {
    let session = find_session(&state, id).await?;
    let request = SearchRequest::new(
        form.origin,
        form.destination,
        Direction::from_depart_at(form.depart_at),
        form.time,
    )?;

    let generation = session.search.begin().await;
    let view = state_view(&state, &session).await;

    let background = Arc::clone(&session);
    tokio::spawn(async move {
        background.search.complete(generation, &request).await;
    });

    Ok((StatusCode::ACCEPTED, Json(view)))
}

/// Toggle selection of a route.
async fn select_route(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<SelectForm>,
) -> Result<Json<SearchStateView>, AppError> {
    let session = find_session(&state, id).await?;
    session.search.select(form.index).await?;
    Ok(Json(state_view(&state, &session).await))
}

async fn get_field(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, Field)>,
) -> Result<Json<FieldView>, AppError> {
    let session = find_session(&state, id).await?;
    Ok(Json(session.field(field).view().await))
}

/// A keystroke. Suggestions are fetched in the background once the
/// field has been quiet for the debounce interval.
async fn field_input(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, Field)>,
    Json(input): Json<FieldInput>,
) -> Result<Json<FieldView>, AppError> {
    let session = find_session(&state, id).await?;
    let generation = session.field(field).set_value(input.value).await;

    let background = Arc::clone(&session);
    tokio::spawn(async move {
        background.field(field).settle(generation).await;
    });

    Ok(Json(session.field(field).view().await))
}

async fn choose_suggestion(
    State(state): State<AppState>,
    Path((id, field)): Path<(Uuid, Field)>,
    Json(form): Json<ChooseForm>,
) -> Result<Json<FieldView>, AppError> {
    let session = find_session(&state, id).await?;
    let target = session.field(field);

    if target.choose(&form.id).await.is_none() {
        return Err(AppError::NotFound {
            message: format!("no suggestion {:?} for {field}", form.id),
        });
    }
    Ok(Json(target.view().await))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl AppError {
    fn session_not_found(id: Uuid) -> Self {
        AppError::NotFound {
            message: format!("no session {id}"),
        }
    }
}

impl From<RequestError> for AppError {
    fn from(e: RequestError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<SelectionError> for AppError {
    fn from(e: SelectionError) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::time::Duration;

    use axum::extract::Query;
    use serde_json::{Value, json};

    use super::*;
    use crate::geocode::{GeocodeClient, GeocodeConfig};
    use crate::itinerary::{ItineraryClient, ItineraryConfig};
    use crate::present::Decomposer;
    use crate::search::SearchConfig;
    use crate::testing::spawn_upstream;

    /// Fake Pelias: only "Lund C" and "Malmö C" resolve.
    async fn fake_search(Query(params): Query<HashMap<String, String>>) -> Json<Value> {
        let text = params.get("text").cloned().unwrap_or_default();
        let features = match text.as_str() {
            "Lund C" => json!([{ "geometry": { "coordinates": [13.1865, 55.7058] } }]),
            "Malmö C" => json!([{ "geometry": { "coordinates": [13.0004, 55.6093] } }]),
            _ => json!([]),
        };
        Json(json!({ "features": features, "geocoding": { "query": { "text": text } } }))
    }

    async fn fake_autocomplete() -> Json<Value> {
        Json(json!({
            "features": [
                { "properties": { "id": "node/1", "name": "Lund C", "county": "Lund" } }
            ]
        }))
    }

    fn leg(mode: &str, start: &str, end: &str, distance: f64, points: &str) -> Value {
        json!({
            "id": null,
            "mode": mode,
            "distance": distance,
            "from": { "name": "Lund C", "lat": 55.7058, "lon": 13.1865,
                      "stop": { "platformCode": "2", "vehicleMode": "RAIL" } },
            "to": { "name": "Malmö C", "lat": 55.6093, "lon": 13.0004, "stop": null },
            "start": { "scheduledTime": start },
            "end": { "scheduledTime": end },
            "legGeometry": { "points": points },
            "route": { "desc": null, "shortName": "Pågatåg" }
        })
    }

    async fn fake_plan() -> Json<Value> {
        let itinerary = |hour: u32| {
            json!({ "node": { "legs": [
                leg("RAIL",
                    &format!("2025-05-02T{hour:02}:03:00+02:00"),
                    &format!("2025-05-02T{hour:02}:15:00+02:00"),
                    16_400.0,
                    "_p~iF~ps|U_ulLnnqC"),
            ] } })
        };
        Json(json!({ "data": { "planConnection": { "edges": [itinerary(9), itinerary(10)] } } }))
    }

    async fn app() -> (String, AppState) {
        let pelias = spawn_upstream(
            Router::new()
                .route("/v1/search", get(fake_search))
                .route("/v1/autocomplete", get(fake_autocomplete)),
        )
        .await;
        let otp = spawn_upstream(Router::new().route("/otp/gtfs/v1", post(fake_plan))).await;

        let state = AppState::new(
            GeocodeClient::new(GeocodeConfig::new(format!("{pelias}/v1"))).unwrap(),
            ItineraryClient::new(ItineraryConfig::new(format!("{otp}/otp/gtfs/v1"))).unwrap(),
            Decomposer::default(),
            SearchConfig::new(10),
        );
        let base = spawn_upstream(create_router(state.clone(), "static")).await;
        (base, state)
    }

    async fn open(http: &reqwest::Client, base: &str) -> Uuid {
        let response = http
            .post(format!("{base}/api/sessions"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        response.json::<SessionCreated>().await.unwrap().session_id
    }

    /// Poll `url` until `done` holds for the JSON body.
    async fn poll(http: &reqwest::Client, url: &str, done: impl Fn(&Value) -> bool) -> Value {
        for _ in 0..200 {
            let body: Value = http.get(url).send().await.unwrap().json().await.unwrap();
            if done(&body) {
                return body;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("condition not reached for {url}");
    }

    #[tokio::test]
    async fn health_check() {
        let (base, _) = app().await;
        let body = reqwest::get(format!("{base}/health"))
            .await
            .unwrap()
            .text()
            .await
            .unwrap();
        assert_eq!(body, "ok");
    }

    #[tokio::test]
    async fn search_then_select() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;
        let session_url = format!("{base}/api/sessions/{id}");

        let response = http
            .post(format!("{session_url}/search"))
            .json(&json!({
                "origin": "Lund C",
                "destination": "Malmö C",
                "depart_at": true,
                "time": "2025-05-02T09:00:00+02:00"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["phase"], "searching");

        let body = poll(&http, &session_url, |b| b["phase"] != "searching").await;
        assert_eq!(body["phase"], "success");
        assert_eq!(body["routes"].as_array().unwrap().len(), 2);

        let route = &body["routes"][0];
        assert_eq!(route["departure"], "09:03");
        assert_eq!(route["duration"], "12 min");
        assert_eq!(route["distance"], "16.4 km");
        assert_eq!(route["segments"][0]["kind"]["mode"], "RAIL");
        assert_eq!(route["segments"][0]["legs"][0]["platform"], "2");

        let body: Value = http
            .post(format!("{session_url}/select"))
            .json(&json!({ "index": 1 }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["selected"], 1);
        assert_eq!(body["phase"], "success");
        assert_eq!(body["selected_path"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn unknown_place_reports_validation_error() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;
        let session_url = format!("{base}/api/sessions/{id}");

        http.post(format!("{session_url}/search"))
            .json(&json!({
                "origin": "Lund C",
                "destination": "Atlantis",
                "time": "2025-05-02T09:00:00+02:00"
            }))
            .send()
            .await
            .unwrap();

        let body = poll(&http, &session_url, |b| b["phase"] != "searching").await;
        assert_eq!(body["phase"], "error");
        assert_eq!(body["error"]["kind"], "validation");
        assert_eq!(body["error"]["message"], "Could not find Atlantis.");
    }

    #[tokio::test]
    async fn blank_origin_is_bad_request() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;

        let response = http
            .post(format!("{base}/api/sessions/{id}/search"))
            .json(&json!({
                "origin": " ",
                "destination": "Malmö C",
                "time": "2025-05-02T09:00:00+02:00"
            }))
            .send()
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body: Value = response.json().await.unwrap();
        assert_eq!(body["error"], "origin must not be empty");
    }

    #[tokio::test]
    async fn selecting_missing_route_is_bad_request() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;

        let response = http
            .post(format!("{base}/api/sessions/{id}/select"))
            .json(&json!({ "index": 0 }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn autocomplete_and_choose() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;
        let field_url = format!("{base}/api/sessions/{id}/fields/origin");

        let body: Value = http
            .post(&field_url)
            .json(&json!({ "value": "Lun" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["value"], "Lun");

        let body = poll(&http, &field_url, |b| {
            !b["suggestions"].as_array().unwrap().is_empty()
        })
        .await;
        assert_eq!(body["suggestions"][0]["display_name"], "Lund C, Lund");
        assert_eq!(body["open"], true);

        let body: Value = http
            .post(format!("{field_url}/choose"))
            .json(&json!({ "id": "node/1" }))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["value"], "Lund C, Lund");
        assert_eq!(body["open"], false);

        let response = http
            .post(format!("{field_url}/choose"))
            .json(&json!({ "id": "node/404" }))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn sessions_open_and_close() {
        let (base, state) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;
        assert_eq!(state.session_count().await, 1);

        let response = http
            .delete(format!("{base}/api/sessions/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(state.session_count().await, 0);

        let response = http
            .get(format!("{base}/api/sessions/{id}"))
            .send()
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unknown_field_is_rejected() {
        let (base, _) = app().await;
        let http = reqwest::Client::new();
        let id = open(&http, &base).await;

        let response = http
            .get(format!("{base}/api/sessions/{id}/fields/via"))
            .send()
            .await
            .unwrap();
        assert!(response.status().is_client_error());
    }
}
