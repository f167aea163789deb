use std::time::Duration;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use trip_server::config::AppConfig;
use trip_server::geocode::GeocodeClient;
use trip_server::itinerary::ItineraryClient;
use trip_server::present::Decomposer;
use trip_server::search::SearchConfig;
use trip_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=info".into()),
        )
        .init();

    let config = AppConfig::from_env()?;
    tracing::info!(
        pelias = %config.pelias_url,
        otp = %config.otp_url,
        timeout_secs = config.upstream_timeout_secs,
        "loaded configuration"
    );

    let places = GeocodeClient::new(config.geocode())?;
    let planner = ItineraryClient::new(config.itinerary())?;
    let state = AppState::new(
        places,
        planner,
        Decomposer::default(),
        SearchConfig::default(),
    )
    .with_session_ttl(config.session_idle());

    // Sweep sessions whose browser went away without closing them
    let sweeper = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(sweeper.session_ttl().max(Duration::from_secs(1)));
        interval.tick().await; // First tick is immediate
        loop {
            interval.tick().await;
            sweeper.evict_idle().await;
        }
    });

    let app = create_router(state, &config.static_dir);

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Trip planner listening on http://{}", config.bind_addr);
    tracing::info!("  GET  /health                         - Health check");
    tracing::info!("  POST /api/sessions                   - Open a search session");
    tracing::info!("  POST /api/sessions/:id/search        - Submit a search");
    tracing::info!("  POST /api/sessions/:id/fields/:field - Autocomplete a place");

    axum::serve(listener, app).await?;
    Ok(())
}
