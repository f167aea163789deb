//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::time::Duration;

use crate::geocode::GeocodeConfig;
use crate::itinerary::ItineraryConfig;

const DEFAULT_PELIAS_URL: &str = "http://localhost:4000/v1";
const DEFAULT_OTP_URL: &str = "http://localhost:8080/otp/gtfs/v1";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_STATIC_DIR: &str = "static";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_LANGUAGE: &str = "sv";
const DEFAULT_SESSION_IDLE_SECS: u64 = 30 * 60;

/// Errors from reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value:?}")]
    InvalidAddr { var: &'static str, value: String },

    #[error("{var} is not a whole number of seconds: {value:?}")]
    InvalidSecs { var: &'static str, value: String },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Pelias API base URL
    pub pelias_url: String,
    /// OpenTripPlanner GraphQL endpoint
    pub otp_url: String,
    /// Address to listen on
    pub bind_addr: SocketAddr,
    /// Directory served under `/static`
    pub static_dir: String,
    /// Request timeout for both upstreams
    pub upstream_timeout_secs: u64,
    /// `Accept-Language` sent upstream
    pub language: String,
    /// Idle time after which a search session is dropped
    pub session_idle_secs: u64,
}

impl AppConfig {
    /// Read configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `PELIAS_URL` | `http://localhost:4000/v1` |
    /// | `OTP_URL` | `http://localhost:8080/otp/gtfs/v1` |
    /// | `BIND_ADDR` | `127.0.0.1:3000` |
    /// | `STATIC_DIR` | `static` |
    /// | `UPSTREAM_TIMEOUT_SECS` | `30` |
    /// | `ACCEPT_LANGUAGE` | `sv` |
    /// | `SESSION_IDLE_SECS` | `1800` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's value if set.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str, default: &str| lookup(var).unwrap_or_else(|| default.to_string());

        let bind = get("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind.clone(),
        })?;

        let secs = |var: &'static str, default: u64| match lookup(var) {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSecs { var, value }),
            None => Ok(default),
        };
        let upstream_timeout_secs = secs("UPSTREAM_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?;
        let session_idle_secs = secs("SESSION_IDLE_SECS", DEFAULT_SESSION_IDLE_SECS)?;

        Ok(Self {
            pelias_url: get("PELIAS_URL", DEFAULT_PELIAS_URL),
            otp_url: get("OTP_URL", DEFAULT_OTP_URL),
            bind_addr,
            static_dir: get("STATIC_DIR", DEFAULT_STATIC_DIR),
            upstream_timeout_secs,
            language: get("ACCEPT_LANGUAGE", DEFAULT_LANGUAGE),
            session_idle_secs,
        })
    }

    pub fn session_idle(&self) -> Duration {
        Duration::from_secs(self.session_idle_secs)
    }

    pub fn geocode(&self) -> GeocodeConfig {
        GeocodeConfig::new(&self.pelias_url)
            .with_language(&self.language)
            .with_timeout(self.upstream_timeout_secs)
    }

    pub fn itinerary(&self) -> ItineraryConfig {
        ItineraryConfig::new(&self.otp_url)
            .with_language(&self.language)
            .with_timeout(self.upstream_timeout_secs)
    }
}
