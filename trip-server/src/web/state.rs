//! Application state for the web layer.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;
use tracing::info;
use uuid::Uuid;

use crate::geocode::GeocodeClient;
use crate::itinerary::ItineraryClient;
use crate::present::Decomposer;
use crate::search::{SearchConfig, SearchSession};

/// A browser's search form, backed by the real upstream clients.
pub type Session = SearchSession<GeocodeClient, ItineraryClient>;

/// How long a session may go unused before it is dropped.
pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    session: Arc<Session>,
    touched: Instant,
}

type SessionMap = HashMap<Uuid, SessionEntry>;

/// Shared application state.
///
/// Contains the upstream clients and the open search sessions.
#[derive(Clone)]
pub struct AppState {
    /// Pelias client
    pub places: Arc<GeocodeClient>,

    /// OpenTripPlanner client
    pub planner: Arc<ItineraryClient>,

    /// Turns routes into display segments
    pub decomposer: Arc<Decomposer>,

    /// Debounce and related tuning
    pub config: Arc<SearchConfig>,

    sessions: Arc<RwLock<SessionMap>>,
    session_ttl: Duration,
}

impl AppState {
    /// Create a new app state.
    pub fn new(
        places: GeocodeClient,
        planner: ItineraryClient,
        decomposer: Decomposer,
        config: SearchConfig,
    ) -> Self {
        Self {
            places: Arc::new(places),
            planner: Arc::new(planner),
            decomposer: Arc::new(decomposer),
            config: Arc::new(config),
            sessions: Arc::new(RwLock::new(HashMap::new())),
            session_ttl: DEFAULT_SESSION_TTL,
        }
    }

    /// Drop sessions after `ttl` without a request.
    pub fn with_session_ttl(mut self, ttl: Duration) -> Self {
        self.session_ttl = ttl;
        self
    }

    pub fn session_ttl(&self) -> Duration {
        self.session_ttl
    }

    /// Open a fresh session and return its id.
    pub async fn open_session(&self) -> Uuid {
        let id = Uuid::new_v4();
        let session = Session::new(
            Arc::clone(&self.places),
            Arc::clone(&self.planner),
            &self.config,
        );
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        self.evict(&mut sessions, now);
        sessions.insert(
            id,
            SessionEntry {
                session: Arc::new(session),
                touched: now,
            },
        );
        info!(%id, open = sessions.len(), "session opened");
        id
    }

    /// Look up a live session and mark it as used.
    ///
    /// A session idle for longer than the TTL is removed and not returned.
    pub async fn session(&self, id: Uuid) -> Option<Arc<Session>> {
        let now = Instant::now();
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(&id)?;
        if now.duration_since(entry.touched) > self.session_ttl {
            sessions.remove(&id);
            info!(%id, "session expired");
            return None;
        }
        entry.touched = now;
        Some(Arc::clone(&entry.session))
    }

    /// Remove every session idle for longer than the TTL. Returns how many
    /// were removed.
    pub async fn evict_idle(&self) -> usize {
        let mut sessions = self.sessions.write().await;
        self.evict(&mut sessions, Instant::now())
    }

    fn evict(&self, sessions: &mut SessionMap, now: Instant) -> usize {
        let before = sessions.len();
        sessions.retain(|_, entry| now.duration_since(entry.touched) <= self.session_ttl);
        let evicted = before - sessions.len();
        if evicted > 0 {
            info!(evicted, open = sessions.len(), "expired idle sessions");
        }
        evicted
    }

    /// Close a session. Returns false if it did not exist.
    ///
    /// Searches still in flight for the session finish against their own
    /// copy and are then dropped.
    pub async fn close_session(&self, id: Uuid) -> bool {
        let removed = self.sessions.write().await.remove(&id).is_some();
        if removed {
            info!(%id, "session closed");
        }
        removed
    }

    pub async fn session_count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
