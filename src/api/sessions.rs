//! Per-user session registry
//!
//! Each session sits behind its own async mutex, held for the whole turn,
//! so a session never has two questions in flight. Sessions nobody has
//! touched for the idle timeout are dropped by a background sweep.

use crate::session::SessionState;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{Mutex, RwLock};

pub type SessionHandle = Arc<Mutex<SessionState>>;

struct SessionEntry {
    handle: SessionHandle,
    last_seen: Instant,
}

pub struct SessionRegistry {
    sessions: RwLock<HashMap<String, SessionEntry>>,
    idle_timeout: Duration,
}

impl SessionRegistry {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
        }
    }

    /// Start a fresh session and return its id
    pub async fn create(&self) -> (String, SessionHandle) {
        let id = uuid::Uuid::new_v4().to_string();
        let handle = Arc::new(Mutex::new(SessionState::new()));
        let mut sessions = self.sessions.write().await;
        sessions.insert(
            id.clone(),
            SessionEntry {
                handle: handle.clone(),
                last_seen: Instant::now(),
            },
        );
        tracing::info!(session_id = %id, sessions = sessions.len(), "Session created");
        (id, handle)
    }

    /// Look up a session and mark it as seen
    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        let mut sessions = self.sessions.write().await;
        let entry = sessions.get_mut(id)?;
        entry.last_seen = Instant::now();
        Some(entry.handle.clone())
    }

    /// Drop sessions idle since before `now - idle_timeout`.
    ///
    /// A session whose handle is still held by a request is kept.
    pub async fn prune_idle(&self, now: Instant) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, entry| {
            Arc::strong_count(&entry.handle) > 1
                || now.saturating_duration_since(entry.last_seen) < self.idle_timeout
        });
        let removed = before - sessions.len();
        if removed > 0 {
            tracing::info!(removed, remaining = sessions.len(), "Idle sessions dropped");
        }
        removed
    }

    /// Sweep idle sessions every `interval` for the life of the process
    pub fn spawn_pruner(self: &Arc<Self>, interval: Duration) -> tokio::task::JoinHandle<()> {
        let registry = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                registry.prune_idle(Instant::now()).await;
            }
        })
    }
}
