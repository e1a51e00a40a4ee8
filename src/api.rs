//! HTTP API and embedded UI

mod assets;
mod handlers;
mod sessions;
mod types;

pub use handlers::create_router;
pub use sessions::SessionRegistry;

use crate::agent::AgentGateway;
use std::sync::Arc;
use std::time::Duration;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub sessions: Arc<SessionRegistry>,
    pub gateway: Arc<dyn AgentGateway>,
}

impl AppState {
    pub fn new(gateway: Arc<dyn AgentGateway>, session_idle_timeout: Duration) -> Self {
        Self {
            sessions: Arc::new(SessionRegistry::new(session_idle_timeout)),
            gateway,
        }
    }
}
