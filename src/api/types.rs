//! API request and response types

use crate::markdown;
use crate::session::{Lifecycle, Message, Role, SessionState, Tool, ToolConfig};
use serde::{Deserialize, Serialize};

/// Request to ask a question
#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
}

/// Request to switch a search tool on or off
#[derive(Debug, Deserialize)]
pub struct ToolToggleRequest {
    pub tool: Tool,
    pub enabled: bool,
}

/// One chat message with its rendered markdown
#[derive(Debug, Serialize)]
pub struct MessageView {
    pub role: Role,
    pub content: String,
    pub html: String,
}

impl From<&Message> for MessageView {
    fn from(message: &Message) -> Self {
        Self {
            role: message.role(),
            content: message.content().to_string(),
            html: markdown::to_html(message.content()),
        }
    }
}

/// Full view of one session
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub messages: Vec<MessageView>,
    pub tools: ToolConfig,
    pub lifecycle: Lifecycle,
    pub active: bool,
    pub can_send: bool,
    /// Sidebar warning shown while no search source is selected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

impl SessionResponse {
    pub fn from_state(id: &str, state: &SessionState) -> Self {
        let can_send = state.can_send();
        Self {
            id: id.to_string(),
            messages: state.messages().iter().map(MessageView::from).collect(),
            tools: *state.tools(),
            lifecycle: state.lifecycle(),
            active: state.is_active(),
            can_send,
            warning: (!can_send).then(|| "Please select at least one search source".to_string()),
        }
    }
}

/// Response for a completed turn
#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
    pub session: SessionResponse,
}

/// Example questions for the sidebar
#[derive(Debug, Serialize)]
pub struct ExamplesResponse {
    pub examples: Vec<String>,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
