//! Session state and lifecycle

use super::{ConversationStore, Message, Tool, ToolConfig};
use crate::agent::{AgentError, AgentGateway};
use serde::Serialize;
use thiserror::Error;

/// Assistant message appended when the user ends the conversation
pub const END_OF_CONVERSATION: &str = "Conversation ended. Leave the window open to restart it anytime. Otherwise you may close the browser window.";

/// Whether the conversation is still running.
///
/// `Ended` is informational: questions are still accepted afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Lifecycle {
    #[default]
    Active,
    Ended,
}

/// Errors returned by [`SessionState::ask`]
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Please select at least one search source in the sidebar")]
    NoToolSelected,
    #[error("{0}")]
    Gateway(#[from] AgentError),
}

/// Everything one user session owns
#[derive(Debug, Clone, Default, Serialize)]
pub struct SessionState {
    messages: ConversationStore,
    tools: ToolConfig,
    lifecycle: Lifecycle,
}

impl SessionState {
    /// Empty history, both tools on, active
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[Message] {
        self.messages.all()
    }

    #[allow(dead_code)] // Used by tests to seed history
    pub fn append(&mut self, message: Message) {
        self.messages.append(message);
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn tools(&self) -> &ToolConfig {
        &self.tools
    }

    pub fn set_tool_enabled(&mut self, tool: Tool, enabled: bool) {
        self.tools.set_enabled(tool, enabled);
    }

    pub fn can_send(&self) -> bool {
        self.tools.can_send()
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    /// Mark the conversation ended and append the closing message.
    ///
    /// Calling this again appends another closing message.
    pub fn end(&mut self) {
        self.lifecycle = Lifecycle::Ended;
        self.messages.append(Message::assistant(END_OF_CONVERSATION));
    }

    /// Run one turn: record the question, ask the agent, record the answer.
    ///
    /// With no tool selected nothing is recorded and the gateway is not
    /// called. If the gateway fails the question stays in the history
    /// without an answer.
    pub async fn ask<G>(&mut self, gateway: &G, question: &str) -> Result<String, SessionError>
    where
        G: AgentGateway + ?Sized,
    {
        if !self.can_send() {
            tracing::warn!("Question rejected, no search source selected");
            return Err(SessionError::NoToolSelected);
        }

        self.messages.append(Message::user(question));

        let answer = gateway
            .ask(question, self.messages.all(), &self.tools)
            .await
            .inspect_err(|e| {
                tracing::warn!(error = %e, history_len = self.messages.len(), "Turn failed");
            })?;

        self.messages.append(Message::assistant(answer.clone()));
        Ok(answer)
    }
}
