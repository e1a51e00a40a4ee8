//! Hosted research agent boundary
//!
//! The rest of the crate talks to the agent through [`AgentGateway`]: one
//! question plus the history in, one final answer out. Tool instantiation,
//! prompt assembly and the HTTP round trip all live behind this trait.

mod error;
mod openai;
mod prompt;

#[cfg(test)]
pub mod testing;

#[allow(unused_imports)] // Public API re-exports
pub use error::{AgentError, AgentErrorKind};
pub use openai::OpenAIGateway;

use crate::session::{Message, ToolConfig};
use async_trait::async_trait;
use std::sync::Arc;

/// A hosted agent that answers one question per call
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Ask the agent a question with the conversation so far as context.
    ///
    /// Only the tools enabled in `tools` are offered to the agent. The call
    /// is attempted once; any failure is returned to the caller.
    async fn ask(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> Result<String, AgentError>;

    /// Identifier of the model behind the gateway
    fn model_id(&self) -> &str;
}

#[async_trait]
impl<T: AgentGateway + ?Sized> AgentGateway for Arc<T> {
    async fn ask(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> Result<String, AgentError> {
        (**self).ask(question, history, tools).await
    }

    fn model_id(&self) -> &str {
        (**self).model_id()
    }
}

/// Logging wrapper for agent gateways
pub struct LoggingGateway {
    inner: Arc<dyn AgentGateway>,
    model_id: String,
}

impl LoggingGateway {
    pub fn new(inner: Arc<dyn AgentGateway>) -> Self {
        let model_id = inner.model_id().to_string();
        Self { inner, model_id }
    }
}

#[async_trait]
impl AgentGateway for LoggingGateway {
    async fn ask(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> Result<String, AgentError> {
        let start = std::time::Instant::now();
        let result = self.inner.ask(question, history, tools).await;
        let duration = start.elapsed();

        match &result {
            Ok(answer) => {
                tracing::info!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    history_len = history.len(),
                    tools = ?tools.enabled_tools(),
                    answer_len = answer.len(),
                    "Agent request completed"
                );
            }
            Err(e) => {
                tracing::error!(
                    model = %self.model_id,
                    duration_ms = %duration.as_millis(),
                    history_len = history.len(),
                    tools = ?tools.enabled_tools(),
                    error = %e.message,
                    kind = ?e.kind,
                    "Agent request failed"
                );
            }
        }

        result
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
