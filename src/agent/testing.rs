//! Mock gateway for testing
//!
//! Returns queued answers and records every call it receives.

use super::{AgentError, AgentGateway};
use crate::session::{Message, ToolConfig};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// A recorded call to [`MockGateway::ask`]
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub question: String,
    pub history: Vec<Message>,
    pub tools: ToolConfig,
}

/// Gateway that answers from a queue
pub struct MockGateway {
    responses: Mutex<VecDeque<Result<String, AgentError>>>,
    calls: Mutex<Vec<RecordedCall>>,
}

impl Default for MockGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl MockGateway {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(VecDeque::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn queue_answer(&self, answer: impl Into<String>) {
        self.responses.lock().unwrap().push_back(Ok(answer.into()));
    }

    pub fn queue_error(&self, error: AgentError) {
        self.responses.lock().unwrap().push_back(Err(error));
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn recorded_calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl AgentGateway for MockGateway {
    async fn ask(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> Result<String, AgentError> {
        self.calls.lock().unwrap().push(RecordedCall {
            question: question.to_string(),
            history: history.to_vec(),
            tools: *tools,
        });
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AgentError::network("No mock answer queued")))
    }

    fn model_id(&self) -> &str {
        "mock-model"
    }
}
