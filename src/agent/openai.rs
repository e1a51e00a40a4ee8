//! `OpenAI` Responses API gateway
//!
//! Web search and file search are hosted tools: the Responses API runs them
//! server-side inside a single request, so one POST yields the final answer.

use super::prompt::{build_prompt, AGENT_NAME, INSTRUCTIONS};
use super::{AgentError, AgentGateway};
use crate::config::Config;
use crate::session::{Message, Tool, ToolConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

/// Gateway backed by `POST {base_url}/responses`
pub struct OpenAIGateway {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
    vector_store_id: String,
    max_num_results: u32,
}

impl OpenAIGateway {
    pub fn new(config: &Config) -> Result<Self, AgentError> {
        let client = Client::builder()
            .timeout(config.agent_timeout)
            .build()
            .map_err(|e| AgentError::unknown(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            endpoint: format!("{}/responses", config.base_url.trim_end_matches('/')),
            vector_store_id: config.vector_store_id.clone(),
            max_num_results: config.file_search_max_results,
        })
    }

    fn build_tools(&self, tools: &ToolConfig) -> Vec<ResponsesApiTool> {
        tools
            .enabled_tools()
            .into_iter()
            .map(|tool| match tool {
                Tool::WebSearch => ResponsesApiTool::WebSearchPreview,
                Tool::FileSearch => ResponsesApiTool::FileSearch {
                    vector_store_ids: vec![self.vector_store_id.clone()],
                    max_num_results: self.max_num_results,
                },
            })
            .collect()
    }

    fn translate_request(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> ResponsesApiRequest {
        ResponsesApiRequest {
            model: self.model.clone(),
            instructions: INSTRUCTIONS.to_string(),
            input: vec![ResponsesApiInputItem::Message {
                role: "user".to_string(),
                content: build_prompt(question, history),
            }],
            tools: self.build_tools(tools),
            metadata: RequestMetadata {
                agent: AGENT_NAME.to_string(),
            },
        }
    }

    /// Collect the answer text from the response outputs
    fn normalize_response(resp: ResponsesApiResponse) -> Result<String, AgentError> {
        if let Some(error) = resp.error {
            return Err(AgentError::server_error(format!(
                "Agent run failed: {}",
                error.message
            )));
        }

        let mut parts = Vec::new();
        for output in resp.output {
            match output.r#type.as_str() {
                "message" => {
                    for item in output.content.unwrap_or_default() {
                        if item.r#type == "output_text" {
                            if let Some(text) = item.text {
                                parts.push(text);
                            }
                        }
                    }
                }
                other => {
                    // web_search_call, file_search_call, reasoning
                    tracing::debug!(output_type = %other, "Skipping non-message output");
                }
            }
        }

        let answer = parts.join("");
        if answer.trim().is_empty() {
            return Err(AgentError::invalid_response(format!(
                "Agent returned no answer (status: {})",
                resp.status
            )));
        }

        if resp.status != "completed" {
            tracing::warn!(status = %resp.status, "Agent response not marked completed");
        }

        Ok(answer)
    }
}

#[async_trait]
impl AgentGateway for OpenAIGateway {
    async fn ask(
        &self,
        question: &str,
        history: &[Message],
        tools: &ToolConfig,
    ) -> Result<String, AgentError> {
        let request = self.translate_request(question, history, tools);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AgentError::network(format!("Request timeout: {e}"))
                } else if e.is_connect() {
                    AgentError::network(format!("Connection failed: {e}"))
                } else {
                    AgentError::unknown(format!("Request failed: {e}"))
                }
            })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| AgentError::network(format!("Failed to read response: {e}")))?;

        if !status.is_success() {
            if let Ok(error_resp) = serde_json::from_str::<ResponsesApiErrorResponse>(&body) {
                return Err(AgentError::from_status(
                    status.as_u16(),
                    &error_resp.error.message,
                ));
            }
            // Raw upstream bodies go to the log, not to the user
            tracing::warn!(status = status.as_u16(), body = %body, "Unstructured error response");
            let reason = status.canonical_reason().unwrap_or("unexpected status");
            return Err(AgentError::from_status(status.as_u16(), reason));
        }

        let parsed: ResponsesApiResponse = serde_json::from_str(&body).map_err(|e| {
            tracing::warn!(error = %e, body = %body, "Unparseable agent response");
            AgentError::invalid_response(format!("Failed to parse response: {e}"))
        })?;

        Self::normalize_response(parsed)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

// Responses API types

#[derive(Debug, Serialize)]
struct ResponsesApiRequest {
    model: String,
    instructions: String,
    input: Vec<ResponsesApiInputItem>,
    tools: Vec<ResponsesApiTool>,
    metadata: RequestMetadata,
}

#[derive(Debug, Serialize)]
struct RequestMetadata {
    agent: String,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
enum ResponsesApiInputItem {
    #[serde(rename = "message")]
    Message { role: String, content: String },
}

/// Hosted tools offered to the agent
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ResponsesApiTool {
    WebSearchPreview,
    FileSearch {
        vector_store_ids: Vec<String>,
        max_num_results: u32,
    },
}

#[derive(Debug, Deserialize)]
struct ResponsesApiResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    output: Vec<ResponsesApiOutput>,
    #[serde(default)]
    error: Option<ResponsesApiError>,
}

#[derive(Debug, Deserialize)]
struct ResponsesApiOutput {
    r#type: String,
    #[serde(default)]
    content: Option<Vec<ResponsesApiContent>>,
}

#[derive(Debug, Deserialize)]
struct ResponsesApiContent {
    r#type: String,
    #[serde(default)]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ResponsesApiErrorResponse {
    error: ResponsesApiError,
}

#[derive(Debug, Deserialize)]
struct ResponsesApiError {
    message: String,
}
