//! Search tool selection

use serde::{Deserialize, Serialize};

/// Optional capabilities the hosted agent may use while answering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tool {
    WebSearch,
    FileSearch,
}

impl Tool {
    pub const ALL: [Tool; 2] = [Tool::WebSearch, Tool::FileSearch];
}

/// Which tools are switched on for the session.
///
/// Both flags may be off at the same time; the "at least one" rule is only
/// checked when a question is sent (see [`ToolConfig::can_send`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolConfig {
    pub web_search: bool,
    pub file_search: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            web_search: true,
            file_search: true,
        }
    }
}

impl ToolConfig {
    pub fn is_enabled(&self, tool: Tool) -> bool {
        match tool {
            Tool::WebSearch => self.web_search,
            Tool::FileSearch => self.file_search,
        }
    }

    pub fn set_enabled(&mut self, tool: Tool, enabled: bool) {
        match tool {
            Tool::WebSearch => self.web_search = enabled,
            Tool::FileSearch => self.file_search = enabled,
        }
    }

    pub fn can_send(&self) -> bool {
        self.web_search || self.file_search
    }

    /// Enabled tools, web search first
    pub fn enabled_tools(&self) -> Vec<Tool> {
        Tool::ALL
            .into_iter()
            .filter(|tool| self.is_enabled(*tool))
            .collect()
    }
}
