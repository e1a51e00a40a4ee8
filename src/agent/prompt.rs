//! Agent persona and prompt assembly

use crate::session::Message;
use std::fmt::Write;

pub const AGENT_NAME: &str = "Research Assistant";

/// Standing instructions for the research agent
pub const INSTRUCTIONS: &str = r"You are a world class lawyer, capable of reasoning, finding weaknesses in briefs, using the legal documents that support your arguments and accessing files on Google Drive.
When you summarize documents such as briefs do so in clear and accurate language. When you provide output that identifies weaknesses in the brief's legal arguments be logical. Cite case references.
You also are skilled in researching anything related to the law using resources at your disposal. However, never ever suggest or use incorrect or unverifiable resources and case law. Only access files that are publicly available or authorized for use.";

/// Build the single prompt sent to the agent.
///
/// Every message in `history` becomes a `role: content` line in order,
/// followed by the current question.
pub fn build_prompt(question: &str, history: &[Message]) -> String {
    let context = history
        .iter()
        .map(|m| format!("{}: {}", m.role(), m.content()))
        .collect::<Vec<_>>()
        .join("\n");

    let mut prompt = String::from("Context of our conversation:\n");
    prompt.push_str(&context);
    let _ = write!(prompt, "\n\nCurrent question: {question}");
    prompt
}
