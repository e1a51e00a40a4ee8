//! Conversation transcript export
//!
//! Renders the message history as a standalone HTML page for download.

use crate::session::Message;

/// Suggested file name for the downloaded transcript
pub const TRANSCRIPT_FILE_NAME: &str = "conversation.html";

const HEADER: &str = r#"
    <html><head><style>
    body { font-family: Arial, sans-serif; padding: 20px; }
    .user { color: blue; margin-bottom: 10px; }
    .assistant { color: green; margin-bottom: 20px; }
    .message { border-bottom: 1px solid #ddd; padding-bottom: 10px; }
    </style></head><body>
    <h2>Conversation Transcript</h2>
    "#;

const FOOTER: &str = "</body></html>";

/// Render messages as an HTML document.
///
/// Output depends only on the messages, so equal input gives byte-identical
/// output.
pub fn render(messages: &[Message]) -> String {
    let mut html = String::from(HEADER);
    for message in messages {
        let role = message.role();
        html.push_str(r#"<div class="message "#);
        html.push_str(role.as_str());
        html.push_str(r#""><strong>"#);
        html.push_str(role.label());
        html.push_str(":</strong><br>");
        html.push_str(&escape_content(message.content()));
        html.push_str("</div>");
    }
    html.push_str(FOOTER);
    html
}

/// Escape markup characters and turn newlines into `<br>`
fn escape_content(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\n' => out.push_str("<br>"),
            _ => out.push(c),
        }
    }
    out
}
