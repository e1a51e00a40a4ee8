//! Markdown to HTML for the chat view
//!
//! Agent answers arrive as markdown (lists, headings, citation links). Raw
//! HTML in the source is shown as text and script-capable link targets are
//! dropped, so the output is safe to insert into the page.

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag};

const UNSAFE_SCHEMES: &[&str] = &["javascript:", "vbscript:", "data:"];

/// Render markdown as sanitized HTML
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let events = Parser::new_ext(markdown, options).map(sanitize);

    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, events);
    out
}

fn sanitize(event: Event<'_>) -> Event<'_> {
    match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        Event::Start(Tag::Link {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Link {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        Event::Start(Tag::Image {
            link_type,
            dest_url,
            title,
            id,
        }) => Event::Start(Tag::Image {
            link_type,
            dest_url: safe_url(dest_url),
            title,
            id,
        }),
        other => other,
    }
}

fn safe_url(url: CowStr<'_>) -> CowStr<'_> {
    let lowered = url.trim_start().to_ascii_lowercase();
    if UNSAFE_SCHEMES.iter().any(|scheme| lowered.starts_with(scheme)) {
        CowStr::Borrowed("#")
    } else {
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatting_is_rendered() {
        let html = to_html("**Holding**\n\n- first\n- second\n\n## Sources");
        assert!(html.contains("<strong>Holding</strong>"));
        assert!(html.contains("<li>first</li>"));
        assert!(html.contains("<h2>Sources</h2>"));
    }

    #[test]
    fn test_citation_links_kept() {
        let html = to_html("See [Smith v. Jones](https://example.com/case).");
        assert!(html.contains(r#"<a href="https://example.com/case">Smith v. Jones</a>"#));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = to_html("<script>alert(1)</script>\n\ntext with <b>tag</b>");
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;tag&lt;/b&gt;"));
    }

    #[test]
    fn test_script_links_are_dropped() {
        let html = to_html("[click](javascript:alert(1)) and ![img](JavaScript:x)");
        assert!(!html.to_ascii_lowercase().contains("javascript:"));
        assert!(html.contains(r##"<a href="#">click</a>"##));
    }

    #[test]
    fn test_plain_text_is_a_paragraph() {
        assert_eq!(to_html("just words"), "<p>just words</p>\n");
    }
}
