//! Markdown rendering for free-text supper ideas

use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown to HTML for `dangerous_inner_html`.
///
/// Raw HTML in the source is emitted as escaped text, so generated content
/// can never inject markup of its own.
pub fn render_markdown(text: &str) -> String {
    let options = Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH;
    let parser = Parser::new_ext(text, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut out = String::with_capacity(text.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headings_and_lists() {
        let html = render_markdown("## Tonight\n\n- Risotto\n- **Tacos**");
        assert!(html.contains("<h2>Tonight</h2>"));
        assert!(html.contains("<li>Risotto</li>"));
        assert!(html.contains("<strong>Tacos</strong>"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let html = render_markdown("Soup <script>alert(1)</script>");
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(render_markdown(""), "");
    }
}
