//! Markdown renderer using pulldown-cmark.
//!
//! Raw HTML in the source is shown as text, never injected.

use std::ops::Range;

use pulldown_cmark::{CodeBlockKind, CowStr, Event, Options, Parser, Tag, TagEnd, html};

use crate::{
    syntax::SyntaxHighlighter,
    toc::{HeadingCollector, HeadingItem},
};

/// Rendered article body plus its outline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderedDocument {
    /// Article HTML.
    pub html: String,

    /// Level-2 and level-3 headings in document order.
    pub headings: Vec<HeadingItem>,
}

impl RenderedDocument {
    /// Whether a table of contents should be shown.
    pub fn has_toc(&self) -> bool {
        !self.headings.is_empty()
    }
}

/// GitHub-flavoured extensions enabled for every parse.
fn parser_options() -> Options {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options
}

/// Parse `markdown` into events with source ranges, raw HTML turned into text.
///
/// Both the renderer and [`crate::toc::extract_headings`] read this stream.
pub(crate) fn source_events(markdown: &str) -> impl Iterator<Item = (Event<'_>, Range<usize>)> {
    Parser::new_ext(markdown, parser_options())
        .into_offset_iter()
        .map(|(event, range)| {
            let event = match event {
                Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
                other => other,
            };
            (event, range)
        })
}

/// Markdown renderer with syntax highlighting support.
#[derive(Debug, Default)]
pub struct MarkdownRenderer {
    highlighter: SyntaxHighlighter,
}

/// Heading being collected until its end tag.
struct PendingHeading<'a> {
    events: Vec<Event<'a>>,
}

/// Fenced or indented block being collected until its end tag.
struct PendingCode {
    lang: Option<String>,
    content: String,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the syntax highlighter.
    pub fn highlighter(&self) -> &SyntaxHighlighter {
        &self.highlighter
    }

    /// Render Markdown into HTML and extract its outline in one pass.
    ///
    /// Every heading gets `id="{slugify(text)}"`; the outline holds the
    /// `##`/`###` ones with the same ids.
    pub fn render(&self, markdown: &str) -> RenderedDocument {
        let mut events: Vec<Event<'_>> = Vec::new();
        let mut headings: Vec<HeadingItem> = Vec::new();
        let mut collector = HeadingCollector::default();
        let mut heading: Option<PendingHeading<'_>> = None;
        let mut code: Option<PendingCode> = None;

        for (event, range) in source_events(markdown) {
            let finished = collector.observe(markdown, &event, range);

            match event {
                Event::Start(Tag::Heading { .. }) => {
                    heading = Some(PendingHeading { events: Vec::new() });
                }

                Event::End(TagEnd::Heading(level)) => {
                    if let (Some(pending), Some(finished)) = (heading.take(), finished) {
                        let lvl = level as u8;
                        let id = &finished.item.id;
                        events.push(Event::Html(CowStr::from(format!("<h{lvl} id=\"{id}\">"))));
                        events.extend(pending.events);
                        events.push(Event::Html(CowStr::from(format!("</h{lvl}>\n"))));
                        if finished.in_outline {
                            headings.push(finished.item);
                        }
                    }
                }

                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) if !info.trim().is_empty() => {
                            Some(info.to_string())
                        }
                        _ => None,
                    };
                    code = Some(PendingCode {
                        lang,
                        content: String::new(),
                    });
                }

                Event::End(TagEnd::CodeBlock) => {
                    if let Some(block) = code.take() {
                        let rendered = self
                            .highlighter
                            .highlight(&block.content, block.lang.as_deref());
                        events.push(Event::Html(CowStr::from(rendered)));
                    }
                }

                Event::Text(text) if code.is_some() => {
                    if let Some(block) = code.as_mut() {
                        block.content.push_str(&text);
                    }
                }

                other => match heading.as_mut() {
                    Some(pending) => pending.events.push(other),
                    None => events.push(other),
                },
            }
        }

        let mut out = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut out, events.into_iter());

        RenderedDocument { html: out, headings }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toc::extract_headings;

    fn assert_outline_resolves(doc: &RenderedDocument) {
        for heading in &doc.headings {
            assert!(
                doc.html.contains(&format!("id=\"{}\"", heading.id)),
                "no element with id {} in {}",
                heading.id,
                doc.html
            );
        }
    }

    #[test]
    fn test_render_simple_markdown() {
        let renderer = MarkdownRenderer::new();
        let doc = renderer.render("# Hello World\n\nThis is a test.");

        assert!(doc.html.contains("<h1 id=\"hello-world\">Hello World</h1>"));
        assert!(doc.html.contains("<p>This is a test.</p>"));
        assert!(!doc.has_toc());
    }

    #[test]
    fn test_heading_ids_match_toc() {
        let renderer = MarkdownRenderer::new();
        let markdown = "## Why RSC?\n\nText.\n\n### Using `Arc<T>` safely\n\n## See [docs](https://docs.rs)\n";
        let doc = renderer.render(markdown);

        assert_eq!(doc.headings.len(), 3);
        assert_outline_resolves(&doc);
        assert!(doc.html.contains("<h2 id=\"why-rsc\">Why RSC?</h2>"));
        assert!(doc.html.contains("<h3 id=\"using-arct-safely\">"));
    }

    #[test]
    fn test_outline_ids_resolve_for_tricky_headings() {
        let renderer = MarkdownRenderer::new();
        let cases = [
            ("## Q&amp;A\n", "qa"),
            ("## Read <https://example.com>\n", "read-httpsexamplecom"),
            ("## Notes[^1]\n\n[^1]: A note.\n", "notes"),
        ];

        for (markdown, id) in cases {
            let doc = renderer.render(markdown);
            assert_eq!(doc.headings.len(), 1, "{markdown:?}");
            assert_eq!(doc.headings[0].id, id);
            assert_outline_resolves(&doc);
        }
    }

    #[test]
    fn test_info_string_inside_fence_stays_code() {
        let renderer = MarkdownRenderer::new();
        let doc = renderer.render("```\nprint()\n```python\n## inside fence\n```\n");

        assert!(doc.headings.is_empty());
        assert!(!doc.html.contains("id=\"inside-fence\""));
        assert!(doc.html.contains("## inside fence"));
    }

    #[test]
    fn test_raw_html_is_escaped() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("<script>alert(1)</script>\n\nHi <b>there</b>.").html;

        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&lt;b&gt;there&lt;/b&gt;"));
    }

    #[test]
    fn test_toc_count_matches_pattern() {
        let renderer = MarkdownRenderer::new();
        let markdown = "# Top\n## A\n### B\n#### C\n## D\n";
        let doc = renderer.render(markdown);

        assert_eq!(doc.headings, extract_headings(markdown).collect::<Vec<_>>());
        assert_eq!(doc.headings.len(), 3);
        assert!(doc.has_toc());
    }

    #[test]
    fn test_code_block_highlighted() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```rust\nfn main() {\n    println!(\"Hello\");\n}\n```").html;

        assert!(html.contains("<pre class=\"hl-code\">"));
        assert!(html.contains("language-rust"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_untagged_code_block_is_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("```\n<b>raw</b>\n```").html;

        assert!(html.contains("<pre><code>&lt;b&gt;raw&lt;/b&gt;\n</code></pre>"));
    }

    #[test]
    fn test_indented_code_block_is_plain() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("para\n\n    let x = 1;\n").html;

        assert!(html.contains("<pre><code>let x = 1;\n</code></pre>"));
    }

    #[test]
    fn test_inline_code() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("Use `cargo test` here.").html;

        assert!(html.contains("<code>cargo test</code>"));
    }

    #[test]
    fn test_heading_inside_code_block_not_in_toc() {
        let renderer = MarkdownRenderer::new();
        let doc = renderer.render("## Shell\n\n```\n## comment\necho hi\n```\n");

        assert_eq!(doc.headings.len(), 1);
        assert!(doc.html.contains("## comment"));
    }

    #[test]
    fn test_table_rendering() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render(
            r#"| Header 1 | Header 2 |
|----------|----------|
| Cell 1   | Cell 2   |"#,
        ).html;

        assert!(html.contains("<table>"));
        assert!(html.contains("<thead>"));
        assert!(html.contains("<td>Cell 1</td>"));
    }

    #[test]
    fn test_task_list() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("- [x] Done\n- [ ] Not done").html;

        assert!(html.contains("checkbox"));
        assert!(html.contains("checked"));
    }

    #[test]
    fn test_links_and_images() {
        let renderer = MarkdownRenderer::new();
        let html = renderer.render("[site](https://example.com) ![alt text](/img.png)").html;

        assert!(html.contains("<a href=\"https://example.com\">site</a>"));
        assert!(html.contains("alt=\"alt text\""));
    }
}
