//! Rendered Markdown article with outline and highlight styles.

use std::sync::OnceLock;

use folio_parser::{MarkdownRenderer, RenderedDocument};
use leptos::prelude::*;

use super::TableOfContents;
use crate::theme::use_theme;

/// Shared renderer. Loading syntect's bundled syntaxes is expensive, so it
/// happens once per page load.
pub fn renderer() -> &'static MarkdownRenderer {
    static RENDERER: OnceLock<MarkdownRenderer> = OnceLock::new();
    RENDERER.get_or_init(MarkdownRenderer::new)
}

/// Render `markdown` with the shared renderer.
pub fn render_markdown(markdown: &str) -> RenderedDocument {
    renderer().render(markdown)
}

#[component]
pub fn MarkdownArticle(
    /// Rendered body and outline.
    document: RenderedDocument,
) -> impl IntoView {
    let theme = use_theme();

    let highlight_css = Memo::new(move |_| {
        renderer()
            .highlighter()
            .stylesheet(theme.theme.get())
            .unwrap_or_else(|err| {
                log::warn!("no highlight stylesheet: {err}");
                String::new()
            })
    });

    let has_toc = document.has_toc();
    let RenderedDocument { html, headings } = document;
    let toc = has_toc.then(|| view! { <TableOfContents headings=headings /> });

    view! {
      <style>{move || highlight_css.get()}</style>
      <div class="article-layout" class:with-toc=has_toc>
        <aside class="article-aside">{toc}</aside>
        <article class="prose" inner_html=html></article>
      </div>
    }
}
