//! Table of contents component.

use folio_parser::HeadingItem;
use leptos::prelude::*;

use super::scroll_to_id;

/// Outline of an article's level-2 and level-3 headings.
///
/// Entries are keyed by position since two headings may share an id.
#[component]
pub fn TableOfContents(
    /// Headings in document order.
    headings: Vec<HeadingItem>,
) -> impl IntoView {
    let entries = StoredValue::new(headings.into_iter().enumerate().collect::<Vec<_>>());

    view! {
      <nav class="toc" aria-label="Table of contents">
        <h2 class="toc-title">"On this page"</h2>
        <ul class="toc-list">
          <For
            each=move || entries.get_value()
            key=|(index, _)| *index
            children=move |(_, heading)| {
              let level_class = format!("toc-level-{}", heading.level);
              let href = heading.href();
              let HeadingItem { id, text, .. } = heading;
              view! {
                <li class=level_class>
                  <a
                    href=href
                    class="toc-link"
                    on:click=move |ev| {
                      ev.prevent_default();
                      scroll_to_id(&id);
                    }
                  >
                    {text}
                  </a>
                </li>
              }
            }
          />
        </ul>
      </nav>
    }
}
