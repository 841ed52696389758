//! Shared view components.

pub mod activity;
pub mod experience;
pub mod footer;
pub mod header;
pub mod hero;
pub mod icons;
pub mod markdown;
pub mod toc;

use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

pub use activity::Activity;
pub use experience::Experience;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icons::{Icon, IconKind};
pub use markdown::MarkdownArticle;
pub use toc::TableOfContents;

/// Smoothly scroll the element with `id` into view, if it exists.
pub(crate) fn scroll_to_id(id: &str) {
    let Some(element) = document().get_element_by_id(id) else {
        log::debug!("no element with id {id}");
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Three bouncing dots shown while content loads.
#[component]
pub fn LoadingDots() -> impl IntoView {
    view! {
      <div class="loading-dots" role="status" aria-label="Loading">
        <span class="dot"></span>
        <span class="dot"></span>
        <span class="dot"></span>
      </div>
    }
}

/// `#tag` chips.
#[component]
pub fn TagList(
    /// Tags in display order.
    tags: Vec<String>,
) -> impl IntoView {
    view! {
      <div class="tag-list">
        {tags.into_iter().map(|tag| view! { <span class="tag">"#" {tag}</span> }).collect_view()}
      </div>
    }
}
