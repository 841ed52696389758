//! Blog index with tag filtering.

use folio_core::{BlogPost, SeoPage, all_tags, filter_by_tag};
use leptos::prelude::*;

use super::BackLink;
use crate::{
    components::{Icon, IconKind, TagList},
    routes::AppRoute,
    seo::use_seo,
    site::use_site,
};

#[component]
pub fn BlogListPage() -> impl IntoView {
    use_seo(|| SeoPage::titled("Writing", AppRoute::BlogList.path()));

    let site = use_site();
    let posts = StoredValue::new(site.config.posts.clone());
    let tags = all_tags(&site.config.posts);

    // Selected tag; `None` shows every post.
    let selected = RwSignal::new(None::<String>);

    let visible = Memo::new(move |_| {
        selected.with(|tag| {
            posts.with_value(|posts| {
                filter_by_tag(posts, tag.as_deref())
                    .into_iter()
                    .cloned()
                    .collect::<Vec<_>>()
            })
        })
    });

    let tag_buttons = tags
        .into_iter()
        .map(|tag| {
            let label = format!("#{tag}");
            let is_selected = {
                let tag = tag.clone();
                move || selected.with(|current| current.as_deref() == Some(tag.as_str()))
            };
            let toggle = move |_| {
                selected.update(|current| {
                    *current = match current.take() {
                        Some(previous) if previous == tag => None,
                        _ => Some(tag.clone()),
                    }
                })
            };
            view! {
              <button class="tag-filter" class:active=is_selected on:click=toggle>
                {label}
              </button>
            }
        })
        .collect_view();

    view! {
      <div class="container blog-list fade-in">
        <BackLink to=AppRoute::Home label="Back to Home" />

        <header class="list-header">
          <h1 class="page-title">"Writing"</h1>
          <p class="subtitle">"Thoughts on software engineering, architecture, and design."</p>
        </header>

        <div class="tag-filters">
          <button
            class="tag-filter"
            class:active=move || selected.with(Option::is_none)
            on:click=move |_| selected.set(None)
          >
            "All"
          </button>
          {tag_buttons}
        </div>

        <div class="post-list">
          <For
            each=move || visible.get().into_iter().enumerate()
            key=row_key
            children=|(_, post)| view! { <PostItem post=post /> }
          />
        </div>
      </div>
    }
}

/// `For` key of a listing row. Slugs may repeat, so the position is part of it.
fn row_key((index, post): &(usize, BlogPost)) -> (usize, String) {
    (*index, post.slug.clone())
}

#[component]
fn PostItem(post: BlogPost) -> impl IntoView {
    let href = AppRoute::BlogDetail(post.slug.clone()).href();

    view! {
      <a class="post-item" href=href>
        <div class="post-title-row">
          <h2 class="post-title">{post.title}</h2>
          <span class="post-date">{post.date}</span>
        </div>
        <p class="excerpt">{post.excerpt}</p>
        <div class="post-footer">
          <TagList tags=post.tags />
          <span class="read-more">
            "Read Article " <Icon kind=IconKind::ArrowRight size=14 />
          </span>
        </div>
      </a>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn post(slug: &str) -> BlogPost {
        BlogPost {
            slug: slug.to_string(),
            title: slug.to_string(),
            date: "Nov 29, 2025".to_string(),
            excerpt: String::new(),
            tags: Vec::new(),
            folder: "system_design_studies".to_string(),
        }
    }

    #[test]
    fn test_row_keys_unique_with_duplicate_slugs() {
        let rows: Vec<_> = vec![post("kafka"), post("kafka"), post("raft")]
            .into_iter()
            .enumerate()
            .collect();
        let keys: HashSet<_> = rows.iter().map(row_key).collect();
        assert_eq!(keys.len(), rows.len());
    }
}
