//! Single blog post.

use folio_core::{BlogPost, SeoPage};
use folio_fetch::{BlogContentLoader, HttpFetcher};
use folio_parser::RenderedDocument;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::BackLink;
use crate::{
    components::{Icon, IconKind, LoadingDots, MarkdownArticle, TagList, markdown::render_markdown},
    routes::{AppRoute, BASE_PATH, normalize_base},
    seo::use_seo,
    site::use_site,
};

#[component]
pub fn BlogDetailPage() -> impl IntoView {
    let site = use_site();
    let params = use_params_map();

    let slug = Memo::new(move |_| params.read().get("slug").unwrap_or_default());
    let config = site.config.clone();
    let post = Memo::new(move |_| slug.with(|slug| config.find_post(slug).cloned()));

    let author = site.config.site.author.clone();
    use_seo(move || {
        post.get()
            .map(|post| SeoPage::for_post(&post, &author))
            .unwrap_or_default()
    });

    let loader = BlogContentLoader::new(HttpFetcher, site.config.github.clone())
        .with_base_path(&normalize_base(BASE_PATH));
    let content = LocalResource::new(move || {
        let post = post.get();
        let loader = loader.clone();
        async move {
            let post = post?;
            let markdown = loader.fetch_blog_content(&post.slug, &post.folder).await;
            Some(render_markdown(&markdown))
        }
    });

    view! {
      <div class="container blog-detail fade-in">
        {move || match post.get() {
          Some(post) => view! { <PostView post=post content=content /> }.into_any(),
          None => view! { <NotFound /> }.into_any(),
        }}
      </div>
    }
}

#[component]
fn PostView(post: BlogPost, content: LocalResource<Option<RenderedDocument>>) -> impl IntoView {
    view! {
      <BackLink to=AppRoute::BlogList label="Back to Blogs" />

      <header class="detail-header">
        <div class="meta-info">
          <span class="date">
            <Icon kind=IconKind::Calendar size=14 />
            {post.date}
          </span>
        </div>
        <h1 class="detail-title">{post.title}</h1>
        <TagList tags=post.tags />
      </header>

      <div class="article-body">
        <Suspense fallback=|| view! { <LoadingDots /> }>
          {move || Suspend::new(async move {
            content.await.map(|document| view! { <MarkdownArticle document=document /> })
          })}
        </Suspense>
      </div>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
      <BackLink to=AppRoute::Home label="Back to Home" />
      <p class="not-found">"Blog post not found."</p>
    }
}
