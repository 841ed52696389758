//! Folio App
//!
//! Leptos views for the portfolio site: the root component, routed pages and
//! the browser bindings for theme, SEO and site data.
//!
//! # Modules
//!
//! - [`components`] - Header, hero, experience, activity, article views
//! - [`pages`] - Home, blog list and blog detail pages
//! - [`routes`] - Route table and base path handling
//! - [`seo`] - Document head updates
//! - [`site`] - Embedded `site.toml`
//! - [`theme`] - `localStorage`-backed theme context

pub mod components;
pub mod pages;
pub mod routes;
pub mod seo;
pub mod site;
pub mod theme;

use leptos::prelude::*;
use leptos_meta::{Meta, provide_meta_context};
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::{
    components::{Footer, Header},
    pages::{BlogDetailPage, BlogListPage, HomePage},
    routes::{AppRoute, BASE_PATH, normalize_base},
};

const LIGHT_THEME_COLOR: &str = "#f9fafb";
const DARK_THEME_COLOR: &str = "#030712";

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    site::provide_site();
    let theme = theme::provide_theme();
    let theme_color = move || {
        if theme.theme.get().is_dark() {
            DARK_THEME_COLOR
        } else {
            LIGHT_THEME_COLOR
        }
    };

    view! {
      <Meta name="theme-color" content=theme_color />

      <Router base=normalize_base(BASE_PATH)>
        <ScrollToTop />
        <div class="app">
          <Header />
          <main class="main">
            <Routes fallback=|| view! { <Redirect path=AppRoute::Home.href() /> }>
              <Route path=path!("/") view=HomePage />
              <Route path=path!("/blogs") view=BlogListPage />
              <Route path=path!("/blog/:slug") view=BlogDetailPage />
            </Routes>
          </main>
          <Footer />
        </div>
      </Router>
    }
}

/// Reset the scroll position whenever the path changes.
#[component]
fn ScrollToTop() -> impl IntoView {
    let location = use_location();

    Effect::new(move |_| {
        location.pathname.track();
        window().scroll_to_with_x_and_y(0.0, 0.0);
    });
}
