//! Routed page views.

pub mod blog_detail;
pub mod blog_list;
pub mod home;

use leptos::prelude::*;

pub use blog_detail::BlogDetailPage;
pub use blog_list::BlogListPage;
pub use home::HomePage;

use crate::{
    components::{Icon, IconKind},
    routes::AppRoute,
};

/// "Back to ..." link at the top of the blog pages.
#[component]
fn BackLink(
    /// Where the link leads.
    to: AppRoute,
    /// Link text.
    label: &'static str,
) -> impl IntoView {
    view! {
      <a class="back-button" href=to.href()>
        <Icon kind=IconKind::ArrowLeft size=16 />
        {label}
      </a>
    }
}
