use folio_core::SeoPage;
use leptos::prelude::*;

use crate::{
    components::{Activity, Experience, Hero},
    seo::use_seo,
};

/// Profile, experience timeline and GitHub activity.
#[component]
pub fn HomePage() -> impl IntoView {
    use_seo(SeoPage::website);

    view! {
      <div class="page fade-in">
        <Hero />
        <Experience />
        <Activity />
      </div>
    }
}
