use leptos::prelude::*;

use crate::site::use_site;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_site();
    let year = js_sys::Date::new_0().get_full_year();
    let name = site.config.profile.name.clone();

    view! {
      <footer class="site-footer">
        <p>"© " {year} " " {name}</p>
      </footer>
    }
}
