//! Work history timeline.

use folio_core::ExperienceItem;
use leptos::prelude::*;

use crate::site::use_site;

#[component]
pub fn Experience() -> impl IntoView {
    let site = use_site();
    let items = StoredValue::new(site.config.experience.clone());

    view! {
      <section id="experience" class="section">
        <div class="container">
          <h2 class="section-title">"journey so far"</h2>
          <ul class="experience-list">
            <For
              each=move || items.get_value()
              key=|item| item.id.clone()
              children=move |item| view! { <ExperienceEntry item=item /> }
            />
          </ul>
        </div>
      </section>
    }
}

#[component]
fn ExperienceEntry(item: ExperienceItem) -> impl IntoView {
    let role_line = item.role_line();
    let logo = (!item.logo.is_empty()).then(|| {
        view! {
          <div class="company-logo">
            <img src=item.logo.clone() alt=item.company.clone() />
          </div>
        }
    });

    view! {
      <li class="experience-item">
        {logo}
        <div class="experience-content">
          <h3 class="company">{item.company}</h3>
          <p class="role">{role_line}</p>
        </div>
        <div class="period">
          <span>{item.period}</span>
        </div>
      </li>
    }
}
