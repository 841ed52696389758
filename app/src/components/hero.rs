//! Profile introduction with social links.

use leptos::prelude::*;

use super::{Icon, IconKind};
use crate::{routes::AppRoute, site::use_site};

#[component]
pub fn Hero() -> impl IntoView {
    let site = use_site();
    let profile = &site.config.profile;

    let greeting = format!("hi, {} here", profile.name.to_lowercase());
    let tldr = format!("tldr; {}.", profile.tldr().to_lowercase());

    let social = site
        .config
        .social
        .iter()
        .map(|link| {
            view! {
              <a
                class="social-link"
                href=link.url.clone()
                target="_blank"
                rel="noopener noreferrer"
                aria-label=link.name.clone()
              >
                <Icon kind=IconKind::Social(link.icon) />
              </a>
            }
        })
        .collect_view();

    let about = profile
        .about
        .iter()
        .map(|paragraph| view! { <p class="bio">{paragraph.clone()}</p> })
        .collect_view();

    let avatar = (!profile.avatar.is_empty()).then(|| {
        view! {
          <div class="avatar">
            <img src=profile.avatar.clone() alt=profile.name.clone() />
          </div>
        }
    });

    view! {
      <section class="hero">
        <div class="hero-header">
          <div class="hero-content">
            <h1 class="hero-title">{greeting}</h1>
            <div class="social-links">{social}</div>
          </div>
          {avatar}
        </div>

        <div class="about">
          <h2 class="about-heading">"about"</h2>
          <p class="bio">{tldr}</p>
          {about}
          <p class="bio">
            "read me blogs, " <a class="text-link" href=AppRoute::BlogList.href()>"here"</a> "."
          </p>
        </div>
      </section>
    }
}
