//! Fixed site header with navigation, theme toggle and mobile menu.

use std::time::Duration;

use leptos::{ev, prelude::*};
use leptos_router::hooks::{use_location, use_navigate};

use super::{Icon, IconKind, scroll_to_id};
use crate::{
    routes::{AppRoute, BASE_PATH, normalize_base, strip_base},
    site::use_site,
    theme::use_theme,
};

/// Scroll offset after which the header gets a solid background.
const SCROLL_THRESHOLD: f64 = 20.0;

/// Time the home page gets to mount before scrolling to one of its sections.
const SECTION_SCROLL_DELAY: Duration = Duration::from_millis(100);

/// Where a navigation entry leads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Home,
    /// A section of the home page, by element id.
    Section(&'static str),
    Blogs,
}

impl NavTarget {
    /// Whether the entry is highlighted while `current` is shown.
    pub fn is_active(self, current: Option<&AppRoute>) -> bool {
        match self {
            Self::Home => current == Some(&AppRoute::Home),
            Self::Blogs => current.is_some_and(AppRoute::is_blog),
            Self::Section(_) => false,
        }
    }
}

/// Header navigation entries, in display order.
pub const NAV_ITEMS: [(&str, NavTarget); 4] = [
    ("Home", NavTarget::Home),
    ("Experience", NavTarget::Section("experience")),
    ("Activity", NavTarget::Section("activity")),
    ("Blogs", NavTarget::Blogs),
];

#[component]
pub fn Header() -> impl IntoView {
    let site = use_site();
    let theme = use_theme();
    let location = use_location();
    let navigate = use_navigate();
    let base = normalize_base(BASE_PATH);

    let current = Memo::new(move |_| {
        let pathname = location.pathname.get();
        AppRoute::from_path(strip_base(&pathname, &base))
    });

    let (scrolled, set_scrolled) = signal(false);
    let (menu_open, set_menu_open) = signal(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let offset = window().scroll_y().unwrap_or_default();
        set_scrolled.set(offset > SCROLL_THRESHOLD);
    });
    on_cleanup(move || handle.remove());

    let go = move |target: NavTarget| {
        set_menu_open.set(false);
        match target {
            NavTarget::Home => navigate(&AppRoute::Home.href(), Default::default()),
            NavTarget::Blogs => navigate(&AppRoute::BlogList.href(), Default::default()),
            NavTarget::Section(id) if current.get_untracked() == Some(AppRoute::Home) => {
                scroll_to_id(id)
            }
            NavTarget::Section(id) => {
                navigate(&AppRoute::Home.href(), Default::default());
                set_timeout(move || scroll_to_id(id), SECTION_SCROLL_DELAY);
            }
        }
    };

    let logo = site
        .config
        .profile
        .name
        .chars()
        .next()
        .map(|initial| format!("{initial}."))
        .unwrap_or_default();

    let go_home = go.clone();
    let desktop_nav = nav_buttons("nav-link", current, go.clone());
    let mobile_nav = nav_buttons("mobile-nav-link", current, go);

    view! {
      <header class="site-header" class:solid=move || scrolled.get() || menu_open.get()>
        <div class="header-content">
          <button class="logo" on:click=move |_| go_home(NavTarget::Home)>
            {logo}
          </button>

          <div class="nav-group">
            <nav class="desktop-nav" aria-label="Main navigation">
              {desktop_nav}
            </nav>

            <button
              class="icon-button"
              aria-label="Toggle Dark Mode"
              on:click=move |_| theme.toggle.run(())
            >
              {move || {
                let kind = if theme.theme.get().is_dark() { IconKind::Sun } else { IconKind::Moon };
                view! { <Icon kind=kind /> }
              }}
            </button>

            <button
              class="icon-button mobile-menu-button"
              aria-label="Toggle Menu"
              aria-expanded=move || menu_open.get().to_string()
              on:click=move |_| set_menu_open.update(|open| *open = !*open)
            >
              {move || {
                let kind = if menu_open.get() { IconKind::Close } else { IconKind::Menu };
                view! { <Icon kind=kind size=24 /> }
              }}
            </button>
          </div>
        </div>

        <nav class="mobile-menu" hidden=move || !menu_open.get() aria-label="Mobile navigation">
          {mobile_nav}
        </nav>
      </header>
    }
}

fn nav_buttons<F>(
    class: &'static str,
    current: Memo<Option<AppRoute>>,
    go: F,
) -> impl IntoView
where
    F: Fn(NavTarget) + Clone + 'static,
{
    NAV_ITEMS
        .into_iter()
        .map(|(label, target)| {
            let go = go.clone();
            view! {
              <button
                class=class
                class:active=move || current.with(|route| target.is_active(route.as_ref()))
                on:click=move |_| go(target)
              >
                {label}
              </button>
            }
        })
        .collect_view()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_active_state() {
        let home = AppRoute::Home;
        let list = AppRoute::BlogList;
        let detail = AppRoute::BlogDetail("kafka_for_dummies".to_string());

        assert!(NavTarget::Home.is_active(Some(&home)));
        assert!(!NavTarget::Home.is_active(Some(&list)));
        assert!(NavTarget::Blogs.is_active(Some(&list)));
        assert!(NavTarget::Blogs.is_active(Some(&detail)));
        assert!(!NavTarget::Blogs.is_active(None));
        assert!(!NavTarget::Section("experience").is_active(Some(&home)));
    }

    #[test]
    fn test_sections_are_home_anchors() {
        let sections: Vec<_> = NAV_ITEMS
            .iter()
            .filter_map(|(_, target)| match target {
                NavTarget::Section(id) => Some(*id),
                _ => None,
            })
            .collect();
        assert_eq!(sections, vec!["experience", "activity"]);
    }
}
