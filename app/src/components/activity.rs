//! GitHub contribution chart and recently pushed repositories.

use folio_fetch::{HttpFetcher, RepoSummary, fetch_repos};
use leptos::prelude::*;

use super::{Icon, IconKind};
use crate::site::use_site;

const LOAD_ERROR: &str = "Could not load GitHub data";
const NO_DESCRIPTION: &str = "No description available.";

#[component]
pub fn Activity() -> impl IntoView {
    let site = use_site();
    let github = site.config.github.clone();
    let chart_url = github.contribution_chart_url();
    let chart_alt = format!("{}'s Github Chart", github.username);

    let repos = LocalResource::new(move || {
        let github = github.clone();
        async move { fetch_repos(&HttpFetcher, &github).await }
    });

    view! {
      <section id="activity" class="section">
        <div class="container">
          <div class="section-header">
            <span class="icon-wrapper">
              <Icon kind=IconKind::GitCommit size=24 />
            </span>
            <h2 class="section-title">"Open Source Activity"</h2>
          </div>

          <div class="contributions">
            <h3 class="sub-heading">"Contribution History"</h3>
            <div class="graph-card">
              <img class="graph" src=chart_url alt=chart_alt />
            </div>
          </div>

          <h3 class="sub-heading">"Active Repos"</h3>
          <Suspense fallback=|| view! { <div class="spinner" role="status" aria-label="Loading"></div> }>
            {move || Suspend::new(async move {
              match repos.await {
                Ok(list) => {
                  view! {
                    <div class="repo-grid">
                      {list.into_iter().map(|repo| view! { <RepoCard repo=repo /> }).collect_view()}
                    </div>
                  }
                    .into_any()
                }
                Err(err) => {
                  log::error!("failed to load repositories: {err}");
                  view! { <p class="error-msg">{LOAD_ERROR}</p> }.into_any()
                }
              }
            })}
          </Suspense>
        </div>
      </section>
    }
}

#[component]
fn RepoCard(repo: RepoSummary) -> impl IntoView {
    let description = match repo.description_or_default() {
        "" => NO_DESCRIPTION.to_string(),
        text => text.to_string(),
    };
    let pushed = repo.pushed_label().unwrap_or_default();
    let language = repo.language.clone().map(|language| {
        view! {
          <span class="stat">
            <Icon kind=IconKind::Circle size=8 />
            <span>{language}</span>
          </span>
        }
    });

    view! {
      <a class="repo-card" href=repo.html_url target="_blank" rel="noopener noreferrer">
        <div class="repo-header">
          <h4 class="repo-name">{repo.name}</h4>
          <Icon kind=IconKind::ExternalLink size=16 />
        </div>
        <p class="repo-desc">{description}</p>
        <div class="repo-footer">
          <div class="stats">
            {language}
            <span class="stat">
              <Icon kind=IconKind::Star size=12 />
              <span>{repo.stargazers_count}</span>
            </span>
            <span class="stat">
              <Icon kind=IconKind::GitFork size=12 />
              <span>{repo.forks_count}</span>
            </span>
          </div>
          <span>{pushed}</span>
        </div>
      </a>
    }
}
