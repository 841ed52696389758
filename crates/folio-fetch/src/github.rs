//! GitHub activity widget data.

use chrono::{DateTime, Utc};
use folio_core::GithubConfig;
use serde::{Deserialize, Serialize};

use crate::http::{FetchError, TextFetcher};

/// The subset of a GitHub repository listing the activity widget shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoSummary {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub html_url: String,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub pushed_at: Option<DateTime<Utc>>,
}

impl RepoSummary {
    /// Description, or an empty string when the repository has none.
    pub fn description_or_default(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// Last push formatted like "Nov 9, 2025".
    pub fn pushed_label(&self) -> Option<String> {
        self.pushed_at
            .map(|pushed| pushed.format("%b %-d, %Y").to_string())
    }
}

/// Decode a `GET /users/{user}/repos` response body.
pub fn parse_repos(body: &str) -> Result<Vec<RepoSummary>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Fetch the most recently pushed repositories of the configured user.
pub async fn fetch_repos<F: TextFetcher>(
    fetcher: &F,
    github: &GithubConfig,
) -> Result<Vec<RepoSummary>, FetchError> {
    let url = github.repos_url();
    tracing::debug!(%url, "fetching repositories");

    let body = fetcher.get_text(&url).await?;
    let repos = parse_repos(&body)?;

    tracing::debug!(count = repos.len(), "fetched repositories");
    Ok(repos)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BODY: &str = r#"[
        {
            "id": 1,
            "name": "backend-engineering",
            "description": "Notes on distributed systems",
            "html_url": "https://github.com/sounak07/backend-engineering",
            "stargazers_count": 12,
            "forks_count": 3,
            "language": null,
            "pushed_at": "2025-11-09T10:00:00Z",
            "private": false
        },
        {
            "id": 2,
            "name": "dotfiles",
            "description": null,
            "html_url": "https://github.com/sounak07/dotfiles",
            "stargazers_count": 0,
            "forks_count": 0,
            "language": "Shell",
            "pushed_at": null
        }
    ]"#;

    struct StaticFetcher(Result<String, FetchError>);

    impl TextFetcher for StaticFetcher {
        async fn get_text(&self, _url: &str) -> Result<String, FetchError> {
            self.0.clone()
        }
    }

    #[test]
    fn test_parse_repos() {
        let repos = parse_repos(BODY).unwrap();

        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].name, "backend-engineering");
        assert_eq!(repos[0].stargazers_count, 12);
        assert_eq!(repos[0].pushed_label().as_deref(), Some("Nov 9, 2025"));
        assert_eq!(repos[1].description_or_default(), "");
        assert_eq!(repos[1].language.as_deref(), Some("Shell"));
        assert_eq!(repos[1].pushed_label(), None);
    }

    #[test]
    fn test_parse_repos_rejects_garbage() {
        assert!(matches!(
            parse_repos("{\"message\":\"API rate limit exceeded\"}"),
            Err(FetchError::Decode(_))
        ));
    }

    #[tokio::test]
    async fn test_fetch_repos() {
        let fetcher = StaticFetcher(Ok(BODY.to_string()));
        let repos = fetch_repos(&fetcher, &GithubConfig::default()).await.unwrap();
        assert_eq!(repos.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_repos_propagates_status() {
        let fetcher = StaticFetcher(Err(FetchError::Status {
            url: "https://api.github.com/users/x/repos".to_string(),
            status: 403,
        }));

        let err = fetch_repos(&fetcher, &GithubConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 403, .. }));
    }
}
