//! Blog content loading.
//!
//! A post body is looked up in an ordered list of sources: the raw file in
//! the remote content repository, then the same path served next to the
//! site, then a fixed Markdown error note. Sources are tried one after the
//! other and the first success wins, so callers always get renderable text.

use folio_core::GithubConfig;

use crate::http::{FetchError, TextFetcher};

/// Markdown shown when no source has the post.
pub const MARKDOWN_CONTENT_FALLBACK: &str = "
## Error

Error fetching blogs! Please try again later.
";

/// One place a post body may be fetched from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    /// Raw file in the remote content repository.
    Remote(String),
    /// File served alongside the site.
    Local(String),
}

impl ContentSource {
    pub fn url(&self) -> &str {
        match self {
            Self::Remote(url) | Self::Local(url) => url,
        }
    }

    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Remote(_) => "remote",
            Self::Local(_) => "local",
        }
    }
}

/// Fetches blog Markdown through the source chain.
#[derive(Debug, Clone)]
pub struct BlogContentLoader<F> {
    fetcher: F,
    github: GithubConfig,
    base_path: String,
}

impl<F: TextFetcher> BlogContentLoader<F> {
    /// Create a loader serving local fallbacks from the site root.
    pub fn new(fetcher: F, github: GithubConfig) -> Self {
        Self {
            fetcher,
            github,
            base_path: String::new(),
        }
    }

    /// Serve local fallbacks under `base_path` (e.g. "/portfolio").
    pub fn with_base_path(mut self, base_path: &str) -> Self {
        self.base_path = base_path.trim_end_matches('/').to_string();
        self
    }

    /// Get the underlying fetcher.
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Sources for a post, in the order they are tried.
    pub fn sources(&self, slug: &str, folder: &str) -> Vec<ContentSource> {
        let folder = folder.trim_matches('/');
        vec![
            ContentSource::Remote(self.github.raw_url(folder, slug)),
            ContentSource::Local(format!("{}/{folder}/{slug}.md", self.base_path)),
        ]
    }

    /// Try `sources` in order and return the first body fetched.
    ///
    /// Each attempt starts only after the previous one has finished. The
    /// error of the last attempt is returned when all fail.
    pub async fn first_success(&self, sources: &[ContentSource]) -> Result<String, FetchError> {
        let mut last_error = FetchError::Network("no content sources".to_string());

        for source in sources {
            match self.fetcher.get_text(source.url()).await {
                Ok(body) => {
                    tracing::debug!(source = source.label(), url = source.url(), "fetched post");
                    return Ok(body);
                }
                Err(err) => {
                    tracing::warn!(
                        source = source.label(),
                        url = source.url(),
                        error = %err,
                        "failed to fetch post"
                    );
                    last_error = err;
                }
            }
        }

        Err(last_error)
    }

    /// Fetch the Markdown for `slug` in `folder`.
    ///
    /// Never fails: if every source misses, the fixed fallback note is returned.
    pub async fn fetch_blog_content(&self, slug: &str, folder: &str) -> String {
        let sources = self.sources(slug, folder);
        match self.first_success(&sources).await {
            Ok(body) => body,
            Err(err) => {
                tracing::warn!(slug, error = %err, "falling back to placeholder content");
                MARKDOWN_CONTENT_FALLBACK.to_string()
            }
        }
    }
}
