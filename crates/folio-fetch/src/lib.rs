//! Folio Fetch Library
//!
//! Network access for the portfolio frontend.
//!
//! - [`content`] - blog Markdown through an ordered fallback chain
//! - [`github`] - recently pushed repositories for the activity widget
//! - [`http`] - the [`TextFetcher`] seam and its `gloo-net` implementation

pub mod content;
pub mod github;
pub mod http;

pub use content::{BlogContentLoader, ContentSource, MARKDOWN_CONTENT_FALLBACK};
pub use github::{RepoSummary, fetch_repos, parse_repos};
pub use http::{FetchError, HttpFetcher, TextFetcher};
