//! HTTP text fetching.

use std::future::Future;

use gloo_net::http::Request;
use thiserror::Error;

/// Errors from fetching a URL.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),

    /// Server answered with a non-success status.
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// Body was not in the expected format.
    #[error("Decode error: {0}")]
    Decode(String),
}

/// Anything that can GET a URL as text.
///
/// Implementations return `Err(FetchError::Status { .. })` for non-2xx
/// responses so callers can fall through to the next source.
pub trait TextFetcher {
    fn get_text(&self, url: &str) -> impl Future<Output = Result<String, FetchError>>;
}

/// Browser `fetch` through `gloo-net`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpFetcher;

impl TextFetcher for HttpFetcher {
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status(),
            });
        }

        response
            .text()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        let err = FetchError::Network("connection refused".to_string());
        assert!(err.to_string().contains("Network error"));

        let err = FetchError::Status {
            url: "https://example.com/a.md".to_string(),
            status: 404,
        };
        assert_eq!(err.to_string(), "HTTP 404 from https://example.com/a.md");
    }
}
