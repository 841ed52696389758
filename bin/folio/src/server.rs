//! Static file router for the compiled site.
//!
//! Files under the site root are served as-is. Extensionless paths that do
//! not exist on disk (client-side routes such as `/blogs` or `/blog/kafka`)
//! receive `index.html` so the router in the browser can take over. Missing
//! assets still answer 404, which the content loader relies on to move to its
//! next source.

use std::path::Path;

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

/// Create the router serving `site_root` under `base_path`.
pub fn create_router(site_root: &Path, base_path: &str) -> Router {
    let index = site_root.join("index.html");
    let spa_fallback = move |uri: Uri| {
        let index = index.clone();
        async move { serve_index(&index, &uri).await }
    };

    let site = ServeDir::new(site_root).fallback(spa_fallback.into_service());

    let router = match mount_point(base_path) {
        Some(base) => Router::new().nest_service(&base, site),
        None => Router::new().fallback_service(site),
    };

    router.layer(TraceLayer::new_for_http())
}

/// `"/portfolio/"` -> `Some("/portfolio")`, `"/"` -> `None`.
fn mount_point(base_path: &str) -> Option<String> {
    let trimmed = base_path.trim_matches('/');
    if trimmed.is_empty() {
        None
    } else {
        Some(format!("/{trimmed}"))
    }
}

/// True when the last path segment looks like a file name.
fn is_asset_path(path: &str) -> bool {
    path.rsplit('/')
        .next()
        .is_some_and(|segment| segment.contains('.'))
}

async fn serve_index(index: &Path, uri: &Uri) -> Response {
    if is_asset_path(uri.path()) {
        tracing::debug!(path = %uri.path(), "asset not found");
        return StatusCode::NOT_FOUND.into_response();
    }

    match tokio::fs::read_to_string(index).await {
        Ok(body) => Html(body).into_response(),
        Err(e) => {
            tracing::error!(index = %index.display(), "Failed to read index.html: {e}");
            StatusCode::NOT_FOUND.into_response()
        }
    }
}
