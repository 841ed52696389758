//! Serve command - host the compiled site locally.

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Context, Result, bail};
use tracing::info;

use crate::{config::ServerConfig, server::create_router};

/// Command-line overrides applied on top of `folio.toml`.
#[derive(Debug, Clone, Default)]
pub struct ServeOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub site_root: Option<PathBuf>,
    pub base_path: Option<String>,
}

impl ServeOverrides {
    /// Apply the overrides that were given.
    pub fn apply(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(site_root) = self.site_root {
            config.site_root = site_root;
        }
        if let Some(base_path) = self.base_path {
            config.base_path = base_path;
        }
        config
    }
}

/// Run the serve command.
pub async fn run(config_path: &Path, overrides: ServeOverrides) -> Result<()> {
    let config = ServerConfig::load(config_path)
        .wrap_err_with(|| format!("Failed to load {}", config_path.display()))?;
    let config = overrides.apply(config);

    if !config.site_root.join("index.html").is_file() {
        bail!(
            "No index.html in {}. Build the frontend first (cargo leptos build --release).",
            config.site_root.display()
        );
    }

    info!(
        site_root = %config.site_root.display(),
        base_path = %config.base_path,
        "starting server"
    );

    let app = create_router(&config.site_root, &config.base_path);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .wrap_err_with(|| format!("Failed to bind to {addr}"))?;

    println!("Serving {} at http://{addr}", config.site_root.display());

    axum::serve(listener, app).await.wrap_err("Server error")?;

    Ok(())
}
