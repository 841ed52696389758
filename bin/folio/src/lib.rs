//! Folio CLI Library
//!
//! Tooling around the Folio portfolio frontend. The site itself is a
//! client-side WebAssembly app; this crate only serves the compiled output
//! locally and validates `site.toml` before a build.
//!
//! # Modules
//!
//! - [`cmd`] - Command implementations (serve, check)
//! - [`config`] - `folio.toml` server settings with environment overrides
//! - [`server`] - Static file router with single-page-app fallback
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! folio::cmd::check::run(Path::new("site.toml"), false).unwrap();
//! ```

pub mod cmd;
pub mod config;
pub mod server;

pub use config::ServerConfig;

/// Initialize tracing with the specified verbosity level.
///
/// # Arguments
///
/// * `verbose` - Verbosity level (0 = WARN, 1 = INFO, 2 = DEBUG, 3+ = TRACE)
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}
