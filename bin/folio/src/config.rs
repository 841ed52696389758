//! Development server settings.
//!
//! Read from the `[server]` table of `folio.toml`, then overridden by
//! `FOLIO__SERVER__*` environment variables (e.g. `FOLIO__SERVER__PORT=8080`).

use std::path::{Path, PathBuf};

use config::{ConfigError, Environment, File};
use serde::Deserialize;

const ENV_PREFIX: &str = "FOLIO";
const ENV_SEPARATOR: &str = "__";

/// Where and what the development server serves.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Port to listen on.
    pub port: u16,

    /// Directory holding the compiled site (`index.html`, wasm, assets).
    pub site_root: PathBuf,

    /// Path prefix the site is served under, `/` for the root.
    pub base_path: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            site_root: PathBuf::from("target/site"),
            base_path: "/".to_string(),
        }
    }
}

impl ServerConfig {
    /// Load settings from `path` (optional) and the process environment.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(path, env_overrides())
    }

    /// Load settings from `path` (optional) and the given environment source.
    pub fn load_with_env(path: &Path, env: Environment) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let settings = config::Config::builder()
            .set_default("server.host", defaults.host)?
            .set_default("server.port", i64::from(defaults.port))?
            .set_default("server.site_root", defaults.site_root.to_string_lossy().as_ref())?
            .set_default("server.base_path", defaults.base_path)?
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()?;

        let server: Self = settings.get("server")?;
        tracing::debug!(?server, config = %path.display(), "loaded server config");
        Ok(server)
    }

    /// Socket address to bind.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// `FOLIO__SERVER__*` environment source.
pub fn env_overrides() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .separator(ENV_SEPARATOR)
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn env(vars: &[(&str, &str)]) -> Environment {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_overrides().source(Some(map))
    }

    #[test]
    fn test_defaults_without_file() {
        let config =
            ServerConfig::load_with_env(Path::new("/nonexistent/folio.toml"), env(&[])).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_file_values() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(
            &path,
            "[server]\nhost = \"127.0.0.1\"\nport = 8080\nsite_root = \"dist\"\n",
        )
        .expect("write");

        let config = ServerConfig::load_with_env(&path, env(&[])).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:8080");
        assert_eq!(config.site_root, PathBuf::from("dist"));
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn test_env_overrides_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[server]\nport = 8080\n").expect("write");

        let config = ServerConfig::load_with_env(
            &path,
            env(&[
                ("FOLIO__SERVER__PORT", "9090"),
                ("FOLIO__SERVER__BASE_PATH", "/portfolio"),
            ]),
        )
        .unwrap();
        assert_eq!(config.port, 9090);
        assert_eq!(config.base_path, "/portfolio");
    }

    #[test]
    fn test_invalid_port() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("folio.toml");
        std::fs::write(&path, "[server]\nport = \"not-a-port\"\n").expect("write");

        assert!(ServerConfig::load_with_env(&path, env(&[])).is_err());
    }
}
