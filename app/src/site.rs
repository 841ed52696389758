//! Site data embedded at build time.

use std::sync::Arc;

use folio_core::{Config, SeoDefaults};
use leptos::prelude::*;

/// `site.toml`, compiled into the binary.
pub const SITE_TOML: &str = include_str!("../../site.toml");

/// Site configuration shared with every view.
#[derive(Debug, Clone)]
pub struct SiteContext {
    pub config: Arc<Config>,
    pub seo: Arc<SeoDefaults>,
}

impl SiteContext {
    pub fn new(config: Config) -> Self {
        let seo = SeoDefaults::from(&config);
        Self {
            config: Arc::new(config),
            seo: Arc::new(seo),
        }
    }
}

/// Parse the embedded configuration, or fall back to defaults.
pub fn load_site() -> Config {
    match Config::from_toml_str(SITE_TOML) {
        Ok(config) => config,
        Err(err) => {
            log::error!("invalid embedded site.toml, rendering defaults: {err}");
            Config::default()
        }
    }
}

/// Load the site and provide it as context.
pub fn provide_site() -> SiteContext {
    let site = SiteContext::new(load_site());
    provide_context(site.clone());
    site
}

/// Site context provided by the root component.
pub fn use_site() -> SiteContext {
    expect_context::<SiteContext>()
}

#[cfg(test)]
mod tests {
    use folio_core::SocialIcon;

    use super::*;
    use crate::routes::AppRoute;

    #[test]
    fn test_embedded_site_is_valid() {
        let config = Config::from_toml_str(SITE_TOML).expect("site.toml parses");

        assert!(!config.profile.name.is_empty());
        assert!(config.duplicate_slugs().is_empty());
        assert!(config.posts.iter().all(|p| p.published().is_some()));
        assert!(config.social.iter().any(|l| l.icon == SocialIcon::Github));
    }

    #[test]
    fn test_kafka_post_resolves() {
        let config = load_site();
        let Some(AppRoute::BlogDetail(slug)) = AppRoute::from_path("/blog/kafka_for_dummies")
        else {
            panic!("expected blog detail route");
        };

        let post = config.find_post(&slug).expect("post exists");
        assert_eq!(post.title, "Kafka for Dummies");
        assert!(
            config
                .github
                .raw_url(&post.folder, &post.slug)
                .ends_with("/kafka_for_dummies.md")
        );
    }

    #[test]
    fn test_seo_defaults_from_site() {
        let site = SiteContext::new(load_site());
        let doc = site.seo.default_document();
        assert_eq!(doc.title, site.config.site.title);
        assert_eq!(doc.canonical, site.config.url_for("/"));
    }
}
