//! Folio Core Library
//!
//! Core types, site configuration, theme state and SEO projection for the
//! Folio portfolio site. Nothing in this crate touches the browser; the
//! `app` crate binds these types to the DOM.

pub mod config;
pub mod content;
pub mod error;
pub mod seo;
pub mod theme;

pub use config::{Config, GithubConfig, SiteConfig};
pub use content::{
    BlogPost, ExperienceItem, Profile, SocialIcon, SocialLink, all_tags, filter_by_tag,
};
pub use error::{CoreError, Result};
pub use seo::{ArticleMeta, MetaAttr, MetaTag, PageKind, SeoDefaults, SeoDocument, SeoPage};
pub use theme::{MemoryStore, PreferenceStore, THEME_STORAGE_KEY, ThemePreference, ThemeState};
