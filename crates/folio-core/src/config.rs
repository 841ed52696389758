//! Site configuration management.
//!
//! Everything the site shows that is not fetched at runtime lives in
//! `site.toml`: site metadata for SEO, the owner profile, social links, the
//! experience timeline, the blog post list and where post bodies are hosted.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{
    content::{BlogPost, ExperienceItem, Profile, SocialLink},
    error::{CoreError, Result},
};

/// Main configuration structure for Folio.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Site-wide settings.
    pub site: SiteConfig,

    /// Owner profile.
    #[serde(default)]
    pub profile: Profile,

    /// Remote content repository and GitHub activity settings.
    #[serde(default)]
    pub github: GithubConfig,

    /// Social links, rendered in order.
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Experience timeline, most recent first.
    #[serde(default)]
    pub experience: Vec<ExperienceItem>,

    /// Blog posts, in display order.
    #[serde(default)]
    pub posts: Vec<BlogPost>,
}

/// Site-wide configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Default document title.
    pub title: String,

    /// Public URL of the deployed site (e.g., "https://example.com").
    pub base_url: String,

    /// Default meta description.
    #[serde(default)]
    pub description: String,

    /// Author name, appended to page titles.
    #[serde(default)]
    pub author: String,

    /// Default social preview image.
    #[serde(default)]
    pub image: String,
}

/// Where blog Markdown lives and whose activity to show.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GithubConfig {
    pub username: String,

    #[serde(default)]
    pub repo: String,

    #[serde(default = "default_branch")]
    pub branch: String,

    /// Default folder for posts that don't name one.
    #[serde(default)]
    pub folder: String,

    /// Host serving raw repository files.
    #[serde(default = "default_raw_host")]
    pub raw_host: String,

    /// GitHub REST API host.
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// Number of recently pushed repositories to list.
    #[serde(default = "default_repo_count")]
    pub repo_count: u8,
}

fn default_branch() -> String {
    "main".to_string()
}

fn default_raw_host() -> String {
    "https://raw.githubusercontent.com".to_string()
}

fn default_api_host() -> String {
    "https://api.github.com".to_string()
}

fn default_repo_count() -> u8 {
    6
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            repo: String::new(),
            branch: default_branch(),
            folder: String::new(),
            raw_host: default_raw_host(),
            api_host: default_api_host(),
            repo_count: default_repo_count(),
        }
    }
}

impl GithubConfig {
    /// Raw-content URL of `{folder}/{slug}.md` in the configured repository.
    pub fn raw_url(&self, folder: &str, slug: &str) -> String {
        format!(
            "{}/{}/{}/{}/{}/{slug}.md",
            self.raw_host.trim_end_matches('/'),
            self.username,
            self.repo,
            self.branch,
            folder.trim_matches('/'),
        )
    }

    /// Repository listing URL, most recently pushed first.
    pub fn repos_url(&self) -> String {
        format!(
            "{}/users/{}/repos?sort=pushed&direction=desc&per_page={}",
            self.api_host.trim_end_matches('/'),
            self.username,
            self.repo_count,
        )
    }

    /// Contribution chart image for the configured user.
    pub fn contribution_chart_url(&self) -> String {
        format!("https://ghchart.rshah.org/196C2E/{}", self.username)
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CoreError::config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Toml(source) => CoreError::config_with_source(
                format!("Failed to parse config file: {}", path.display()),
                source,
            ),
            other => other,
        })
    }

    /// Parse configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Config = toml::from_str(content)?;
        config.fill_post_folders();
        config.validate()?;
        Ok(config)
    }

    fn fill_post_folders(&mut self) {
        for post in self.posts.iter_mut().filter(|p| p.folder.is_empty()) {
            post.folder = self.github.folder.clone();
        }
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<()> {
        if self.site.title.is_empty() {
            return Err(CoreError::config("site.title cannot be empty"));
        }

        if self.site.base_url.is_empty() {
            return Err(CoreError::config("site.base_url cannot be empty"));
        }

        if self.github.username.is_empty() {
            return Err(CoreError::config("github.username cannot be empty"));
        }

        if let Some(post) = self.posts.iter().find(|p| p.slug.trim().is_empty()) {
            return Err(CoreError::config(format!(
                "post \"{}\" has an empty slug",
                post.title
            )));
        }

        if self.site.base_url.ends_with('/') {
            tracing::warn!("site.base_url should not have a trailing slash");
        }

        for slug in self.duplicate_slugs() {
            tracing::warn!(slug, "duplicate post slug, only the first entry is reachable");
        }

        Ok(())
    }

    /// Slugs that appear more than once in the post list.
    pub fn duplicate_slugs(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        let mut dupes: Vec<&str> = Vec::new();
        for slug in self.posts.iter().map(|p| p.slug.as_str()) {
            if seen.contains(&slug) {
                if !dupes.contains(&slug) {
                    dupes.push(slug);
                }
            } else {
                seen.push(slug);
            }
        }
        dupes
    }

    /// Look up a post by slug. The first match in list order wins.
    pub fn find_post(&self, slug: &str) -> Option<&BlogPost> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// Get the full URL for a path.
    pub fn url_for(&self, path: &str) -> String {
        let base = self.site.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        if path.is_empty() {
            base.to_string()
        } else {
            format!("{base}/{path}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[site]
title = "Sounak Gupta | Senior Software Engineer"
base_url = "https://example.com"
description = "Backend engineer"
author = "Sounak Gupta"

[profile]
name = "Sounak"
title = "Senior Software Engineer"

[github]
username = "sounak07"
repo = "backend-engineering"
folder = "system_design_studies"

[[social]]
name = "GitHub"
url = "https://github.com/sounak07"
icon = "github"

[[posts]]
slug = "kafka_for_dummies"
title = "Kafka for Dummies"
date = "Nov 29, 2025"
excerpt = "A detailed deep dive into kafka and its components."
tags = ["Kafka", "distributed-logging"]

[[posts]]
slug = "btrees"
title = "B-Trees"
date = "Dec 1, 2025"
tags = ["databases"]
folder = "storage"
"#
        .to_string()
    }

    #[test]
    fn test_load_config() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, create_test_config()).expect("write");

        let config = Config::load(&config_path).expect("load config");

        assert_eq!(config.site.author, "Sounak Gupta");
        assert_eq!(config.profile.name, "Sounak");
        assert_eq!(config.github.branch, "main");
        assert_eq!(config.github.repo_count, 6);
        assert_eq!(config.social.len(), 1);
        assert_eq!(config.posts.len(), 2);
    }

    #[test]
    fn test_post_folder_defaults_to_github_folder() {
        let config = Config::from_toml_str(&create_test_config()).unwrap();
        assert_eq!(config.posts[0].folder, "system_design_studies");
        assert_eq!(config.posts[1].folder, "storage");
    }

    #[test]
    fn test_find_post() {
        let config = Config::from_toml_str(&create_test_config()).unwrap();
        let post = config.find_post("kafka_for_dummies").expect("post");
        assert_eq!(post.title, "Kafka for Dummies");
        assert!(config.find_post("missing").is_none());
    }

    #[test]
    fn test_duplicate_slugs_first_match_wins() {
        let content = format!(
            "{}\n[[posts]]\nslug = \"kafka_for_dummies\"\ntitle = \"Second\"\ndate = \"Jan 1, 2026\"\n",
            create_test_config()
        );
        let config = Config::from_toml_str(&content).unwrap();

        assert_eq!(config.duplicate_slugs(), vec!["kafka_for_dummies"]);
        assert_eq!(
            config.find_post("kafka_for_dummies").unwrap().title,
            "Kafka for Dummies"
        );
    }

    #[test]
    fn test_raw_url() {
        let config = Config::from_toml_str(&create_test_config()).unwrap();
        assert_eq!(
            config.github.raw_url("system_design_studies", "kafka_for_dummies"),
            "https://raw.githubusercontent.com/sounak07/backend-engineering/main/system_design_studies/kafka_for_dummies.md"
        );
    }

    #[test]
    fn test_repos_url() {
        let config = Config::from_toml_str(&create_test_config()).unwrap();
        assert_eq!(
            config.github.repos_url(),
            "https://api.github.com/users/sounak07/repos?sort=pushed&direction=desc&per_page=6"
        );
    }

    #[test]
    fn test_url_for() {
        let config = Config::from_toml_str(&create_test_config()).unwrap();
        assert_eq!(config.url_for("/blog/x"), "https://example.com/blog/x");
        assert_eq!(config.url_for("blog/x"), "https://example.com/blog/x");
        assert_eq!(config.url_for("/"), "https://example.com");
    }

    #[test]
    fn test_config_validation_empty_title() {
        let content = create_test_config().replacen(
            "title = \"Sounak Gupta | Senior Software Engineer\"",
            "title = \"\"",
            1,
        );
        let result = Config::from_toml_str(&content);
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("title cannot be empty")
        );
    }

    #[test]
    fn test_config_validation_empty_slug() {
        let content = create_test_config().replace("slug = \"btrees\"", "slug = \"\"");
        let err = Config::from_toml_str(&content).unwrap_err();
        assert!(err.to_string().contains("empty slug"));
    }

    #[test]
    fn test_config_not_found() {
        let result = Config::load(Path::new("/nonexistent/site.toml"));
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not found"));
    }

    #[test]
    fn test_config_parse_error_names_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let config_path = dir.path().join("site.toml");
        std::fs::write(&config_path, "[site\ntitle = ").expect("write");

        let err = Config::load(&config_path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
