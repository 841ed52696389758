//! Check command - validate site.toml and the bundled posts

use std::path::{Path, PathBuf};

use color_eyre::eyre::{Result, bail};
use folio_core::Config;

/// Directory, next to `site.toml`, whose files are copied into the build.
const PUBLIC_DIR: &str = "public";

/// Validation result.
#[derive(Debug, Default)]
struct ValidationResult {
    errors: Vec<String>,
    warnings: Vec<String>,
}

impl ValidationResult {
    fn add_error(&mut self, msg: impl Into<String>) {
        self.errors.push(msg.into());
    }

    fn add_warning(&mut self, msg: impl Into<String>) {
        self.warnings.push(msg.into());
    }

    fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Run the check command.
///
/// Validates the site configuration, its posts, and their local fallback copies.
pub fn run(site_path: &Path, strict: bool) -> Result<()> {
    tracing::info!(?site_path, strict, "Checking site configuration");

    let mut result = ValidationResult::default();

    println!("Checking configuration...");
    let config = match Config::load(site_path) {
        Ok(c) => {
            println!("  ✓ Configuration valid");
            Some(c)
        }
        Err(e) => {
            result.add_error(format!("Configuration error: {e}"));
            println!("  ✗ Configuration invalid: {e}");
            None
        }
    };

    if let Some(ref cfg) = config {
        println!("\nChecking configuration values...");
        check_config_values(cfg, &mut result);

        println!("\nChecking posts...");
        check_posts(cfg, &mut result);

        println!("\nChecking local post copies...");
        let public_dir = site_path
            .parent()
            .unwrap_or_else(|| Path::new("."))
            .join(PUBLIC_DIR);
        check_local_copies(cfg, &public_dir, &mut result);
    }

    println!();
    println!("Summary:");
    println!("  Errors:   {}", result.errors.len());
    println!("  Warnings: {}", result.warnings.len());

    if result.has_errors() {
        println!();
        println!("Errors:");
        for err in &result.errors {
            println!("  ✗ {err}");
        }
    }

    if result.has_warnings() {
        println!();
        println!("Warnings:");
        for warn in &result.warnings {
            println!("  ⚠ {warn}");
        }
    }

    if result.has_errors() {
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    if strict && result.has_warnings() {
        bail!(
            "Validation failed with {} warning(s) (strict mode)",
            result.warnings.len()
        );
    }

    println!();
    println!("✓ All checks passed");

    Ok(())
}

fn check_config_values(config: &Config, result: &mut ValidationResult) {
    if config.site.base_url.ends_with('/') {
        result.add_warning("site.base_url should not end with a trailing slash");
    }

    if !config.site.base_url.starts_with("https://") && !config.site.base_url.starts_with("http://")
    {
        result.add_warning(format!(
            "site.base_url '{}' is not an absolute URL",
            config.site.base_url
        ));
    }

    if config.site.description.is_empty() {
        result.add_warning("site.description is empty; search results will show no summary");
    }

    if config.profile.name.is_empty() {
        result.add_error("profile.name cannot be empty");
    }

    for link in config.social.iter().filter(|l| l.url.is_empty()) {
        result.add_error(format!("social link '{}' has no url", link.name));
    }
}

fn check_posts(config: &Config, result: &mut ValidationResult) {
    for slug in config.duplicate_slugs() {
        result.add_warning(format!(
            "Duplicate post slug '{slug}': only the first entry is reachable"
        ));
    }

    for post in &config.posts {
        if post.published().is_none() {
            result.add_warning(format!(
                "Post '{}' has a date that cannot be parsed: '{}'",
                post.slug, post.date
            ));
        }

        if post.excerpt.trim().is_empty() {
            result.add_warning(format!("Post '{}' has no excerpt", post.slug));
        }
    }

    println!("  {} post(s) checked", config.posts.len());
}

fn check_local_copies(config: &Config, public_dir: &Path, result: &mut ValidationResult) {
    for post in &config.posts {
        let path = local_copy_path(public_dir, &post.folder, &post.slug);
        if !path.is_file() {
            result.add_warning(format!(
                "Post '{}' has no local copy at {}; only the remote source will be tried",
                post.slug,
                path.display()
            ));
        }
    }
}

fn local_copy_path(public_dir: &Path, folder: &str, slug: &str) -> PathBuf {
    public_dir
        .join(folder.trim_matches('/'))
        .join(format!("{slug}.md"))
}
