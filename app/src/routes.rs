//! Client-side routes.

use std::fmt;

/// Router base path, set at build time through `FOLIO_BASE_PATH`.
pub const BASE_PATH: &str = match option_env!("FOLIO_BASE_PATH") {
    Some(path) => path,
    None => "/",
};

/// The views the router can show.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AppRoute {
    Home,
    BlogList,
    BlogDetail(String),
}

impl AppRoute {
    /// Resolve a path relative to the router base.
    ///
    /// Returns `None` for anything the router does not know; those paths
    /// redirect home.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Some(Self::Home),
            ["blogs"] => Some(Self::BlogList),
            ["blog", slug] => Some(Self::BlogDetail((*slug).to_string())),
            _ => None,
        }
    }

    /// Path of this route relative to the router base.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::BlogList => "/blogs".to_string(),
            Self::BlogDetail(slug) => format!("/blog/{slug}"),
        }
    }

    /// Browser path of this route under [`BASE_PATH`].
    pub fn href(&self) -> String {
        join_base(&normalize_base(BASE_PATH), &self.path())
    }

    /// Whether this is one of the blog views.
    pub fn is_blog(&self) -> bool {
        matches!(self, Self::BlogList | Self::BlogDetail(_))
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Normalize a base path to `""` or `"/segment"` without a trailing slash.
pub fn normalize_base(base: &str) -> String {
    let trimmed = base.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}

/// Prefix a route path with a normalized base.
pub fn join_base(base: &str, path: &str) -> String {
    match (base, path) {
        ("", path) => path.to_string(),
        (base, "/") => format!("{base}/"),
        (base, path) => format!("{base}{path}"),
    }
}

/// Remove the router base from a browser path.
pub fn strip_base<'a>(path: &'a str, base: &str) -> &'a str {
    if base.is_empty() {
        return path;
    }
    match path.strip_prefix(base) {
        Some("" | "/") => "/",
        Some(rest) if rest.starts_with('/') => rest,
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(AppRoute::from_path("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path(""), Some(AppRoute::Home));
        assert_eq!(AppRoute::from_path("/blogs"), Some(AppRoute::BlogList));
        assert_eq!(AppRoute::from_path("/blogs/"), Some(AppRoute::BlogList));
        assert_eq!(
            AppRoute::from_path("/blog/kafka_for_dummies"),
            Some(AppRoute::BlogDetail("kafka_for_dummies".to_string()))
        );
        assert_eq!(
            AppRoute::from_path("/blog/a#why-rsc"),
            Some(AppRoute::BlogDetail("a".to_string()))
        );
    }

    #[test]
    fn test_unknown_paths() {
        assert_eq!(AppRoute::from_path("/about"), None);
        assert_eq!(AppRoute::from_path("/blog"), None);
        assert_eq!(AppRoute::from_path("/blog/a/b"), None);
    }

    #[test]
    fn test_path_round_trip() {
        for route in [
            AppRoute::Home,
            AppRoute::BlogList,
            AppRoute::BlogDetail("kafka_for_dummies".to_string()),
        ] {
            assert_eq!(AppRoute::from_path(&route.path()), Some(route));
        }
    }

    #[test]
    fn test_is_blog() {
        assert!(!AppRoute::Home.is_blog());
        assert!(AppRoute::BlogList.is_blog());
        assert!(AppRoute::BlogDetail("x".to_string()).is_blog());
    }

    #[test]
    fn test_normalize_base() {
        assert_eq!(normalize_base("/"), "");
        assert_eq!(normalize_base(""), "");
        assert_eq!(normalize_base("/portfolio/"), "/portfolio");
        assert_eq!(normalize_base("portfolio"), "/portfolio");
    }

    #[test]
    fn test_join_base() {
        assert_eq!(join_base("", "/blogs"), "/blogs");
        assert_eq!(join_base("/portfolio", "/blogs"), "/portfolio/blogs");
        assert_eq!(join_base("/portfolio", "/"), "/portfolio/");
        assert_eq!(strip_base(&join_base("/portfolio", "/blog/a"), "/portfolio"), "/blog/a");
    }

    #[test]
    fn test_strip_base() {
        assert_eq!(strip_base("/portfolio/blogs", "/portfolio"), "/blogs");
        assert_eq!(strip_base("/portfolio", "/portfolio"), "/");
        assert_eq!(strip_base("/portfolios", "/portfolio"), "/portfolios");
        assert_eq!(strip_base("/blogs", ""), "/blogs");
    }
}
