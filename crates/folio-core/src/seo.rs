//! Document metadata for the current page.
//!
//! [`SeoDefaults::document`] projects a [`SeoPage`] onto the full set of
//! tags the site maintains. Applying the result to the DOM is the app's job.

use serde_json::{Value, json};

use crate::{config::Config, content::BlogPost};

/// Attribute a meta tag is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaAttr {
    Name,
    Property,
}

impl MetaAttr {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

/// A `<meta>` tag identified by `attr="key"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub attr: MetaAttr,
    pub key: &'static str,
    pub content: String,
}

impl MetaTag {
    fn name(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Name,
            key,
            content: content.into(),
        }
    }

    fn property(key: &'static str, content: impl Into<String>) -> Self {
        Self {
            attr: MetaAttr::Property,
            key,
            content: content.into(),
        }
    }

    /// CSS selector locating this tag in `<head>`.
    pub fn selector(&self) -> String {
        format!("meta[{}=\"{}\"]", self.attr.as_str(), self.key)
    }
}

/// Open Graph page type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageKind {
    #[default]
    Website,
    Article,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Article details for structured data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleMeta {
    pub published: Option<String>,
    pub author: Option<String>,
    pub tags: Vec<String>,
}

/// What the current view wants to say about itself. Unset fields fall back
/// to site defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoPage {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    /// Route path, joined onto the site URL.
    pub path: Option<String>,
    pub kind: PageKind,
    pub article: Option<ArticleMeta>,
}

impl SeoPage {
    /// A plain website page using every default.
    pub fn website() -> Self {
        Self::default()
    }

    /// A titled website page at `path`.
    pub fn titled(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            path: Some(path.into()),
            ..Self::default()
        }
    }

    /// Article page for a blog post.
    pub fn for_post(post: &BlogPost, author: &str) -> Self {
        let published = post
            .published()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| post.date.clone());

        Self {
            title: Some(post.title.clone()),
            description: Some(post.excerpt.clone()).filter(|e| !e.is_empty()),
            image: None,
            path: Some(post.url_path()),
            kind: PageKind::Article,
            article: Some(ArticleMeta {
                published: Some(published),
                author: Some(author.to_string()).filter(|a| !a.is_empty()),
                tags: post.tags.clone(),
            }),
        }
    }
}

/// Fully resolved metadata for one page.
#[derive(Debug, Clone, PartialEq)]
pub struct SeoDocument {
    pub title: String,
    pub canonical: String,
    pub tags: Vec<MetaTag>,
    /// schema.org block, present for articles only.
    pub json_ld: Option<Value>,
}

impl SeoDocument {
    /// Content of the tag keyed by `key`.
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|t| t.key == key)
            .map(|t| t.content.as_str())
    }
}

/// Site-wide fallbacks for every metadata field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeoDefaults {
    pub title: String,
    pub description: String,
    pub image: String,
    pub site_url: String,
    pub author: String,
}

impl From<&Config> for SeoDefaults {
    fn from(config: &Config) -> Self {
        let image = if config.site.image.is_empty() {
            config.profile.avatar.clone()
        } else {
            config.site.image.clone()
        };

        Self {
            title: config.site.title.clone(),
            description: config.site.description.clone(),
            image,
            site_url: config.site.base_url.trim_end_matches('/').to_string(),
            author: config.site.author.clone(),
        }
    }
}

impl SeoDefaults {
    /// Metadata restored when no view claims the document.
    pub fn default_document(&self) -> SeoDocument {
        self.document(&SeoPage::website())
    }

    /// Resolve `page` against the defaults.
    pub fn document(&self, page: &SeoPage) -> SeoDocument {
        let title = match &page.title {
            Some(title) if self.author.is_empty() => title.clone(),
            Some(title) => format!("{title} | {}", self.author),
            None => self.title.clone(),
        };
        let description = page
            .description
            .clone()
            .unwrap_or_else(|| self.description.clone());
        let image = page.image.clone().unwrap_or_else(|| self.image.clone());
        let url = match &page.path {
            Some(path) if path != "/" => format!("{}/{}", self.site_url, path.trim_start_matches('/')),
            _ => self.site_url.clone(),
        };

        let tags = vec![
            MetaTag::name("description", description.clone()),
            MetaTag::property("og:title", title.clone()),
            MetaTag::property("og:description", description.clone()),
            MetaTag::property("og:image", image.clone()),
            MetaTag::property("og:url", url.clone()),
            MetaTag::property("og:type", page.kind.as_str()),
            MetaTag::name("twitter:title", title.clone()),
            MetaTag::name("twitter:description", description.clone()),
            MetaTag::name("twitter:image", image.clone()),
            MetaTag::name("twitter:url", url.clone()),
        ];

        let json_ld = match (page.kind, &page.article) {
            (PageKind::Article, Some(article)) => Some(self.blog_posting(
                page.title.as_deref().unwrap_or(&self.title),
                &description,
                &image,
                &url,
                article,
            )),
            _ => None,
        };

        SeoDocument {
            title,
            canonical: url,
            tags,
            json_ld,
        }
    }

    fn blog_posting(
        &self,
        headline: &str,
        description: &str,
        image: &str,
        url: &str,
        article: &ArticleMeta,
    ) -> Value {
        let author = article.author.as_deref().unwrap_or(&self.author);
        let keywords = (!article.tags.is_empty()).then(|| article.tags.join(", "));

        json!({
            "@context": "https://schema.org",
            "@type": "BlogPosting",
            "headline": headline,
            "description": description,
            "image": image,
            "url": url,
            "datePublished": article.published,
            "author": {
                "@type": "Person",
                "name": author,
                "url": self.site_url,
            },
            "publisher": {
                "@type": "Person",
                "name": self.author,
                "url": self.site_url,
            },
            "keywords": keywords,
        })
    }
}
