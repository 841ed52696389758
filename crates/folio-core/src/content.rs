//! Content types and structures.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Date format used for post dates in `site.toml` (e.g. "Nov 29, 2025").
pub const POST_DATE_FORMAT: &str = "%b %d, %Y";

/// A blog post entry. The Markdown body is fetched separately.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    /// URL-safe identifier, also the Markdown file stem.
    pub slug: String,

    /// Post title.
    pub title: String,

    /// Display date.
    pub date: String,

    /// Short summary for listings and meta descriptions.
    #[serde(default)]
    pub excerpt: String,

    /// Tags for filtering.
    #[serde(default)]
    pub tags: Vec<String>,

    /// Folder holding the Markdown file. Filled from `[github].folder` when empty.
    #[serde(default)]
    pub folder: String,
}

impl BlogPost {
    /// Whether this post carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Parse the display date into a calendar date.
    pub fn published(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date.trim(), POST_DATE_FORMAT).ok()
    }

    /// Route path of this post.
    pub fn url_path(&self) -> String {
        format!("/blog/{}", self.slug)
    }
}

/// Keep the posts tagged with `tag`, or all posts when no tag is selected.
pub fn filter_by_tag<'a>(posts: &'a [BlogPost], tag: Option<&str>) -> Vec<&'a BlogPost> {
    match tag {
        Some(tag) => posts.iter().filter(|post| post.has_tag(tag)).collect(),
        None => posts.iter().collect(),
    }
}

/// All distinct tags across `posts`, in first-seen order.
pub fn all_tags(posts: &[BlogPost]) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in posts.iter().flat_map(|post| post.tags.iter()) {
        if !tags.contains(tag) {
            tags.push(tag.clone());
        }
    }
    tags
}

/// Owner profile shown on the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub resume_url: Option<String>,

    /// Extra paragraphs for the about section.
    #[serde(default)]
    pub about: Vec<String>,
}

impl Profile {
    /// First sentence of the bio, used as the "tldr" line.
    pub fn tldr(&self) -> &str {
        self.bio.split('.').next().unwrap_or_default().trim()
    }
}

/// Supported social icons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SocialIcon {
    Github,
    Linkedin,
    Twitter,
    Instagram,
    StackOverflow,
    Topmate,
    Mail,
}

impl SocialIcon {
    /// Every supported icon.
    pub const ALL: [SocialIcon; 7] = [
        Self::Github,
        Self::Linkedin,
        Self::Twitter,
        Self::Instagram,
        Self::StackOverflow,
        Self::Topmate,
        Self::Mail,
    ];

    /// Configuration key of this icon.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Github => "github",
            Self::Linkedin => "linkedin",
            Self::Twitter => "twitter",
            Self::Instagram => "instagram",
            Self::StackOverflow => "stackoverflow",
            Self::Topmate => "topmate",
            Self::Mail => "mail",
        }
    }
}

impl TryFrom<&str> for SocialIcon {
    type Error = CoreError;

    fn try_from(key: &str) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|icon| icon.key() == key)
            .ok_or_else(|| {
                tracing::warn!(icon = key, "rejecting unknown social icon");
                CoreError::UnknownIcon(key.to_string())
            })
    }
}

impl TryFrom<String> for SocialIcon {
    type Error = CoreError;

    fn try_from(key: String) -> Result<Self, Self::Error> {
        Self::try_from(key.as_str())
    }
}

impl From<SocialIcon> for String {
    fn from(icon: SocialIcon) -> Self {
        icon.key().to_string()
    }
}

impl fmt::Display for SocialIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A link to an external profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Accessible label.
    pub name: String,
    pub url: String,
    pub icon: SocialIcon,
}

/// One entry of the experience timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: String,

    /// Roles held, most recent first.
    pub roles: Vec<String>,

    pub company: String,

    /// Company logo URL.
    #[serde(default)]
    pub logo: String,

    /// Employment type shown next to the role (e.g. "Full-time").
    #[serde(default)]
    pub kind: Option<String>,

    pub period: String,

    /// Bullet groups, one group per role or project.
    #[serde(default)]
    pub description: Vec<Vec<String>>,

    #[serde(default)]
    pub skills: Vec<String>,
}

impl ExperienceItem {
    /// The most recent role, if any.
    pub fn current_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }

    /// Role line, e.g. "Senior Engineer | Full-time".
    pub fn role_line(&self) -> String {
        let role = self.current_role().unwrap_or_default();
        match self.kind.as_deref().filter(|k| !k.is_empty()) {
            Some(kind) => format!("{role} | {kind}"),
            None => role.to_string(),
        }
    }
}
