// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content type definitions
//!
//! The normalized shapes every tier produces, and the envelope that
//! carries them back to page renderers.

use serde::{Deserialize, Serialize};

/// Kinds of content a page can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContentKind {
    /// Homepage sections (hero, about blurb, contact)
    Homepage,
    /// Latest projects
    ProjectList,
    /// Latest blog posts
    PostList,
    /// The about page
    AboutPage,
    /// One blog post by slug
    SinglePost,
    /// One project by slug
    SingleProject,
}

impl ContentKind {
    /// Every kind, in declaration order
    pub const ALL: [ContentKind; 6] = [
        ContentKind::Homepage,
        ContentKind::ProjectList,
        ContentKind::PostList,
        ContentKind::AboutPage,
        ContentKind::SinglePost,
        ContentKind::SingleProject,
    ];

    /// Name used in logs and JSON
    pub fn name(&self) -> &'static str {
        match self {
            ContentKind::Homepage => "homepage",
            ContentKind::ProjectList => "projectList",
            ContentKind::PostList => "postList",
            ContentKind::AboutPage => "aboutPage",
            ContentKind::SinglePost => "singlePost",
            ContentKind::SingleProject => "singleProject",
        }
    }

    /// Whether the kind addresses a single item by slug
    pub fn requires_slug(&self) -> bool {
        matches!(self, ContentKind::SinglePost | ContentKind::SingleProject)
    }

    /// Number of items returned when the caller gives no limit
    pub fn default_limit(&self) -> u32 {
        match self {
            ContentKind::ProjectList => 6,
            ContentKind::PostList => 3,
            _ => 1,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which tier produced the data in a [`FetchResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Source {
    /// GraphQL endpoint answered
    Primary,
    /// REST endpoint answered after GraphQL failed
    Secondary,
    /// Both failed (or the request was rejected); bundled content
    Fallback,
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Source::Primary => "primary",
            Source::Secondary => "secondary",
            Source::Fallback => "fallback",
        };
        write!(f, "{}", name)
    }
}

/// Uniform envelope handed to every caller
///
/// `data` is always populated. `error` is set exactly when `source`
/// is [`Source::Fallback`]; the constructors are the only way to build
/// one, which keeps that pairing intact.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FetchResult<T> {
    data: T,
    error: Option<String>,
    source: Source,
}

impl<T> FetchResult<T> {
    /// Data served by the GraphQL tier
    pub fn primary(data: T) -> Self {
        Self {
            data,
            error: None,
            source: Source::Primary,
        }
    }

    /// Data served by the REST tier
    pub fn secondary(data: T) -> Self {
        Self {
            data,
            error: None,
            source: Source::Secondary,
        }
    }

    /// Bundled data, with the message explaining why
    ///
    /// An empty message becomes `"Unknown error"`.
    pub fn fallback(data: T, error: impl Into<String>) -> Self {
        let mut error = error.into();
        if error.trim().is_empty() {
            error = UNKNOWN_ERROR.to_string();
        }
        Self {
            data,
            error: Some(error),
            source: Source::Fallback,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn into_data(self) -> T {
        self.data
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn source(&self) -> Source {
        self.source
    }

    /// True when the data came from either remote tier
    pub fn is_remote(&self) -> bool {
        self.source != Source::Fallback
    }

    /// Converts the payload, keeping provenance and error
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResult<U> {
        FetchResult {
            data: f(self.data),
            error: self.error,
            source: self.source,
        }
    }
}

/// Message used when a failure carries no usable description
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Featured image attached to an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedImage {
    pub url: String,
    pub alt_text: String,
    pub width: u32,
    pub height: u32,
}

/// A taxonomy term (category or tag)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub name: String,
    pub slug: String,
}

/// Kind-specific fields of a [`ContentItem`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ItemDetails {
    #[serde(rename_all = "camelCase")]
    Project {
        content: String,
        /// Live site from the case-study links
        visit_link: Option<String>,
        repository_link: Option<String>,
        technologies: Vec<String>,
    },
    #[serde(rename_all = "camelCase")]
    Post {
        content: String,
        author: Option<String>,
        categories: Vec<Term>,
        tags: Vec<Term>,
    },
    Page { content: String },
}

/// Canonical item shape, whichever tier produced it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    /// May contain inline markup
    pub excerpt: String,
    pub slug: String,
    /// ISO-8601 timestamp
    pub date: Option<String>,
    pub featured_image: Option<FeaturedImage>,
    /// Site path derived from the slug, `"#"` without one
    pub link: String,
    pub details: ItemDetails,
}

impl ContentItem {
    /// URL of the featured image, if any
    pub fn image_url(&self) -> Option<&str> {
        self.featured_image.as_ref().map(|img| img.url.as_str())
    }

    /// Live-site link for projects
    pub fn visit_link(&self) -> Option<&str> {
        match &self.details {
            ItemDetails::Project { visit_link, .. } => visit_link.as_deref(),
            _ => None,
        }
    }

    /// Full body markup
    pub fn content(&self) -> &str {
        match &self.details {
            ItemDetails::Project { content, .. }
            | ItemDetails::Post { content, .. }
            | ItemDetails::Page { content } => content,
        }
    }
}

/// Hero block at the top of the homepage
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroSection {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub cta_text: String,
    pub cta_link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutSection {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSection {
    pub title: String,
    pub description: String,
    pub email: String,
}

/// Editable homepage sections
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HomepageSections {
    pub hero: HeroSection,
    pub about: AboutSection,
    pub contact: ContactSection,
}

/// Payload of a generic [`fetch`](super::ContentFetcher::fetch)
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentData {
    Homepage(HomepageSections),
    Projects(Vec<ContentItem>),
    Posts(Vec<ContentItem>),
    Page(ContentItem),
    Post(ContentItem),
    Project(ContentItem),
}

impl ContentData {
    /// Items in a list payload, or the single item as a one-element slice
    pub fn items(&self) -> &[ContentItem] {
        match self {
            ContentData::Homepage(_) => &[],
            ContentData::Projects(items) | ContentData::Posts(items) => items,
            ContentData::Page(item) | ContentData::Post(item) | ContentData::Project(item) => {
                std::slice::from_ref(item)
            }
        }
    }

    pub fn as_homepage(&self) -> Option<&HomepageSections> {
        match self {
            ContentData::Homepage(sections) => Some(sections),
            _ => None,
        }
    }
}

/// Results of the three concurrent homepage fetches
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HomepageBundle {
    pub homepage: FetchResult<HomepageSections>,
    pub projects: FetchResult<Vec<ContentItem>>,
    pub posts: FetchResult<Vec<ContentItem>>,
}
