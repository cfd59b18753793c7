// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Primary tier: WPGraphQL
//!
//! Query documents, the wire shapes they return, and their
//! normalization into [`ContentItem`]s.

use serde::Deserialize;
use serde_json::{json, Value};

use super::error::{FetchError, TierResult};
use super::normalize::{self, null_default, Family};
use super::request::ValidatedRequest;
use super::types::{
    AboutSection, ContactSection, ContentItem, ContentKind, FeaturedImage, HeroSection,
    HomepageSections, ItemDetails, Term,
};

const IMAGE_FIELDS: &str = "featuredImage { node { sourceUrl altText mediaDetails { width height } } }";

const PROJECT_FRAGMENT: &str = r#"
fragment ProjectFields on Project {
  id
  title
  slug
  excerpt
  content
  date
  featuredImage { node { sourceUrl altText mediaDetails { width height } } }
  caseStudy {
    projectLinks { liveSite repository }
    technologies
  }
}"#;

const POST_FRAGMENT: &str = r#"
fragment PostFields on Post {
  id
  title
  slug
  excerpt
  content
  date
  featuredImage { node { sourceUrl altText mediaDetails { width height } } }
  author { node { name } }
  categories { nodes { name slug } }
  tags { nodes { name slug } }
}"#;

pub const HOMEPAGE_QUERY: &str = r#"query HomepageSections {
  page(id: "home", idType: URI) {
    homepageSections {
      heroSection { title subtitle description ctaText ctaLink }
      aboutSection { title content }
      contactSection { title description email }
    }
  }
}"#;

pub const PROJECTS_QUERY: &str = r#"query GetProjects($first: Int!) {
  projects(first: $first, where: { orderby: { field: DATE, order: DESC } }) {
    nodes { ...ProjectFields }
  }
}"#;

pub const POSTS_QUERY: &str = r#"query GetPosts($first: Int!) {
  posts(first: $first, where: { orderby: { field: DATE, order: DESC } }) {
    nodes { ...PostFields }
  }
}"#;

pub const PROJECT_QUERY: &str = r#"query GetProject($slug: ID!) {
  project(id: $slug, idType: SLUG) { ...ProjectFields }
}"#;

pub const POST_QUERY: &str = r#"query GetPost($slug: ID!) {
  post(id: $slug, idType: SLUG) { ...PostFields }
}"#;

const ABOUT_QUERY_HEAD: &str = r#"query AboutPage {
  page(id: "about", idType: URI) {
    id
    title
    slug
    date
    content
    "#;

/// Full query document and variables for a request
pub(crate) fn operation(request: &ValidatedRequest) -> (String, Value) {
    let slug = request.slug.as_ref().map(|s| s.as_str()).unwrap_or_default();
    match request.kind {
        ContentKind::Homepage => (HOMEPAGE_QUERY.to_string(), json!({})),
        ContentKind::ProjectList => (
            format!("{}\n{}", PROJECTS_QUERY, PROJECT_FRAGMENT),
            json!({ "first": request.fetch_count() }),
        ),
        ContentKind::PostList => (
            format!("{}\n{}", POSTS_QUERY, POST_FRAGMENT),
            json!({ "first": request.fetch_count() }),
        ),
        ContentKind::AboutPage => (
            format!("{}{}\n  }}\n}}", ABOUT_QUERY_HEAD, IMAGE_FIELDS),
            json!({}),
        ),
        ContentKind::SinglePost => (
            format!("{}\n{}", POST_QUERY, POST_FRAGMENT),
            json!({ "slug": slug }),
        ),
        ContentKind::SingleProject => (
            format!("{}\n{}", PROJECT_QUERY, PROJECT_FRAGMENT),
            json!({ "slug": slug }),
        ),
    }
}

/// Strips the GraphQL response envelope
///
/// A non-empty `errors` array fails the tier even on HTTP 200. Bodies
/// without a `data` key are taken as the data object itself.
pub(crate) fn unwrap_envelope(body: Value) -> TierResult<Value> {
    let mut body = match body {
        Value::Object(map) => map,
        _ => return Err(FetchError::empty("GraphQL response is not an object")),
    };

    if let Some(Value::Array(errors)) = body.get("errors") {
        if !errors.is_empty() {
            let message = errors
                .iter()
                .find_map(|e| e.get("message").and_then(Value::as_str))
                .unwrap_or("GraphQL error");
            return Err(FetchError::Query(message.to_string()));
        }
    }

    match body.remove("data") {
        Some(Value::Null) => Err(FetchError::empty("GraphQL data is null")),
        Some(data) => Ok(data),
        None => {
            body.remove("errors");
            Ok(Value::Object(body))
        }
    }
}

// ============================================================
// Wire shapes
// ============================================================

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlMediaDetails {
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlMedia {
    source_url: Option<String>,
    alt_text: Option<String>,
    media_details: Option<GqlMediaDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Edge<T> {
    node: Option<T>,
}

/// `nodes` list; a node whose resolver failed arrives as `null`
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Connection<T> {
    #[serde(default, deserialize_with = "null_default")]
    nodes: Vec<Option<T>>,
}

impl<T> Connection<T> {
    fn into_nodes(self) -> impl Iterator<Item = T> {
        self.nodes.into_iter().flatten()
    }
}

impl<T> Default for Connection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GqlTerm {
    name: Option<String>,
    slug: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GqlAuthor {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlProjectLinks {
    live_site: Option<String>,
    repository: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlCaseStudy {
    project_links: Option<GqlProjectLinks>,
    technologies: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlProject {
    #[serde(deserialize_with = "normalize::flex_id")]
    id: String,
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    date: Option<String>,
    featured_image: Option<Edge<GqlMedia>>,
    case_study: Option<GqlCaseStudy>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlPost {
    #[serde(deserialize_with = "normalize::flex_id")]
    id: String,
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    date: Option<String>,
    featured_image: Option<Edge<GqlMedia>>,
    author: Option<Edge<GqlAuthor>>,
    categories: Option<Connection<GqlTerm>>,
    tags: Option<Connection<GqlTerm>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlPage {
    #[serde(deserialize_with = "normalize::flex_id")]
    id: String,
    title: Option<String>,
    slug: Option<String>,
    excerpt: Option<String>,
    content: Option<String>,
    date: Option<String>,
    featured_image: Option<Edge<GqlMedia>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlHero {
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    cta_text: Option<String>,
    cta_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GqlAbout {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GqlContact {
    title: Option<String>,
    description: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlHomepageSections {
    hero_section: Option<GqlHero>,
    about_section: Option<GqlAbout>,
    contact_section: Option<GqlContact>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct GqlHomepagePage {
    homepage_sections: Option<GqlHomepageSections>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct HomepageData {
    page: Option<GqlHomepagePage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectsData {
    projects: Option<Connection<GqlProject>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostsData {
    posts: Option<Connection<GqlPost>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PageData {
    page: Option<GqlPage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProjectData {
    project: Option<GqlProject>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PostData {
    post: Option<GqlPost>,
}

// ============================================================
// Normalization
// ============================================================

fn featured_image(edge: Option<Edge<GqlMedia>>) -> Option<FeaturedImage> {
    let media = edge?.node?;
    let details = media.media_details.unwrap_or_default();
    normalize::image(
        media.source_url.as_deref(),
        media.alt_text.as_deref(),
        details.width,
        details.height,
    )
}

fn terms(connection: Option<Connection<GqlTerm>>) -> Vec<Term> {
    connection
        .unwrap_or_default()
        .into_nodes()
        .filter_map(|t| {
            let name = normalize::non_empty(t.name.as_deref())?;
            Some(Term {
                name,
                slug: normalize::text(t.slug.as_deref()),
            })
        })
        .collect()
}

fn project_item(raw: GqlProject) -> ContentItem {
    let case_study = raw.case_study.unwrap_or_default();
    let links = case_study.project_links.unwrap_or_default();
    let slug = normalize::text(raw.slug.as_deref());
    ContentItem {
        id: raw.id,
        title: normalize::title(raw.title.as_deref(), Family::Project),
        excerpt: normalize::text(raw.excerpt.as_deref()),
        link: Family::Project.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(raw.featured_image),
        details: ItemDetails::Project {
            content: normalize::text(raw.content.as_deref()),
            visit_link: normalize::non_empty(links.live_site.as_deref()),
            repository_link: normalize::non_empty(links.repository.as_deref()),
            technologies: normalize::technologies(&case_study.technologies),
        },
    }
}

fn post_item(raw: GqlPost) -> ContentItem {
    let slug = normalize::text(raw.slug.as_deref());
    let author = raw
        .author
        .and_then(|edge| edge.node)
        .and_then(|a| normalize::non_empty(a.name.as_deref()));
    ContentItem {
        id: raw.id,
        title: normalize::title(raw.title.as_deref(), Family::Post),
        excerpt: normalize::text(raw.excerpt.as_deref()),
        link: Family::Post.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(raw.featured_image),
        details: ItemDetails::Post {
            content: normalize::text(raw.content.as_deref()),
            author,
            categories: terms(raw.categories),
            tags: terms(raw.tags),
        },
    }
}

fn page_item(raw: GqlPage) -> ContentItem {
    let slug = normalize::text(raw.slug.as_deref());
    ContentItem {
        id: raw.id,
        title: normalize::title(raw.title.as_deref(), Family::Page),
        excerpt: normalize::text(raw.excerpt.as_deref()),
        link: Family::Page.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(raw.featured_image),
        details: ItemDetails::Page {
            content: normalize::text(raw.content.as_deref()),
        },
    }
}

pub(crate) fn homepage(data: Value, _request: &ValidatedRequest) -> TierResult<HomepageSections> {
    let data: HomepageData = serde_json::from_value(data)?;
    let sections = data
        .page
        .and_then(|p| p.homepage_sections)
        .ok_or_else(|| FetchError::empty("homepageSections"))?;

    let hero = sections.hero_section.unwrap_or_default();
    let about = sections.about_section.unwrap_or_default();
    let contact = sections.contact_section.unwrap_or_default();
    Ok(HomepageSections {
        hero: HeroSection {
            title: normalize::text(hero.title.as_deref()),
            subtitle: normalize::text(hero.subtitle.as_deref()),
            description: normalize::text(hero.description.as_deref()),
            cta_text: normalize::text(hero.cta_text.as_deref()),
            cta_link: normalize::text(hero.cta_link.as_deref()),
        },
        about: AboutSection {
            title: normalize::text(about.title.as_deref()),
            content: normalize::text(about.content.as_deref()),
        },
        contact: ContactSection {
            title: normalize::text(contact.title.as_deref()),
            description: normalize::text(contact.description.as_deref()),
            email: normalize::text(contact.email.as_deref()),
        },
    })
}

pub(crate) fn projects(data: Value, request: &ValidatedRequest) -> TierResult<Vec<ContentItem>> {
    let data: ProjectsData = serde_json::from_value(data)?;
    let nodes = data
        .projects
        .ok_or_else(|| FetchError::empty("projects"))?
        .into_nodes();
    normalize::select(nodes.map(project_item).collect(), request, "projects")
}

pub(crate) fn posts(data: Value, request: &ValidatedRequest) -> TierResult<Vec<ContentItem>> {
    let data: PostsData = serde_json::from_value(data)?;
    let nodes = data.posts.ok_or_else(|| FetchError::empty("posts"))?.into_nodes();
    normalize::select(nodes.map(post_item).collect(), request, "posts")
}

pub(crate) fn about_page(data: Value, _request: &ValidatedRequest) -> TierResult<ContentItem> {
    let data: PageData = serde_json::from_value(data)?;
    let page = data.page.ok_or_else(|| FetchError::empty("page"))?;
    Ok(page_item(page))
}

pub(crate) fn project(data: Value, _request: &ValidatedRequest) -> TierResult<ContentItem> {
    let data: ProjectData = serde_json::from_value(data)?;
    let project = data.project.ok_or_else(|| FetchError::empty("project"))?;
    Ok(project_item(project))
}

pub(crate) fn post(data: Value, _request: &ValidatedRequest) -> TierResult<ContentItem> {
    let data: PostData = serde_json::from_value(data)?;
    let post = data.post.ok_or_else(|| FetchError::empty("post"))?;
    Ok(post_item(post))
}
