// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Secondary tier: WordPress REST API
//!
//! REST payloads nest rendered HTML under `{ "rendered": ... }`, put
//! media and terms under `_embedded`, and expose custom fields under
//! whichever key the site's plugins chose. This module turns them into
//! the same [`ContentItem`]s the GraphQL tier produces.

use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::{FetchError, TierResult};
use super::normalize::{self, null_default, object_or_none, Family};
use super::request::ValidatedRequest;
use super::types::{
    AboutSection, ContactSection, ContentItem, ContentKind, FeaturedImage, HeroSection,
    HomepageSections, ItemDetails, Term,
};

/// Custom-field keys tried in order, per content kind
///
/// `acf_fields` is what the site's REST filter registers; `acf` is the
/// stock ACF key and `meta` the core fallback.
pub fn custom_field_keys(kind: ContentKind) -> &'static [&'static str] {
    match kind {
        ContentKind::Homepage => &["acf_fields", "acf", "meta"],
        ContentKind::ProjectList | ContentKind::SingleProject => &["acf_fields", "acf", "meta"],
        ContentKind::PostList
        | ContentKind::SinglePost
        | ContentKind::AboutPage => &["acf", "meta"],
    }
}

/// First listed key holding a non-empty object
///
/// ACF reports "no fields" as `false` or `[]`, so only objects count.
pub fn find_custom_fields<'a>(
    fields: &'a Map<String, Value>,
    keys: &[&str],
) -> Option<&'a Map<String, Value>> {
    keys.iter().find_map(|key| match fields.get(*key) {
        Some(Value::Object(map)) if !map.is_empty() => Some(map),
        _ => None,
    })
}

/// Resource path and query parameters for a request
pub(crate) fn resource(request: &ValidatedRequest) -> (&'static str, Vec<(&'static str, String)>) {
    let embed = ("_embed", "1".to_string());
    let latest = |count: u32| {
        vec![
            ("per_page", count.to_string()),
            ("orderby", "date".to_string()),
            ("order", "desc".to_string()),
            embed.clone(),
        ]
    };
    let by_slug = |slug: &str| vec![("slug", slug.to_string()), embed.clone()];
    let slug = request.slug.as_ref().map(|s| s.as_str()).unwrap_or_default();

    match request.kind {
        ContentKind::Homepage => (
            "pages",
            vec![
                ("slug", "home".to_string()),
                ("_fields", "id,slug,acf,acf_fields,meta".to_string()),
            ],
        ),
        ContentKind::ProjectList => ("projects", latest(request.fetch_count())),
        ContentKind::PostList => ("posts", latest(request.fetch_count())),
        ContentKind::AboutPage => ("pages", by_slug("about")),
        ContentKind::SinglePost => ("posts", by_slug(slug)),
        ContentKind::SingleProject => ("projects", by_slug(slug)),
    }
}

// ============================================================
// Wire shapes
// ============================================================

/// `{ "rendered": "..." }`, tolerated as a plain string too
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Rendered {
    Object {
        #[serde(default)]
        rendered: Option<String>,
    },
    Plain(String),
}

impl Rendered {
    fn as_str(&self) -> Option<&str> {
        match self {
            Rendered::Object { rendered } => rendered.as_deref(),
            Rendered::Plain(s) => Some(s),
        }
    }
}

fn rendered(field: &Option<Rendered>) -> Option<&str> {
    field.as_ref().and_then(Rendered::as_str)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestMediaDetails {
    width: Option<u32>,
    height: Option<u32>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestMedia {
    source_url: Option<String>,
    alt_text: Option<String>,
    media_details: Option<RestMediaDetails>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestAuthor {
    name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestTerm {
    name: Option<String>,
    slug: Option<String>,
    taxonomy: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestEmbedded {
    #[serde(rename = "wp:featuredmedia", deserialize_with = "null_default")]
    featured_media: Vec<RestMedia>,
    #[serde(deserialize_with = "null_default")]
    author: Vec<RestAuthor>,
    #[serde(rename = "wp:term", deserialize_with = "null_default")]
    terms: Vec<Vec<RestTerm>>,
}

#[derive(Debug, Deserialize)]
struct RestItem {
    #[serde(default, deserialize_with = "normalize::flex_id")]
    id: String,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    title: Option<Rendered>,
    #[serde(default)]
    excerpt: Option<Rendered>,
    #[serde(default)]
    content: Option<Rendered>,
    #[serde(default, rename = "_embedded")]
    embedded: Option<RestEmbedded>,
    /// Everything else, searched for custom fields
    #[serde(flatten)]
    extra: Map<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestProjectLinks {
    #[serde(alias = "liveSite")]
    live_site: Option<String>,
    repository: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestProjectFields {
    #[serde(alias = "projectLinks", deserialize_with = "object_or_none")]
    project_links: Option<RestProjectLinks>,
    technologies: Value,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestHero {
    title: Option<String>,
    subtitle: Option<String>,
    description: Option<String>,
    #[serde(alias = "ctaText")]
    cta_text: Option<String>,
    #[serde(alias = "ctaLink")]
    cta_link: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestAbout {
    title: Option<String>,
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestContact {
    title: Option<String>,
    description: Option<String>,
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RestHomepageFields {
    #[serde(alias = "heroSection", deserialize_with = "object_or_none")]
    hero_section: Option<RestHero>,
    #[serde(alias = "aboutSection", deserialize_with = "object_or_none")]
    about_section: Option<RestAbout>,
    #[serde(alias = "contactSection", deserialize_with = "object_or_none")]
    contact_section: Option<RestContact>,
}

/// Splits a body into items: arrays as-is, a lone object as one item
///
/// An empty array means "not found". A WordPress error object
/// (`code` + `message`, no `id`) fails the tier with its message.
fn items(body: Value) -> TierResult<Vec<RestItem>> {
    let raw = match body {
        Value::Array(values) => values,
        Value::Object(map) => {
            if !map.contains_key("id") {
                if let Some(message) = map.get("message").and_then(Value::as_str) {
                    return Err(FetchError::Transport(message.to_string()));
                }
            }
            vec![Value::Object(map)]
        }
        _ => return Err(FetchError::empty("REST response is not an array or object")),
    };
    if raw.is_empty() {
        return Err(FetchError::empty("REST response is an empty array"));
    }
    raw.into_iter()
        .map(|v| serde_json::from_value(v).map_err(FetchError::from))
        .collect()
}

fn first_item(body: Value, what: &str) -> TierResult<RestItem> {
    items(body)?
        .into_iter()
        .next()
        .ok_or_else(|| FetchError::empty(what.to_string()))
}

// ============================================================
// Normalization
// ============================================================

fn featured_image(embedded: Option<&RestEmbedded>) -> Option<FeaturedImage> {
    let media = embedded?.featured_media.first()?;
    let details = media.media_details.as_ref();
    normalize::image(
        media.source_url.as_deref(),
        media.alt_text.as_deref(),
        details.and_then(|d| d.width),
        details.and_then(|d| d.height),
    )
}

fn terms(embedded: Option<&RestEmbedded>, taxonomy: &str) -> Vec<Term> {
    let Some(embedded) = embedded else {
        return Vec::new();
    };
    embedded
        .terms
        .iter()
        .flatten()
        .filter(|t| t.taxonomy.as_deref() == Some(taxonomy))
        .filter_map(|t| {
            let name = normalize::non_empty(t.name.as_deref())?;
            Some(Term {
                name: html_escape::decode_html_entities(&name).into_owned(),
                slug: normalize::text(t.slug.as_deref()),
            })
        })
        .collect()
}

fn project_fields(item: &RestItem, kind: ContentKind) -> RestProjectFields {
    find_custom_fields(&item.extra, custom_field_keys(kind))
        .and_then(|map| serde_json::from_value(Value::Object(map.clone())).ok())
        .unwrap_or_default()
}

fn project_item(raw: RestItem, kind: ContentKind) -> ContentItem {
    let fields = project_fields(&raw, kind);
    let links = fields.project_links.unwrap_or_default();
    let slug = normalize::text(raw.slug.as_deref());
    ContentItem {
        title: normalize::title(rendered(&raw.title), Family::Project),
        excerpt: normalize::text(rendered(&raw.excerpt)),
        link: Family::Project.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(raw.embedded.as_ref()),
        details: ItemDetails::Project {
            content: normalize::text(rendered(&raw.content)),
            visit_link: normalize::non_empty(links.live_site.as_deref()),
            repository_link: normalize::non_empty(links.repository.as_deref()),
            technologies: normalize::technologies(&fields.technologies),
        },
        id: raw.id,
    }
}

fn post_item(raw: RestItem) -> ContentItem {
    let embedded = raw.embedded.as_ref();
    let slug = normalize::text(raw.slug.as_deref());
    let author = embedded
        .and_then(|e| e.author.first())
        .and_then(|a| normalize::non_empty(a.name.as_deref()));
    ContentItem {
        title: normalize::title(rendered(&raw.title), Family::Post),
        excerpt: normalize::text(rendered(&raw.excerpt)),
        link: Family::Post.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(embedded),
        details: ItemDetails::Post {
            content: normalize::text(rendered(&raw.content)),
            author,
            categories: terms(embedded, "category"),
            tags: terms(embedded, "post_tag"),
        },
        id: raw.id,
    }
}

fn page_item(raw: RestItem) -> ContentItem {
    let slug = normalize::text(raw.slug.as_deref());
    ContentItem {
        title: normalize::title(rendered(&raw.title), Family::Page),
        excerpt: normalize::text(rendered(&raw.excerpt)),
        link: Family::Page.link(&slug),
        slug,
        date: normalize::non_empty(raw.date.as_deref()),
        featured_image: featured_image(raw.embedded.as_ref()),
        details: ItemDetails::Page {
            content: normalize::text(rendered(&raw.content)),
        },
        id: raw.id,
    }
}

pub(crate) fn homepage(body: Value, request: &ValidatedRequest) -> TierResult<HomepageSections> {
    let page = first_item(body, "home page")?;
    let blob = find_custom_fields(&page.extra, custom_field_keys(request.kind))
        .ok_or_else(|| FetchError::empty("homepage custom fields"))?;
    let fields: RestHomepageFields = serde_json::from_value(Value::Object(blob.clone()))?;
    if fields.hero_section.is_none()
        && fields.about_section.is_none()
        && fields.contact_section.is_none()
    {
        return Err(FetchError::empty("homepage sections"));
    }

    let hero = fields.hero_section.unwrap_or_default();
    let about = fields.about_section.unwrap_or_default();
    let contact = fields.contact_section.unwrap_or_default();
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

pub(crate) fn projects(body: Value, request: &ValidatedRequest) -> TierResult<Vec<ContentItem>> {
    let items = items(body)?
        .into_iter()
        .map(|raw| project_item(raw, request.kind))
        .collect();
    normalize::select(items, request, "projects")
}

pub(crate) fn posts(body: Value, request: &ValidatedRequest) -> TierResult<Vec<ContentItem>> {
    let items = items(body)?.into_iter().map(post_item).collect();
    normalize::select(items, request, "posts")
}

pub(crate) fn about_page(body: Value, _request: &ValidatedRequest) -> TierResult<ContentItem> {
    Ok(page_item(first_item(body, "about page")?))
}

pub(crate) fn project(body: Value, request: &ValidatedRequest) -> TierResult<ContentItem> {
    Ok(project_item(first_item(body, "project")?, request.kind))
}

pub(crate) fn post(body: Value, _request: &ValidatedRequest) -> TierResult<ContentItem> {
    Ok(post_item(first_item(body, "post")?))
}
