// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Normalization helpers shared by both tiers
//!
//! The GraphQL and REST payloads differ in shape but end in the same
//! [`ContentItem`]. Everything that must agree between the two tiers
//! (titles, links, images, list selection) lives here.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

use super::error::{FetchError, TierResult};
use super::request::ValidatedRequest;
use super::types::{ContentItem, FeaturedImage};

/// Item family, deciding default title and link prefix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Family {
    Project,
    Post,
    Page,
}

impl Family {
    pub(crate) fn default_title(self) -> &'static str {
        match self {
            Family::Project => "Untitled Project",
            Family::Post => "Untitled Post",
            Family::Page => "Untitled Page",
        }
    }

    /// Site path for an item, `"#"` when there is no slug
    pub(crate) fn link(self, slug: &str) -> String {
        if slug.is_empty() {
            return "#".to_string();
        }
        match self {
            Family::Project => format!("/projects/{}", slug),
            Family::Post => format!("/blog/{}", slug),
            Family::Page => format!("/{}", slug),
        }
    }
}

/// Decoded, trimmed title, or the family default
pub(crate) fn title(raw: Option<&str>, family: Family) -> String {
    let decoded = html_escape::decode_html_entities(raw.unwrap_or_default());
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        family.default_title().to_string()
    } else {
        trimmed.to_string()
    }
}

/// Trimmed text, empty when absent
pub(crate) fn text(raw: Option<&str>) -> String {
    raw.unwrap_or_default().trim().to_string()
}

/// `Some` only for non-blank strings
pub(crate) fn non_empty(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Image without a URL is no image
pub(crate) fn image(
    url: Option<&str>,
    alt_text: Option<&str>,
    width: Option<u32>,
    height: Option<u32>,
) -> Option<FeaturedImage> {
    let url = non_empty(url)?;
    Some(FeaturedImage {
        url,
        alt_text: text(alt_text),
        width: width.unwrap_or(0),
        height: height.unwrap_or(0),
    })
}

/// Technologies arrive as a list or as one comma-separated string
pub(crate) fn technologies(raw: &Value) -> Vec<String> {
    match raw {
        Value::Array(items) => items
            .iter()
            .filter_map(|v| match v {
                Value::String(s) => non_empty(Some(s)),
                Value::Object(map) => map
                    .get("name")
                    .and_then(Value::as_str)
                    .and_then(|s| non_empty(Some(s))),
                _ => None,
            })
            .collect(),
        Value::String(s) => s.split(',').filter_map(|t| non_empty(Some(t))).collect(),
        _ => Vec::new(),
    }
}

/// Applies the request's exclusion and limit to a fetched list
///
/// An empty result counts as a missing node.
pub(crate) fn select(
    mut items: Vec<ContentItem>,
    request: &ValidatedRequest,
    what: &str,
) -> TierResult<Vec<ContentItem>> {
    if let Some(exclude) = &request.exclude_slug {
        items.retain(|item| item.slug != exclude.as_str());
    }
    items.truncate(request.limit.get() as usize);
    if items.is_empty() {
        return Err(FetchError::empty(format!("no {}", what)));
    }
    Ok(items)
}

/// Treats an explicit JSON `null` like a missing field
pub(crate) fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Reads an object into `T`; any other value, or an object of the
/// wrong shape, is `None`
///
/// ACF writes an unset group as `false` or `[]`.
pub(crate) fn object_or_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        value @ Value::Object(_) => serde_json::from_value(value).ok(),
        _ => None,
    })
}

/// Accepts string or numeric ids
pub(crate) fn flex_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}
