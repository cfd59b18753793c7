// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Requests
//!
//! Requests carry raw caller parameters (usually straight from a URL).
//! They are checked here before any of them reach a query.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::ContentKind;

/// Maximum slug length accepted from callers.
pub const MAX_SLUG_LEN: usize = 100;

/// Validation error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Slug cannot be empty")]
    EmptySlug,
    #[error("Slug too long (max {max} characters)")]
    SlugTooLong { max: usize },
    #[error("Slug may only contain lowercase letters, digits and hyphens")]
    InvalidSlug,
    #[error("A slug is required for {0}")]
    MissingSlug(ContentKind),
    #[error("Limit must be a positive integer")]
    InvalidLimit,
    #[error("Limit too large (max {max})")]
    LimitTooLarge { max: u32 },
}

/// A request for one kind of content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRequest {
    pub kind: ContentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exclude_slug: Option<String>,
}

impl ContentRequest {
    pub fn new(kind: ContentKind) -> Self {
        Self {
            kind,
            limit: None,
            slug: None,
            exclude_slug: None,
        }
    }

    pub fn homepage() -> Self {
        Self::new(ContentKind::Homepage)
    }

    pub fn projects(limit: impl ToString) -> Self {
        Self::new(ContentKind::ProjectList).with_limit(limit)
    }

    pub fn posts(limit: impl ToString) -> Self {
        Self::new(ContentKind::PostList).with_limit(limit)
    }

    pub fn about_page() -> Self {
        Self::new(ContentKind::AboutPage)
    }

    pub fn post(slug: impl Into<String>) -> Self {
        Self::new(ContentKind::SinglePost).with_slug(slug)
    }

    pub fn project(slug: impl Into<String>) -> Self {
        Self::new(ContentKind::SingleProject).with_slug(slug)
    }

    pub fn with_limit(mut self, limit: impl ToString) -> Self {
        self.limit = Some(limit.to_string());
        self
    }

    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    /// Leave this slug out of a list (e.g. the post being read).
    pub fn excluding(mut self, slug: impl Into<String>) -> Self {
        self.exclude_slug = Some(slug.into());
        self
    }

    /// Check every parameter against the format rules.
    pub fn validate(&self, max_limit: u32) -> Result<ValidatedRequest, ValidationError> {
        let limit = match &self.limit {
            Some(raw) => Limit::parse(raw, max_limit)?,
            None => Limit(self.kind.default_limit().min(max_limit.max(1))),
        };

        let slug = self.slug.as_deref().map(Slug::parse).transpose()?;
        if self.kind.requires_slug() && slug.is_none() {
            return Err(ValidationError::MissingSlug(self.kind));
        }

        let exclude_slug = self.exclude_slug.as_deref().map(Slug::parse).transpose()?;

        Ok(ValidatedRequest {
            kind: self.kind,
            limit,
            slug,
            exclude_slug,
        })
    }
}

/// A positive item count no larger than the configured maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit(u32);

impl Limit {
    pub fn parse(raw: &str, max: u32) -> Result<Self, ValidationError> {
        if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValidationError::InvalidLimit);
        }
        // All digits, so a parse failure means overflow.
        let value: u32 = raw
            .parse()
            .map_err(|_| ValidationError::LimitTooLarge { max })?;
        if value == 0 {
            return Err(ValidationError::InvalidLimit);
        }
        if value > max {
            return Err(ValidationError::LimitTooLarge { max });
        }
        Ok(Limit(value))
    }

    pub fn get(&self) -> u32 {
        self.0
    }
}

/// A slug safe to place in a query: `[a-z0-9-]`, at most 100 characters.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Slug(String);

impl Slug {
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.is_empty() {
            return Err(ValidationError::EmptySlug);
        }
        if raw.chars().count() > MAX_SLUG_LEN {
            return Err(ValidationError::SlugTooLong { max: MAX_SLUG_LEN });
        }
        if !raw
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
        {
            return Err(ValidationError::InvalidSlug);
        }
        Ok(Slug(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A request whose parameters passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    pub kind: ContentKind,
    pub limit: Limit,
    pub slug: Option<Slug>,
    pub exclude_slug: Option<Slug>,
}

impl ValidatedRequest {
    /// Items to ask the CMS for, one extra when a slug will be dropped.
    pub fn fetch_count(&self) -> u32 {
        self.limit
            .get()
            .saturating_add(u32::from(self.exclude_slug.is_some()))
    }
}
