// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Fetcher - resolves requests through the tiers
//!
//! Each request is tried against:
//! - the GraphQL endpoint (primary)
//! - the REST API (secondary), only if the primary tier failed
//! - bundled content (fallback), only if both failed
//!
//! One attempt per tier, no caching. Callers always get a
//! [`FetchResult`], never an error.

use std::sync::Arc;

use serde_json::Value;
use tokio::task::JoinError;
use tracing::{debug, error, info, warn};

use super::config::ContentConfig;
use super::error::{FetchError, TierResult};
use super::fallback;
use super::graphql;
use super::request::{ContentRequest, ValidatedRequest};
use super::rest;
use super::transport::{QueryTransport, ResourceTransport};
use super::types::{
    ContentData, ContentItem, ContentKind, FetchResult, HomepageBundle, HomepageSections,
    UNKNOWN_ERROR,
};

/// Fallback message when remote tiers are switched off
pub const REMOTE_DISABLED: &str = "Remote content disabled";

/// Items per list in the homepage bundle
pub const BUNDLE_LIST_LIMIT: u32 = 3;

/// Normalizes one tier's body for a request
type Normalizer<T> = fn(Value, &ValidatedRequest) -> TierResult<T>;

/// Resolves content requests through GraphQL, REST and bundled content
///
/// Cloning is cheap; clones share the transports.
#[derive(Clone)]
pub struct ContentFetcher {
    config: Arc<ContentConfig>,
    query: Arc<dyn QueryTransport>,
    resources: Arc<dyn ResourceTransport>,
}

impl ContentFetcher {
    /// Create a fetcher over the given transports
    pub fn new(
        config: ContentConfig,
        query: Arc<dyn QueryTransport>,
        resources: Arc<dyn ResourceTransport>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            query,
            resources,
        }
    }

    /// Create a fetcher with HTTP transports built from config
    #[cfg(feature = "http")]
    pub fn from_config(config: ContentConfig) -> Result<Self, FetchError> {
        use super::http::{GraphqlClient, RestClient};

        let query = Arc::new(GraphqlClient::new(&config)?);
        let resources = Arc::new(RestClient::new(&config)?);
        Ok(Self::new(config, query, resources))
    }

    /// Get the configuration
    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    /// Resolve a request into an envelope
    ///
    /// Invalid parameters short-circuit to the kind's bundled content
    /// without touching either transport.
    pub async fn fetch(&self, request: &ContentRequest) -> FetchResult<ContentData> {
        let validated = match request.validate(self.config.max_limit) {
            Ok(validated) => validated,
            Err(e) => {
                warn!(kind = %request.kind, error = %e, "rejected content request");
                return FetchResult::fallback(
                    fallback::content(request.kind, None),
                    FetchError::from(e).to_string(),
                );
            }
        };

        match validated.kind {
            ContentKind::Homepage => self
                .resolve(&validated, graphql::homepage, rest::homepage, fallback::homepage)
                .await
                .map(ContentData::Homepage),
            ContentKind::ProjectList => self
                .resolve(&validated, graphql::projects, rest::projects, fallback::projects)
                .await
                .map(ContentData::Projects),
            ContentKind::PostList => self
                .resolve(&validated, graphql::posts, rest::posts, fallback::posts)
                .await
                .map(ContentData::Posts),
            ContentKind::AboutPage => self
                .resolve(&validated, graphql::about_page, rest::about_page, fallback::about_page)
                .await
                .map(ContentData::Page),
            ContentKind::SinglePost => {
                let slug = validated.slug.clone();
                self.resolve(&validated, graphql::post, rest::post, || {
                    fallback::post(slug.as_ref())
                })
                .await
                .map(ContentData::Post)
            }
            ContentKind::SingleProject => {
                let slug = validated.slug.clone();
                self.resolve(&validated, graphql::project, rest::project, || {
                    fallback::project(slug.as_ref())
                })
                .await
                .map(ContentData::Project)
            }
        }
    }

    /// Fetch homepage sections, projects and posts concurrently
    ///
    /// The three fetches run as separate tasks. Each slot settles on its
    /// own; a task that dies takes only its own slot down to fallback.
    pub async fn fetch_homepage_bundle(&self) -> HomepageBundle {
        let spawn = |request: ContentRequest| {
            let fetcher = self.clone();
            tokio::spawn(async move { fetcher.fetch(&request).await })
        };

        let (homepage, projects, posts) = tokio::join!(
            spawn(ContentRequest::homepage()),
            spawn(ContentRequest::projects(BUNDLE_LIST_LIMIT)),
            spawn(ContentRequest::posts(BUNDLE_LIST_LIMIT)),
        );

        HomepageBundle {
            homepage: settle(ContentKind::Homepage, homepage).map(into_homepage),
            projects: settle(ContentKind::ProjectList, projects)
                .map(|data| into_items(data, fallback::projects)),
            posts: settle(ContentKind::PostList, posts)
                .map(|data| into_items(data, fallback::posts)),
        }
    }

    async fn resolve<T>(
        &self,
        request: &ValidatedRequest,
        primary: Normalizer<T>,
        secondary: Normalizer<T>,
        bundled: impl FnOnce() -> T,
    ) -> FetchResult<T> {
        let kind = request.kind;

        if !self.config.remote_enabled {
            debug!(%kind, "remote tiers disabled");
            return FetchResult::fallback(bundled(), REMOTE_DISABLED);
        }

        match self.try_primary(request, primary).await {
            Ok(data) => {
                debug!(%kind, "served from primary tier");
                return FetchResult::primary(data);
            }
            Err(e) => warn!(%kind, tier = "primary", class = ?e.class(), error = %e, "tier failed"),
        }

        let last_error = match self.try_secondary(request, secondary).await {
            Ok(data) => {
                info!(%kind, "served from secondary tier");
                return FetchResult::secondary(data);
            }
            Err(e) => {
                warn!(%kind, tier = "secondary", class = ?e.class(), error = %e, "tier failed");
                e
            }
        };

        info!(%kind, "serving bundled content");
        FetchResult::fallback(bundled(), last_error.to_string())
    }

    async fn try_primary<T>(
        &self,
        request: &ValidatedRequest,
        normalize: Normalizer<T>,
    ) -> TierResult<T> {
        let (query, variables) = graphql::operation(request);
        let body = self.query.query(&query, variables).await?;
        let data = graphql::unwrap_envelope(body)?;
        normalize(data, request)
    }

    async fn try_secondary<T>(
        &self,
        request: &ValidatedRequest,
        normalize: Normalizer<T>,
    ) -> TierResult<T> {
        let (resource, params) = rest::resource(request);
        let body = self.resources.get(resource, &params).await?;
        normalize(body, request)
    }
}

/// Unwraps a joined task, substituting bundled content if it died
fn settle(
    kind: ContentKind,
    joined: Result<FetchResult<ContentData>, JoinError>,
) -> FetchResult<ContentData> {
    joined.unwrap_or_else(|e| {
        let message = FetchError::Join(join_message(e)).to_string();
        error!(%kind, error = %message, "bundle slot failed");
        FetchResult::fallback(fallback::content(kind, None), message)
    })
}

fn join_message(err: JoinError) -> String {
    if !err.is_panic() {
        return "task cancelled".to_string();
    }
    let payload = err.into_panic();
    if let Some(message) = payload.downcast_ref::<&str>() {
        message.to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        UNKNOWN_ERROR.to_string()
    }
}

fn into_homepage(data: ContentData) -> HomepageSections {
    match data {
        ContentData::Homepage(sections) => sections,
        _ => fallback::homepage(),
    }
}

fn into_items(data: ContentData, bundled: fn() -> Vec<ContentItem>) -> Vec<ContentItem> {
    match data {
        ContentData::Projects(items) | ContentData::Posts(items) => items,
        _ => bundled(),
    }
}
