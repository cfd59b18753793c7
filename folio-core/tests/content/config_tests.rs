// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for ContentConfig and how the fetcher honours it

use std::sync::Arc;
use std::time::Duration;

use folio_core::content::{
    bundled, ContentConfig, ContentData, ContentFetcher, ContentRequest, MockQueryTransport,
    MockResourceTransport, Source, REMOTE_DISABLED,
};
use serde_json::json;

use super::support::{gql_posts, gql_project};

#[test]
fn test_default_config() {
    let config = ContentConfig::default();

    assert!(config.remote_enabled);
    assert_eq!(config.timeout, Duration::from_secs(10));
    assert_eq!(config.max_limit, 50);
    assert!(config.user_agent.starts_with("Folio/"));
}

#[test]
fn test_for_site_derives_both_endpoints() {
    let config = ContentConfig::for_site("https://cms.example.com/");

    assert_eq!(config.graphql_url, "https://cms.example.com/graphql");
    assert_eq!(config.rest_url, "https://cms.example.com/wp-json/wp/v2");
}

#[test]
fn test_builders_chain() {
    let config = ContentConfig::default()
        .with_endpoints(
            "https://a.test/graphql".to_string(),
            "https://a.test/wp-json/wp/v2".to_string(),
        )
        .with_timeout(Duration::from_secs(2))
        .without_remote();

    assert_eq!(config.graphql_url, "https://a.test/graphql");
    assert_eq!(config.rest_url, "https://a.test/wp-json/wp/v2");
    assert_eq!(config.timeout, Duration::from_secs(2));
    assert!(!config.remote_enabled);
}

#[tokio::test]
async fn test_disabled_remote_serves_bundled_without_calls() {
    let query = Arc::new(MockQueryTransport::new().respond(
        "GetProjects",
        json!({ "projects": { "nodes": [gql_project("1", "Proj A", "proj-a")] } }),
    ));
    let resources = Arc::new(MockResourceTransport::new());
    let fetcher = ContentFetcher::new(
        ContentConfig::default().without_remote(),
        query.clone(),
        resources.clone(),
    );

    let result = fetcher.fetch(&ContentRequest::projects(3)).await;

    assert_eq!(result.source(), Source::Fallback);
    assert_eq!(result.error(), Some(REMOTE_DISABLED));
    assert_eq!(result.data(), &ContentData::Projects(bundled::projects()));
    assert_eq!(query.call_count(), 0);
    assert_eq!(resources.call_count(), 0);
}

#[tokio::test]
async fn test_configured_max_limit_is_enforced() {
    let config = ContentConfig {
        max_limit: 5,
        ..Default::default()
    };
    let query = Arc::new(MockQueryTransport::new());
    let fetcher = ContentFetcher::new(config, query.clone(), Arc::new(MockResourceTransport::new()));

    let result = fetcher.fetch(&ContentRequest::posts(6)).await;

    assert_eq!(result.source(), Source::Fallback);
    assert_eq!(result.error(), Some("Invalid request: Limit too large (max 5)"));
    assert_eq!(query.call_count(), 0);
    assert_eq!(fetcher.config().max_limit, 5);
}

#[tokio::test]
async fn test_largest_max_limit_with_exclusion_does_not_overflow() {
    let config = ContentConfig {
        max_limit: u32::MAX,
        ..Default::default()
    };
    let query = Arc::new(MockQueryTransport::new().respond("GetPosts", gql_posts(2)));
    let fetcher = ContentFetcher::new(config, query.clone(), Arc::new(MockResourceTransport::new()));

    let request = ContentRequest::posts(u32::MAX).excluding("post-1");
    let result = fetcher.fetch(&request).await;

    assert_eq!(result.source(), Source::Primary);
    assert_eq!(result.data().items().len(), 1);
    assert_eq!(query.last_variables(), Some(json!({ "first": u32::MAX })));
}
