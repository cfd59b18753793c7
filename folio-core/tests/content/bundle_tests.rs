// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for the concurrent homepage bundle
//!
//! One slot failing, or its task dying, must leave the other slots'
//! results untouched.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use folio_core::content::{
    bundled, ContentConfig, ContentFetcher, FetchError, MockQueryTransport, MockReply,
    MockResourceTransport, QueryTransport, Source, TierResult, BUNDLE_LIST_LIMIT,
};
use serde_json::{json, Value};

use super::support::{fetcher, gql_homepage, gql_posts, gql_project};

#[tokio::test]
async fn test_bundle_all_primary() {
    let query = MockQueryTransport::new()
        .respond("HomepageSections", gql_homepage())
        .respond(
            "GetProjects",
            json!({ "projects": { "nodes": [gql_project("1", "Proj A", "proj-a")] } }),
        )
        .respond("GetPosts", gql_posts(3));
    let (fetcher, query, resources) = fetcher(query, MockResourceTransport::new());

    let bundle = fetcher.fetch_homepage_bundle().await;

    assert_eq!(bundle.homepage.source(), Source::Primary);
    assert_eq!(bundle.projects.source(), Source::Primary);
    assert_eq!(bundle.posts.source(), Source::Primary);
    assert_eq!(bundle.posts.data().len(), 3);
    assert_eq!(query.call_count(), 3);
    assert_eq!(resources.call_count(), 0);
}

#[tokio::test]
async fn test_bundle_requests_three_items_per_list() {
    let (fetcher, query, _) = fetcher(
        MockQueryTransport::new().respond("GetPosts", gql_posts(5)),
        MockResourceTransport::new(),
    );

    let bundle = fetcher.fetch_homepage_bundle().await;

    assert_eq!(bundle.posts.data().len(), BUNDLE_LIST_LIMIT as usize);
    assert_eq!(query.calls_for("GetPosts"), 1);
}

#[tokio::test]
async fn test_projects_failure_does_not_touch_other_slots() {
    let query = MockQueryTransport::new()
        .respond("HomepageSections", gql_homepage())
        .on("GetProjects", MockReply::Status(500))
        .respond("GetPosts", gql_posts(3));
    let resources = MockResourceTransport::new().on("projects", MockReply::Fail("timeout".into()));
    let (fetcher, _, _) = fetcher(query, resources);

    let bundle = fetcher.fetch_homepage_bundle().await;

    assert_eq!(bundle.projects.source(), Source::Fallback);
    assert_eq!(bundle.projects.error(), Some("Transport error: timeout"));
    assert_eq!(bundle.projects.data(), &bundled::projects());

    assert_eq!(bundle.homepage.source(), Source::Primary);
    assert_eq!(bundle.homepage.data().hero.title, "Hello from WordPress");
    assert_eq!(bundle.posts.source(), Source::Primary);
    assert_eq!(bundle.posts.data()[0].title, "Post 1");
}

#[tokio::test]
async fn test_panicking_slot_gets_fallback_alone() {
    let query = MockQueryTransport::new()
        .respond("HomepageSections", gql_homepage())
        .on("GetProjects", MockReply::Panic("projects exploded".into()))
        .respond("GetPosts", gql_posts(3));
    let (fetcher, _, _) = fetcher(query, MockResourceTransport::new());

    let bundle = fetcher.fetch_homepage_bundle().await;

    assert_eq!(bundle.projects.source(), Source::Fallback);
    assert_eq!(bundle.projects.error(), Some("Task failed: projects exploded"));
    assert_eq!(bundle.projects.data(), &bundled::projects());
    assert_eq!(bundle.homepage.source(), Source::Primary);
    assert_eq!(bundle.posts.source(), Source::Primary);
}

/// Panics with a payload that is not a string
struct OpaquePanicTransport;

#[async_trait]
impl QueryTransport for OpaquePanicTransport {
    async fn query(&self, _query: &str, _variables: Value) -> TierResult<Value> {
        std::panic::panic_any(42_u32)
    }
}

#[tokio::test]
async fn test_non_string_panic_reads_unknown_error() {
    let fetcher = ContentFetcher::new(
        ContentConfig::default(),
        Arc::new(OpaquePanicTransport),
        Arc::new(MockResourceTransport::new()),
    );

    let bundle = fetcher.fetch_homepage_bundle().await;

    for error in [
        bundle.homepage.error(),
        bundle.projects.error(),
        bundle.posts.error(),
    ] {
        assert_eq!(error, Some("Task failed: Unknown error"));
    }
    assert_eq!(bundle.homepage.data(), &bundled::homepage());
    assert_eq!(bundle.posts.data(), &bundled::posts());
}

/// Holds each query open for a while and records peak concurrency
#[derive(Default)]
struct SlowQueryTransport {
    in_flight: AtomicUsize,
    peak: AtomicUsize,
}

#[async_trait]
impl QueryTransport for SlowQueryTransport {
    async fn query(&self, _query: &str, _variables: Value) -> TierResult<Value> {
        let now = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(100)).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        Err(FetchError::Transport("slow".to_string()))
    }
}

#[tokio::test]
async fn test_bundle_fetches_run_concurrently() {
    let query = Arc::new(SlowQueryTransport::default());
    let fetcher = ContentFetcher::new(
        ContentConfig::default(),
        query.clone(),
        Arc::new(MockResourceTransport::new()),
    );

    let bundle = fetcher.fetch_homepage_bundle().await;

    assert_eq!(query.peak.load(Ordering::SeqCst), 3);
    assert_eq!(query.in_flight.load(Ordering::SeqCst), 0);
    assert_eq!(bundle.homepage.source(), Source::Fallback);
    assert_eq!(bundle.projects.source(), Source::Fallback);
    assert_eq!(bundle.posts.source(), Source::Fallback);
}
