// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for normalization across tiers
//!
//! The same logical item must come out the same whichever tier served
//! it (ids excepted: GraphQL uses global ids, REST numeric ones).

use folio_core::content::{
    ContentData, ContentItem, ContentRequest, ItemDetails, MockQueryTransport, MockReply,
    MockResourceTransport, Source,
};
use serde_json::json;

use super::support::{fetcher, gql_project, rest_project};

async fn project_via_primary() -> ContentItem {
    let query = MockQueryTransport::new().respond(
        "GetProject",
        json!({ "data": { "project": gql_project("cHJvamVjdDox", "Proj A", "proj-a") } }),
    );
    let (fetcher, _, _) = fetcher(query, MockResourceTransport::new());
    let result = fetcher.fetch(&ContentRequest::project("proj-a")).await;
    assert_eq!(result.source(), Source::Primary);
    match result.into_data() {
        ContentData::Project(item) => item,
        other => panic!("unexpected payload: {:?}", other),
    }
}

async fn project_via_secondary() -> ContentItem {
    let query = MockQueryTransport::new().on("GetProject", MockReply::Status(503));
    let resources =
        MockResourceTransport::new().respond("projects", json!([rest_project(1, "Proj A", "proj-a")]));
    let (fetcher, _, _) = fetcher(query, resources);
    let result = fetcher.fetch(&ContentRequest::project("proj-a")).await;
    assert_eq!(result.source(), Source::Secondary);
    match result.into_data() {
        ContentData::Project(item) => item,
        other => panic!("unexpected payload: {:?}", other),
    }
}

#[tokio::test]
async fn test_same_project_normalizes_identically() {
    let primary = project_via_primary().await;
    let secondary = project_via_secondary().await;

    assert_eq!(primary.title, secondary.title);
    assert_eq!(primary.slug, secondary.slug);
    assert_eq!(primary.link, secondary.link);
    assert_eq!(primary.excerpt, secondary.excerpt);
    assert_eq!(primary.date, secondary.date);
    assert_eq!(primary.featured_image, secondary.featured_image);
    assert_eq!(primary.details, secondary.details);
    assert_ne!(primary.id, secondary.id);
}

#[tokio::test]
async fn test_project_details_from_custom_fields() {
    let item = project_via_secondary().await;

    assert_eq!(item.image_url(), Some("/a.png"));
    match item.details {
        ItemDetails::Project {
            visit_link,
            repository_link,
            technologies,
            ..
        } => {
            assert_eq!(visit_link.as_deref(), Some("https://a.com"));
            assert!(repository_link.is_none());
            assert_eq!(technologies, vec!["Rust", "WordPress"]);
        }
        other => panic!("unexpected details: {:?}", other),
    }
}

#[tokio::test]
async fn test_missing_title_and_slug_get_defaults() {
    let query = MockQueryTransport::new().respond(
        "GetProjects",
        json!({ "projects": { "nodes": [{ "id": "x", "title": null }] } }),
    );
    let (fetcher, _, _) = fetcher(query, MockResourceTransport::new());

    let result = fetcher.fetch(&ContentRequest::projects(1)).await;

    let item = &result.data().items()[0];
    assert_eq!(item.title, "Untitled Project");
    assert_eq!(item.slug, "");
    assert_eq!(item.link, "#");
    assert!(item.featured_image.is_none());
    assert!(item.date.is_none());
}

#[tokio::test]
async fn test_embedded_media_error_means_no_image() {
    let query = MockQueryTransport::new().on("GetPosts", MockReply::Fail("down".into()));
    let resources = MockResourceTransport::new().respond(
        "posts",
        json!([{
            "id": 5,
            "slug": "private-media",
            "title": { "rendered": "Private media" },
            "_embedded": {
                "wp:featuredmedia": [{ "code": "rest_forbidden", "message": "Sorry" }]
            }
        }]),
    );
    let (fetcher, _, _) = fetcher(query, resources);

    let result = fetcher.fetch(&ContentRequest::posts(3)).await;

    assert_eq!(result.source(), Source::Secondary);
    assert!(result.data().items()[0].featured_image.is_none());
}

#[test]
fn test_normalized_item_json_shape() {
    let item = ContentItem {
        id: "1".to_string(),
        title: "T".to_string(),
        excerpt: String::new(),
        slug: "t".to_string(),
        date: None,
        featured_image: None,
        link: "/projects/t".to_string(),
        details: ItemDetails::Project {
            content: String::new(),
            visit_link: Some("https://t.example".to_string()),
            repository_link: None,
            technologies: Vec::new(),
        },
    };

    let value = serde_json::to_value(&item).unwrap();
    assert!(value["featuredImage"].is_null());
    assert_eq!(value["details"]["type"], "project");
    assert_eq!(value["details"]["visitLink"], "https://t.example");
}
