// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shared fixtures for content tests

use std::sync::Arc;

use folio_core::content::{
    ContentConfig, ContentFetcher, MockQueryTransport, MockResourceTransport,
};
use serde_json::{json, Value};

/// Fetcher over the given mocks, with shared handles for assertions
pub fn fetcher(
    query: MockQueryTransport,
    resources: MockResourceTransport,
) -> (
    ContentFetcher,
    Arc<MockQueryTransport>,
    Arc<MockResourceTransport>,
) {
    let query = Arc::new(query);
    let resources = Arc::new(resources);
    let fetcher = ContentFetcher::new(ContentConfig::default(), query.clone(), resources.clone());
    (fetcher, query, resources)
}

/// GraphQL project node as WPGraphQL returns it
pub fn gql_project(id: &str, title: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "title": title,
        "slug": slug,
        "excerpt": "<p>Short summary</p>",
        "content": "<p>Long story</p>",
        "date": "2024-03-01T10:00:00",
        "featuredImage": {
            "node": {
                "sourceUrl": "/a.png",
                "altText": "A",
                "mediaDetails": { "width": 800, "height": 600 }
            }
        },
        "caseStudy": {
            "projectLinks": { "liveSite": "https://a.com", "repository": null },
            "technologies": ["Rust", "WordPress"]
        }
    })
}

/// The same project as the REST API returns it
pub fn rest_project(id: u64, title: &str, slug: &str) -> Value {
    json!({
        "id": id,
        "slug": slug,
        "date": "2024-03-01T10:00:00",
        "title": { "rendered": title },
        "excerpt": { "rendered": "<p>Short summary</p>\n" },
        "content": { "rendered": "<p>Long story</p>" },
        "acf_fields": false,
        "acf": {
            "project_links": { "live_site": "https://a.com" },
            "technologies": "Rust, WordPress"
        },
        "_embedded": {
            "wp:featuredmedia": [{
                "source_url": "/a.png",
                "alt_text": "A",
                "media_details": { "width": 800, "height": 600 }
            }]
        }
    })
}

/// GraphQL post node
pub fn gql_post(index: usize) -> Value {
    json!({
        "id": format!("post-{}", index),
        "title": format!("Post {}", index),
        "slug": format!("post-{}", index),
        "excerpt": "<p>Excerpt</p>",
        "date": "2024-02-01T09:00:00",
        "featuredImage": null,
        "author": { "node": { "name": "Sam" } },
        "categories": { "nodes": [{ "name": "Notes", "slug": "notes" }] },
        "tags": { "nodes": [] }
    })
}

pub fn gql_posts(count: usize) -> Value {
    let nodes: Vec<Value> = (1..=count).map(gql_post).collect();
    json!({ "data": { "posts": { "nodes": nodes } } })
}

/// GraphQL homepage sections
pub fn gql_homepage() -> Value {
    json!({
        "data": {
            "page": {
                "homepageSections": {
                    "heroSection": {
                        "title": "Hello from WordPress",
                        "subtitle": "Builder",
                        "description": "I make websites",
                        "ctaText": "See projects",
                        "ctaLink": "/projects"
                    },
                    "aboutSection": { "title": "About", "content": "<p>Me</p>" },
                    "contactSection": null
                }
            }
        }
    })
}
