// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Transport Traits
//!
//! The two remote tiers are reached through these traits so the fetcher
//! can run against reqwest clients in production and in-memory mocks in
//! tests.

use async_trait::async_trait;
use serde_json::Value;

use super::error::TierResult;

/// Structured query endpoint (GraphQL).
///
/// Implementations return the decoded response body. The fetcher
/// unwraps the `data`/`errors` envelope itself, so a transport may hand
/// back either the full envelope or just the data object.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    /// Sends one query with its variables.
    async fn query(&self, query: &str, variables: Value) -> TierResult<Value>;
}

/// Flat per-resource endpoint (WordPress REST).
#[async_trait]
pub trait ResourceTransport: Send + Sync {
    /// Fetches `resource` (e.g. `"posts"`) with query parameters.
    ///
    /// Returns the decoded body: an array of objects or a single object.
    async fn get(&self, resource: &str, params: &[(&str, String)]) -> TierResult<Value>;
}
