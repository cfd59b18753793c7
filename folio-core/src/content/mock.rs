// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mock Transports
//!
//! In-memory transports for testing the fetcher without a CMS.
//! Replies are keyed by GraphQL operation name or REST resource, so one
//! mock can serve several concurrent fetches.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::Value;

use super::error::{FetchError, TierResult};
use super::transport::{QueryTransport, ResourceTransport};

/// A canned reply.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Respond with this body.
    Json(Value),
    /// Fail with this HTTP status.
    Status(u16),
    /// Fail with a transport error carrying this message.
    Fail(String),
    /// Panic inside the transport.
    Panic(String),
}

impl MockReply {
    fn into_result(self) -> TierResult<Value> {
        match self {
            MockReply::Json(value) => Ok(value),
            MockReply::Status(code) => Err(FetchError::HttpError(code)),
            MockReply::Fail(message) => Err(FetchError::Transport(message)),
            MockReply::Panic(message) => panic!("{}", message),
        }
    }
}

#[derive(Debug, Default)]
struct MockState {
    replies: HashMap<String, MockReply>,
    calls: Vec<(String, Value)>,
}

impl MockState {
    fn record(&mut self, key: &str, args: Value) -> Option<MockReply> {
        self.calls.push((key.to_string(), args));
        self.replies.get(key).cloned()
    }
}

fn lock(state: &Mutex<MockState>) -> std::sync::MutexGuard<'_, MockState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

/// Resolves a recorded call once the state lock is released.
fn reply_for(key: &str, reply: Option<MockReply>) -> TierResult<Value> {
    match reply {
        Some(reply) => reply.into_result(),
        None => Err(FetchError::Transport(format!("no mock reply for {}", key))),
    }
}

/// Name of the first operation in a GraphQL document.
///
/// `"query GetPosts($first: Int) { ... }"` gives `"GetPosts"`.
pub fn operation_name(query: &str) -> Option<&str> {
    let rest = query.trim_start();
    let rest = rest
        .strip_prefix("query")
        .or_else(|| rest.strip_prefix("mutation"))?
        .trim_start();
    let end = rest
        .find(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
        .unwrap_or(rest.len());
    (end > 0).then(|| &rest[..end])
}

/// Mock GraphQL transport.
///
/// Replies are keyed by operation name; unknown operations fail.
#[derive(Debug, Default)]
pub struct MockQueryTransport {
    state: Mutex<MockState>,
}

impl MockQueryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply for an operation.
    pub fn on(self, operation: &str, reply: MockReply) -> Self {
        lock(&self.state)
            .replies
            .insert(operation.to_string(), reply);
        self
    }

    /// Shorthand for a JSON reply.
    pub fn respond(self, operation: &str, body: Value) -> Self {
        self.on(operation, MockReply::Json(body))
    }

    /// Total number of queries sent.
    pub fn call_count(&self) -> usize {
        lock(&self.state).calls.len()
    }

    /// Number of times an operation was sent.
    pub fn calls_for(&self, operation: &str) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|(op, _)| op == operation)
            .count()
    }

    /// Variables of the most recent query.
    pub fn last_variables(&self) -> Option<Value> {
        lock(&self.state).calls.last().map(|(_, vars)| vars.clone())
    }
}

#[async_trait]
impl QueryTransport for MockQueryTransport {
    async fn query(&self, query: &str, variables: Value) -> TierResult<Value> {
        let operation = operation_name(query).unwrap_or("anonymous");
        // Guard is dropped before a Panic reply unwinds.
        let reply = lock(&self.state).record(operation, variables);
        reply_for(operation, reply)
    }
}

/// Mock REST transport.
///
/// Replies are keyed by resource path (`"posts"`, `"pages"`, ...).
#[derive(Debug, Default)]
pub struct MockResourceTransport {
    state: Mutex<MockState>,
}

impl MockResourceTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the reply for a resource.
    pub fn on(self, resource: &str, reply: MockReply) -> Self {
        lock(&self.state)
            .replies
            .insert(resource.to_string(), reply);
        self
    }

    /// Shorthand for a JSON reply.
    pub fn respond(self, resource: &str, body: Value) -> Self {
        self.on(resource, MockReply::Json(body))
    }

    /// Total number of requests made.
    pub fn call_count(&self) -> usize {
        lock(&self.state).calls.len()
    }

    /// Number of requests for a resource.
    pub fn calls_for(&self, resource: &str) -> usize {
        lock(&self.state)
            .calls
            .iter()
            .filter(|(r, _)| r == resource)
            .count()
    }

    /// Query parameters of the most recent request, as a JSON object.
    pub fn last_params(&self) -> Option<Value> {
        lock(&self.state).calls.last().map(|(_, params)| params.clone())
    }
}

#[async_trait]
impl ResourceTransport for MockResourceTransport {
    async fn get(&self, resource: &str, params: &[(&str, String)]) -> TierResult<Value> {
        let params: serde_json::Map<String, Value> = params
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.clone())))
            .collect();
        let reply = lock(&self.state).record(resource, Value::Object(params));
        reply_for(resource, reply)
    }
}
