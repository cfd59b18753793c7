// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! HTTP transports for both remote tiers
//!
//! This module provides reqwest-based transports with:
//! - Timeout configuration
//! - Status checking
//! - Size limits

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::{json, Value};
use tracing::debug;

use super::config::ContentConfig;
use super::error::{FetchError, TierResult};
use super::transport::{QueryTransport, ResourceTransport};

fn build_client(config: &ContentConfig) -> Result<Client, FetchError> {
    Ok(Client::builder()
        .timeout(config.timeout)
        .user_agent(config.user_agent.clone())
        .build()?)
}

/// Reads a JSON body, enforcing the status and size limits
async fn read_json(response: Response, max_size: u64) -> TierResult<Value> {
    if !response.status().is_success() {
        return Err(FetchError::HttpError(response.status().as_u16()));
    }

    // Check content length before downloading
    if let Some(len) = response.content_length() {
        if len > max_size {
            return Err(FetchError::TooLarge {
                size: len,
                max: max_size,
            });
        }
    }

    let data = response.bytes().await?;

    // Verify size after download (in case content-length was missing)
    if data.len() as u64 > max_size {
        return Err(FetchError::TooLarge {
            size: data.len() as u64,
            max: max_size,
        });
    }

    Ok(serde_json::from_slice(&data)?)
}

/// GraphQL endpoint client
#[derive(Debug, Clone)]
pub struct GraphqlClient {
    client: Client,
    endpoint: String,
    max_response_size: u64,
}

impl GraphqlClient {
    /// Create a new GraphQL client from config
    pub fn new(config: &ContentConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config)?,
            endpoint: config.graphql_url.clone(),
            max_response_size: config.max_response_size,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl QueryTransport for GraphqlClient {
    async fn query(&self, query: &str, variables: Value) -> TierResult<Value> {
        debug!(endpoint = %self.endpoint, "POST graphql");
        let response = self
            .client
            .post(&self.endpoint)
            .json(&json!({ "query": query, "variables": variables }))
            .send()
            .await?;

        read_json(response, self.max_response_size).await
    }
}

/// WordPress REST API client
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
    max_response_size: u64,
}

impl RestClient {
    /// Create a new REST client from config
    pub fn new(config: &ContentConfig) -> Result<Self, FetchError> {
        Ok(Self {
            client: build_client(config)?,
            base_url: config.rest_url.trim_end_matches('/').to_string(),
            max_response_size: config.max_response_size,
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ResourceTransport for RestClient {
    async fn get(&self, resource: &str, params: &[(&str, String)]) -> TierResult<Value> {
        let url = format!("{}/{}", self.base_url, resource.trim_start_matches('/'));
        debug!(%url, "GET rest");
        let response = self.client.get(&url).query(params).send().await?;

        read_json(response, self.max_response_size).await
    }
}
