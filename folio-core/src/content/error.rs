// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Content Fetch Errors
//!
//! Every failure a tier can hit. None of these reach callers of the
//! fetcher; they end up as the message of a fallback envelope.

use thiserror::Error;

use super::request::ValidationError;

/// Result type for a single tier attempt.
pub type TierResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching content.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Caller-supplied parameter was rejected before any request.
    #[error("Invalid request: {0}")]
    Validation(#[from] ValidationError),

    /// Non-2xx HTTP status.
    #[error("HTTP error: {0}")]
    HttpError(u16),

    /// Network/request error.
    #[cfg(feature = "http")]
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Transport failure without a more specific type.
    #[error("Transport error: {0}")]
    Transport(String),

    /// GraphQL `errors` array in an otherwise successful response.
    #[error("Query error: {0}")]
    Query(String),

    /// Well-formed response without the expected content.
    #[error("Empty response: {0}")]
    Empty(String),

    /// Response body over the configured limit.
    #[error("Response too large: {size} bytes (max {max})")]
    TooLarge {
        /// Actual size in bytes
        size: u64,
        /// Maximum allowed size in bytes
        max: u64,
    },

    /// Body is not JSON, or not the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Background task died before producing a result.
    #[error("Task failed: {0}")]
    Join(String),
}

/// Coarse classification of a [`FetchError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    Validation,
    Transport,
    SemanticEmpty,
    Parse,
}

impl FetchError {
    /// Shorthand for a missing-node failure.
    pub fn empty(what: impl Into<String>) -> Self {
        FetchError::Empty(what.into())
    }

    pub fn class(&self) -> ErrorClass {
        match self {
            FetchError::Validation(_) => ErrorClass::Validation,
            FetchError::Empty(_) => ErrorClass::SemanticEmpty,
            FetchError::Json(_) => ErrorClass::Parse,
            FetchError::HttpError(_)
            | FetchError::Transport(_)
            | FetchError::Query(_)
            | FetchError::TooLarge { .. }
            | FetchError::Join(_) => ErrorClass::Transport,
            #[cfg(feature = "http")]
            FetchError::Network(e) if e.is_decode() => ErrorClass::Parse,
            #[cfg(feature = "http")]
            FetchError::Network(_) => ErrorClass::Transport,
        }
    }
}
