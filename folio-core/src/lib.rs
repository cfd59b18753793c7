// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Folio Core Library
//!
//! Content layer for the Folio portfolio site. Pages ask for content by
//! kind and always get a complete envelope back, whether WordPress
//! answered over GraphQL, over REST, or not at all.

pub mod content;

pub use content::{
    ContentConfig, ContentData, ContentFetcher, ContentItem, ContentKind, ContentRequest,
    FetchError, FetchResult, HomepageBundle, HomepageSections, QueryTransport,
    ResourceTransport, Source, ValidationError,
};
