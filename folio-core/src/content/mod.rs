// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tiered content fetching module
//!
//! Provides functionality for resolving site content from a headless
//! WordPress instance:
//! - Homepage sections
//! - Projects and blog posts (lists and single items)
//! - The about page
//!
//! Content is fetched from WPGraphQL first, then the REST API, and
//! bundled content serves as fallback when both are unavailable.

mod config;
mod error;
mod fallback;
mod fetcher;
mod graphql;
#[cfg(feature = "http")]
mod http;
mod mock;
mod normalize;
mod request;
mod rest;
mod transport;
mod types;

pub use config::ContentConfig;
pub use error::{ErrorClass, FetchError, TierResult};
pub use fetcher::{ContentFetcher, BUNDLE_LIST_LIMIT, REMOTE_DISABLED};
#[cfg(feature = "http")]
pub use http::{GraphqlClient, RestClient};
pub use mock::{operation_name, MockQueryTransport, MockReply, MockResourceTransport};
pub use request::{ContentRequest, Limit, Slug, ValidatedRequest, ValidationError, MAX_SLUG_LEN};
pub use rest::{custom_field_keys, find_custom_fields};
pub use transport::{QueryTransport, ResourceTransport};
pub use types::{
    AboutSection, ContactSection, ContentData, ContentItem, ContentKind, FeaturedImage,
    FetchResult, HeroSection, HomepageBundle, HomepageSections, ItemDetails, Source, Term,
    UNKNOWN_ERROR,
};

/// Bundled placeholder content
pub mod bundled {
    pub use super::fallback::{about_page, content, homepage, post, posts, project, projects};
}
