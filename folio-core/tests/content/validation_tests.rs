// SPDX-FileCopyrightText: 2026 Mattia Egloff <mattia.egloff@pm.me>
//
// SPDX-License-Identifier: GPL-3.0-or-later

//! Property tests for request validation
//!
//! Uses proptest to check the slug and limit rules hold for all inputs,
//! and that nothing invalid ever reaches a transport.

use proptest::prelude::*;

use folio_core::content::{
    ContentKind, ContentRequest, Limit, MockQueryTransport, MockResourceTransport, Slug, Source,
    ValidationError, MAX_SLUG_LEN,
};

use super::support::fetcher;

// ============================================================
// Strategies
// ============================================================

fn valid_slug_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9-]{1,100}"
}

/// Slugs with at least one character outside `[a-z0-9-]`
fn invalid_slug_strategy() -> impl Strategy<Value = String> {
    ("[a-z0-9-]{0,20}", "[A-Z./_ %?#&=\"'<>]", "[a-z0-9-]{0,20}")
        .prop_map(|(head, bad, tail)| format!("{}{}{}", head, bad, tail))
}

proptest! {
    #[test]
    fn prop_valid_slugs_parse_unchanged(raw in valid_slug_strategy()) {
        let slug = Slug::parse(&raw).unwrap();
        prop_assert_eq!(slug.as_str(), raw.as_str());
    }

    #[test]
    fn prop_slugs_with_other_characters_rejected(raw in invalid_slug_strategy()) {
        prop_assert_eq!(Slug::parse(&raw), Err(ValidationError::InvalidSlug));
    }

    #[test]
    fn prop_overlong_slugs_rejected(extra in 1usize..50) {
        let raw = "a".repeat(MAX_SLUG_LEN + extra);
        prop_assert_eq!(
            Slug::parse(&raw),
            Err(ValidationError::SlugTooLong { max: MAX_SLUG_LEN })
        );
    }

    #[test]
    fn prop_limits_within_range_accepted(value in 1u32..=50) {
        prop_assert_eq!(Limit::parse(&value.to_string(), 50).unwrap().get(), value);
    }

    #[test]
    fn prop_limits_above_maximum_rejected(value in 51u64..=u64::MAX) {
        prop_assert_eq!(
            Limit::parse(&value.to_string(), 50),
            Err(ValidationError::LimitTooLarge { max: 50 })
        );
    }

    #[test]
    fn prop_non_numeric_limits_rejected(raw in "[a-z.+-]{1,8}") {
        prop_assert_eq!(Limit::parse(&raw, 50), Err(ValidationError::InvalidLimit));
    }

    #[test]
    fn prop_exclude_slug_asks_for_one_more(limit in 1u32..=50, exclude in valid_slug_strategy()) {
        let validated = ContentRequest::posts(limit)
            .excluding(exclude)
            .validate(50)
            .unwrap();
        prop_assert_eq!(validated.fetch_count(), limit + 1);
    }
}

#[test]
fn test_every_single_kind_requires_slug() {
    for kind in ContentKind::ALL {
        let result = ContentRequest::new(kind).validate(50);
        if kind.requires_slug() {
            assert_eq!(result.unwrap_err(), ValidationError::MissingSlug(kind));
        } else {
            assert!(result.is_ok(), "{}", kind);
        }
    }
}

#[test]
fn test_invalid_exclude_slug_rejected() {
    let err = ContentRequest::posts(3)
        .excluding("Not A Slug")
        .validate(50)
        .unwrap_err();
    assert_eq!(err, ValidationError::InvalidSlug);
}

#[tokio::test]
async fn test_injection_attempts_never_reach_transports() {
    let (fetcher, query, resources) =
        fetcher(MockQueryTransport::new(), MockResourceTransport::new());

    let attempts = [
        ContentRequest::post("\") { id } #"),
        ContentRequest::project("a%2F..%2Fb"),
        ContentRequest::post(""),
        ContentRequest::posts("3; DROP TABLE"),
        ContentRequest::projects("-1"),
        ContentRequest::posts(3).excluding("x&per_page=100"),
    ];
    for request in &attempts {
        let result = fetcher.fetch(request).await;
        assert_eq!(result.source(), Source::Fallback, "{:?}", request);
        assert!(
            result.error().unwrap().starts_with("Invalid request: "),
            "{:?}",
            request
        );
    }

    assert_eq!(query.call_count(), 0);
    assert_eq!(resources.call_count(), 0);
}
