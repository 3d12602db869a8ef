use eden_names::{service::names::locale::FixedLocale, NameCategory, NameRequest};
use eden_test_utils::prelude::*;
use serde_json::json;

use super::name_resolver;

#[tokio::test]
// Test that duplicate IDs are sent once and a repeated request never reaches the portal
async fn deduplicates_and_skips_cached_ids() {
    let test = TestBuilder::new()
        .with_names_endpoint(
            Some(json!({ "language": "en", "ids": { "type": [587] } })),
            &[(587, "Rifter")],
            1,
        )
        .build()
        .await;
    let resolver = name_resolver(&test);
    let request = NameRequest::new().ids(NameCategory::Type, [587, 587, 587]);

    resolver.resolve(&request).await;
    resolver.resolve(&request).await;

    test.assert_mocks();
    assert_eq!(resolver.get_name(Some(587), None), "Rifter");
    assert_eq!(resolver.len(), 1);
}

#[tokio::test]
// Test that only the uncached universe IDs are requested when the type is already known
async fn requests_only_uncached_groups() {
    let test = TestBuilder::new()
        .with_names_endpoint(
            Some(json!({ "language": "en", "ids": { "type": [587] } })),
            &[(587, "Rifter")],
            1,
        )
        .with_names_endpoint(
            Some(json!({ "language": "en", "esi": [95465499] })),
            &[(95465499, "CCP Bartender")],
            1,
        )
        .build()
        .await;
    let resolver = name_resolver(&test);

    resolver
        .resolve(&NameRequest::new().ids(NameCategory::Type, [587]))
        .await;
    resolver
        .resolve(
            &NameRequest::new()
                .ids(NameCategory::Type, [587])
                .esi([95465499]),
        )
        .await;

    test.assert_mocks();
    assert_eq!(resolver.get_name(Some(587), None), "Rifter");
    assert_eq!(resolver.get_name(Some(95465499), None), "CCP Bartender");
}

#[tokio::test]
// Test that a failing portal leaves the cache untouched and the resolver idle
async fn portal_failure_is_isolated() {
    let test = TestBuilder::new()
        .with_names_status(500, "internal error", 1)
        .build()
        .await;
    let resolver = name_resolver(&test);

    resolver
        .resolve(&NameRequest::new().ids(NameCategory::Type, [587]))
        .await;

    test.assert_mocks();
    assert!(resolver.is_empty());
    assert!(!resolver.is_pending());
    assert_eq!(resolver.get_name(Some(587), Some("Unknown")), "Unknown");
    assert_eq!(resolver.get_name(Some(587), None), "587");
}

#[tokio::test]
// Test that IDs the portal has no name for fall back at read time
async fn partial_results_fall_back() {
    let test = TestBuilder::new()
        .with_names_endpoint(None, &[(587, "Rifter")], 1)
        .build()
        .await;
    let resolver = name_resolver(&test);

    let added = resolver
        .try_resolve(&NameRequest::new().ids(NameCategory::Type, [587, 12345]))
        .await
        .unwrap();

    test.assert_mocks();
    assert_eq!(added, 1);
    assert_eq!(resolver.get_name(Some(587), None), "Rifter");
    assert_eq!(resolver.get_name(Some(12345), None), "12345");
}

#[tokio::test]
// Test that the configured locale is sent as the request language
async fn sends_configured_language() {
    let test = TestBuilder::new()
        .with_names_endpoint(
            Some(json!({ "language": "de", "ids": { "solar_system": [30002187] } })),
            &[(30002187, "Amarr")],
            1,
        )
        .build()
        .await;
    let resolver = name_resolver(&test).with_locale(FixedLocale::new("de"));

    resolver
        .resolve(&NameRequest::new().ids(NameCategory::SolarSystem, [30002187]))
        .await;

    test.assert_mocks();
    assert_eq!(resolver.get_name(Some(30002187), None), "Amarr");
}

#[tokio::test]
// Test that `try_resolve` surfaces the failure the plain resolve swallows
async fn try_resolve_returns_portal_errors() {
    let test = TestBuilder::new()
        .with_names_envelope(fixtures::failure(403, "forbidden"), 1)
        .build()
        .await;
    let resolver = name_resolver(&test);

    let result = resolver
        .try_resolve(&NameRequest::new().esi([95465499]))
        .await;

    test.assert_mocks();
    assert!(result.is_err());
    assert!(resolver.is_empty());
}
