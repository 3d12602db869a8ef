use std::collections::BTreeMap;

use eden_names::{
    error::{api::ApiError, Error},
    model::names::LookupRequest,
    NameCategory,
};
use eden_test_utils::prelude::*;
use mockito::Matcher;
use serde_json::json;

use super::portal_client;

fn lookup_request() -> LookupRequest {
    LookupRequest {
        language: "en".to_string(),
        ids: BTreeMap::from([(NameCategory::Type, vec![587])]),
        esi: vec![95465499],
    }
}

#[tokio::test]
// Test that the lookup body, bearer token & envelope unwrapping line up with the portal
async fn resolves_names_through_envelope() {
    let test = TestBuilder::new()
        .with_required_token()
        .with_names_endpoint(
            Some(json!({ "language": "en", "ids": { "type": [587] }, "esi": [95465499] })),
            &[(587, "Rifter"), (95465499, "CCP Bartender")],
            1,
        )
        .build()
        .await;
    let client = portal_client(&test);

    let response = client.sde().names(&lookup_request()).await.unwrap();

    test.assert_mocks();
    let mut names = response.parse().names;
    names.sort();
    assert_eq!(
        names,
        vec![
            (587, "Rifter".to_string()),
            (95465499, "CCP Bartender".to_string())
        ]
    );
}

#[tokio::test]
// Test that the configured user agent is sent with the request
async fn sends_user_agent() {
    let test = TestBuilder::new()
        .with_mock_endpoint(|server| {
            server
                .mock("POST", NAMES_PATH)
                .match_header("user-agent", Matcher::Exact(TEST_USER_AGENT.to_string()))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_body(fixtures::success(json!({})).to_string())
                .expect(1)
                .create()
        })
        .build()
        .await;
    let client = portal_client(&test);

    let result = client.sde().names(&lookup_request()).await;

    assert!(result.is_ok());
    test.assert_mocks();
}

#[tokio::test]
// Test that a `null` payload is treated as "no names known"
async fn null_data_is_empty_response() {
    let test = TestBuilder::new()
        .with_names_envelope(json!({ "code": 200, "msg": "success", "data": null }), 1)
        .build()
        .await;
    let client = portal_client(&test);

    let response = client.sde().names(&lookup_request()).await.unwrap();

    test.assert_mocks();
    assert!(response.0.is_empty());
}

#[tokio::test]
// Test that a non-200 business code inside an HTTP 200 response is an error
async fn rejected_envelope_is_error() {
    let test = TestBuilder::new()
        .with_names_envelope(fixtures::failure(500, "database unavailable"), 1)
        .build()
        .await;
    let client = portal_client(&test);

    let result = client.sde().names(&lookup_request()).await;

    test.assert_mocks();
    match result {
        Err(Error::ApiError(ApiError::Rejected { path, code, msg })) => {
            assert_eq!(path, NAMES_PATH);
            assert_eq!(code, 500);
            assert_eq!(msg, "database unavailable");
        }
        other => panic!("expected rejected envelope, got {:?}", other),
    }
}

#[tokio::test]
// Test that 401 responses map to an authorization error carrying the portal's message
async fn unauthorized_status_is_error() {
    let test = TestBuilder::new()
        .with_names_status(401, fixtures::failure(401, "token expired").to_string(), 1)
        .build()
        .await;
    let client = portal_client(&test);

    let result = client.sde().names(&lookup_request()).await;

    test.assert_mocks();
    match result {
        Err(Error::ApiError(ApiError::Unauthorized { msg, .. })) => {
            assert_eq!(msg, "token expired")
        }
        other => panic!("expected unauthorized error, got {:?}", other),
    }
}

#[tokio::test]
// Test that other failing statuses keep the status code & raw body
async fn server_error_status_is_error() {
    let test = TestBuilder::new()
        .with_names_status(502, "upstream unavailable", 1)
        .build()
        .await;
    let client = portal_client(&test);

    let result = client.sde().names(&lookup_request()).await;

    test.assert_mocks();
    match result {
        Err(Error::ApiError(ApiError::Status {
            status, message, ..
        })) => {
            assert_eq!(status, 502);
            assert_eq!(message, "upstream unavailable");
        }
        other => panic!("expected status error, got {:?}", other),
    }
}

#[tokio::test]
// Test that a 200 response without a valid envelope is reported as malformed
async fn malformed_body_is_error() {
    let test = TestBuilder::new()
        .with_names_status(200, "<html>maintenance</html>", 1)
        .build()
        .await;
    let client = portal_client(&test);

    let result = client.sde().names(&lookup_request()).await;

    test.assert_mocks();
    assert!(matches!(
        result,
        Err(Error::ApiError(ApiError::MalformedBody { .. }))
    ));
}
