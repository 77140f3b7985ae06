use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod common;

use common::{setup_test_client, TEST_API_KEY};
use meraki_client::{MerakiClient, MerakiError};

#[test]
fn test_api_key_is_required() {
    // What it tests: Building a client without an API key fails with a
    // ConfigurationError instead of producing a client that 401s later.
    //
    // Why it's valuable: The key is the only credential; failing fast at
    // build time gives the caller an actionable error.
    let result = MerakiClient::builder().build();
    match result {
        Err(MerakiError::ConfigurationError(msg)) => {
            assert_eq!(msg, "API key is required");
        }
        _ => panic!("Expected ConfigurationError"),
    }
}

#[tokio::test]
async fn test_api_key_header_sent_on_every_request() {
    // What it tests: Requests carry the X-Cisco-Meraki-API-Key header and
    // an Accept: application/json header.
    //
    // Why it's valuable: Smoke test for the transport core; a regression
    // here breaks every resource object at once.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .and(header("X-Cisco-Meraki-API-Key", TEST_API_KEY))
        .and(header("Accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let result = client.raw_request("GET", "organizations", None::<()>).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_status_codes_map_to_typed_errors() {
    // What it tests: Each vendor status code the dashboard uses maps to
    // its dedicated error variant, with the body's error message attached.
    //
    // Why it's valuable: Callers are expected to branch on these variants;
    // the mapping is the contract that replaces status-code sniffing.
    let mock_server = MockServer::start().await;

    let cases: &[(u16, &str)] = &[
        (400, "/api/v1/bad-request"),
        (401, "/api/v1/unauthorized"),
        (403, "/api/v1/forbidden"),
        (404, "/api/v1/missing"),
        (500, "/api/v1/broken"),
    ];

    for (status, endpoint) in cases {
        Mock::given(method("GET"))
            .and(path(*endpoint))
            .respond_with(
                ResponseTemplate::new(*status)
                    .set_body_json(json!({ "errors": [format!("reason {status}")] })),
            )
            .mount(&mock_server)
            .await;
    }

    let client = setup_test_client(&mock_server.uri());

    match client.raw_request("GET", "bad-request", None::<()>).await {
        Err(MerakiError::BadRequest(msg)) => assert_eq!(msg, "reason 400"),
        other => panic!("Expected BadRequest, got {other:?}"),
    }
    match client.raw_request("GET", "unauthorized", None::<()>).await {
        Err(MerakiError::AuthenticationError(msg)) => assert_eq!(msg, "reason 401"),
        other => panic!("Expected AuthenticationError, got {other:?}"),
    }
    match client.raw_request("GET", "forbidden", None::<()>).await {
        Err(MerakiError::Forbidden(msg)) => assert_eq!(msg, "reason 403"),
        other => panic!("Expected Forbidden, got {other:?}"),
    }
    match client.raw_request("GET", "missing", None::<()>).await {
        Err(MerakiError::NotFound(msg)) => assert_eq!(msg, "reason 404"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
    match client.raw_request("GET", "broken", None::<()>).await {
        Err(MerakiError::ServerError { status, message }) => {
            assert_eq!(status, 500);
            assert_eq!(message, "reason 500");
        }
        other => panic!("Expected ServerError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limit_carries_retry_after() {
    // What it tests: A 429 response becomes RateLimited with the
    // Retry-After header value parsed out; the client does not retry.
    //
    // Why it's valuable: Retry policy is the caller's responsibility by
    // design, so the caller needs the backoff hint surfaced.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("Retry-After", "2")
                .set_body_json(json!({ "errors": ["rate limit exceeded"] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.raw_request("GET", "organizations", None::<()>).await {
        Err(MerakiError::RateLimited { retry_after }) => {
            assert_eq!(retry_after, Some(2));
        }
        other => panic!("Expected RateLimited, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_without_json_body_falls_back_to_reason() {
    // What it tests: A non-2xx response without the vendor's error body
    // still produces the right variant, with the canonical status reason
    // as the message.
    //
    // Why it's valuable: Proxies and load balancers answer with bare
    // status pages; decoding must not mask the original failure.
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/organizations"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    match client.raw_request("GET", "organizations", None::<()>).await {
        Err(MerakiError::NotFound(msg)) => assert_eq!(msg, "Not Found"),
        other => panic!("Expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_raw_request_returns_null_for_empty_body() {
    // What it tests: Endpoints that answer 204 with no body come back as
    // Value::Null instead of a decode error.
    let mock_server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/api/v1/organizations/org_123/policyObjects/1"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;

    let client = setup_test_client(&mock_server.uri());
    let value = client
        .raw_request("DELETE", "organizations/org_123/policyObjects/1", None::<()>)
        .await
        .unwrap();
    assert!(value.is_null());
}
