//! Behaviour tests for failure reporting.
//!
//! Remote errors, malformed shapes and transport failures must all reach the
//! caller as a single error value; nothing is retried.

mod support;

use serde_json::json;
use support::{client_for, RecordingHttpClient};
use tiffin::{
    ApiRequest, ClientConfig, ClientError, DateWindow, HttpError, HttpResponse, LookupError,
    LunchMoney, Params,
};

// =============================================================================
// Remote errors
// =============================================================================

#[tokio::test]
async fn error_field_fails_every_operation_with_its_message() {
    // Given: The API rejects the token
    let rejected = || RecordingHttpClient::replying(json!({"error": "invalid token"}));

    // When: Different operations receive the rejection
    let outcomes = vec![
        client_for(rejected()).categories(Params::new()).await.map(|_| ()),
        client_for(rejected())
            .transactions(DateWindow::new(), Params::new())
            .await
            .map(|_| ()),
        client_for(rejected()).create_category("x", Params::new()).await.map(|_| ()),
        client_for(rejected()).delete_group(1, Params::new()).await.map(|_| ()),
        client_for(rejected())
            .transaction(5, false, Params::new())
            .await
            .map(|_| ()),
    ];

    // Then: Each fails with an API error carrying the remote text
    for outcome in outcomes {
        let error = outcome.expect_err("remote error must surface");
        assert!(error.is_api());
        assert_eq!(error.message(), "invalid token");
    }
}

#[tokio::test]
async fn error_lists_are_joined_into_one_message() {
    let transport = RecordingHttpClient::replying(json!({
        "error": ["Transaction 1 is missing date", "Transaction 2 is missing amount"]
    }));
    let client = client_for(transport);

    let error = client
        .create_transactions(&[json!({})], Params::new())
        .await
        .expect_err("validation failure");

    assert_eq!(
        error.message(),
        "Transaction 1 is missing date; Transaction 2 is missing amount"
    );
}

#[tokio::test]
async fn empty_error_field_is_not_an_error() {
    // Given: A body with an empty error marker alongside data
    let transport = RecordingHttpClient::replying(json!({"error": "", "tags": []}));
    let client = client_for(transport);

    // When: The raw body is requested
    let body = client
        .query(ApiRequest::get("tags"))
        .await
        .expect("empty error is falsy");

    // Then: It is returned unchanged
    assert_eq!(body["tags"], json!([]));
}

#[tokio::test]
async fn error_status_with_error_body_uses_the_body_message() {
    let transport = RecordingHttpClient::with_responses(vec![Ok(HttpResponse::with_status(
        401,
        json!({"error": "Access token does not exist."}).to_string(),
    ))]);
    let client = client_for(transport);

    let error = client.me(Params::new()).await.expect_err("unauthorized");

    assert_eq!(error.message(), "Access token does not exist.");
}

#[tokio::test]
async fn error_status_with_non_json_body_names_the_status() {
    let transport = RecordingHttpClient::with_responses(vec![Ok(HttpResponse::with_status(
        502,
        "<html>Bad Gateway</html>",
    ))]);
    let client = client_for(transport);

    let error = client.tags(Params::new()).await.expect_err("gateway failure");

    assert!(error.is_api());
    assert!(error.message().contains("502"));
}

#[tokio::test]
async fn success_status_with_non_json_body_is_a_decode_error() {
    let transport = RecordingHttpClient::with_responses(vec![Ok(HttpResponse::ok_json("not json"))]);
    let client = client_for(transport);

    let error = client.tags(Params::new()).await.expect_err("garbage body");

    assert!(matches!(error, ClientError::Decode { status: 200, .. }));
}

// =============================================================================
// Shape anomalies
// =============================================================================

#[tokio::test]
async fn missing_wrapper_field_is_reported_as_shape_mismatch() {
    // Given: A success body without the expected wrapper
    let transport = RecordingHttpClient::replying(json!({"unexpected": []}));
    let client = client_for(transport);

    // When: Categories are listed
    let error = client
        .categories(Params::new())
        .await
        .expect_err("wrapper missing");

    // Then: The error is an API error describing the mismatch
    assert!(error.is_api());
    assert!(error.message().contains("categories"));
    assert!(error.message().contains("unexpected"));
}

#[tokio::test]
async fn mutation_without_documented_field_fails() {
    let cases: Vec<(&str, serde_json::Value)> = vec![
        ("category_id", json!({"id": 3})),
        ("ids", json!({"created": 2})),
        ("transactions", json!({})),
        ("updated", json!({"split": []})),
    ];

    for (field, body) in cases {
        let client = client_for(RecordingHttpClient::replying(body));
        let result = match field {
            "category_id" => client.create_category("x", Params::new()).await.map(|_| ()),
            "ids" => client
                .create_transactions(&[json!({"date": "2024-01-01", "amount": "1"})], Params::new())
                .await
                .map(|_| ()),
            "transactions" => client.delete_group(4, Params::new()).await.map(|_| ()),
            _ => client
                .update_transaction(4, serde_json::Map::new(), Params::new())
                .await
                .map(|_| ()),
        };

        let error = result.expect_err("documented field is absent");
        assert!(error.is_api(), "{field}");
        assert!(error.message().contains(field), "{field}: {}", error.message());
    }
}

#[tokio::test]
async fn non_integer_group_id_is_a_shape_error() {
    let client = client_for(RecordingHttpClient::replying(json!({"status": "queued"})));

    let error = client
        .create_transaction_group("2024-01-01", "Trip", &[1, 2], Params::new())
        .await
        .expect_err("not an id");

    assert!(error.is_api());
}

// =============================================================================
// Transport and construction
// =============================================================================

#[tokio::test]
async fn transport_failures_are_not_retried() {
    // Given: A transport that fails once and would succeed afterwards
    let transport = RecordingHttpClient::with_responses(vec![
        Err(HttpError::new("connection failed: refused")),
        Ok(HttpResponse::ok_json("[]")),
    ]);
    let client = client_for(transport.clone());

    // When: An operation runs
    let error = client.tags(Params::new()).await.expect_err("transport down");

    // Then: The failure surfaces after exactly one attempt
    assert!(matches!(error, ClientError::Transport(_)));
    assert!(error.to_string().contains("refused"));
    assert_eq!(transport.recorded_requests().len(), 1);
}

#[test]
fn construction_without_any_key_fails_before_network_activity() {
    let transport = RecordingHttpClient::replying(json!([]));

    let error = ClientConfig::new()
        .api_key("")
        .resolve_with(|_| None)
        .map(|resolved| LunchMoney::from_resolved(resolved, transport.clone()))
        .expect_err("no key anywhere");

    assert!(matches!(error, ClientError::MissingApiKey));
    assert!(transport.recorded_requests().is_empty());
}

#[tokio::test]
async fn result_objects_distinguish_access_styles() {
    let client = client_for(RecordingHttpClient::replying(json!({"name": "Groceries", "id": 4})));

    let category = client.category(4, Params::new()).await.expect("category");

    assert_eq!(category.attr("id"), Ok(&json!(4)));
    assert!(matches!(
        category.attr("missing"),
        Err(LookupError::AttributeNotFound { .. })
    ));
    assert!(matches!(
        category.item("missing"),
        Err(LookupError::KeyNotFound { .. })
    ));
}
