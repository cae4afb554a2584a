//! Contract tests for the API client: header injection, URL building,
//! and normalization of every failure into a single message.

use stockdeck_core::{HttpMethod, PriceSavePayload, Symbol};
use stockdeck_tests::{client_with, Scripted, ScriptedHttpClient};

#[tokio::test]
async fn every_request_carries_the_json_content_type_header() {
    let transport = ScriptedHttpClient::single(Scripted::ok(
        200,
        r#"{"data":{"symbol":"AAPL","price":150.25,"timestamp":1704067200}}"#,
    ));
    let client = client_with(transport.clone());

    let symbol = Symbol::parse("AAPL").expect("valid symbol");
    client.latest_price(&symbol).await.expect("should succeed");

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].headers.get("content-type").map(String::as_str),
        Some("application/json")
    );
}

#[tokio::test]
async fn latest_price_hits_the_symbol_path() {
    let transport = ScriptedHttpClient::single(Scripted::ok(
        200,
        r#"{"data":{"symbol":"MSFT","price":410.0,"timestamp":1704067200}}"#,
    ));
    let client = client_with(transport.clone());

    let symbol = Symbol::parse(" msft ").expect("valid symbol");
    client.latest_price(&symbol).await.expect("should succeed");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Get);
    assert_eq!(requests[0].url, "https://api.example.test/prod/stock/MSFT");
}

#[tokio::test]
async fn external_fetch_posts_without_a_body() {
    let transport = ScriptedHttpClient::single(Scripted::ok(
        200,
        r#"{"symbol":"IBM","price":173.5,"change":1.2,"change_percent":"0.70%","source":"alpha_vantage"}"#,
    ));
    let client = client_with(transport.clone());

    let symbol = Symbol::parse("IBM").expect("valid symbol");
    client.external_fetch(&symbol).await.expect("should succeed");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(
        requests[0].url,
        "https://api.example.test/prod/stock/fetch/IBM"
    );
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn save_price_serializes_the_payload_as_the_request_body() {
    let transport = ScriptedHttpClient::single(Scripted::ok(
        201,
        r#"{"message":"ok","data":{"symbol":"AAPL","price":150.25,"date":"2024-01-01"}}"#,
    ));
    let client = client_with(transport.clone());

    let payload = PriceSavePayload {
        symbol: String::from("AAPL"),
        price: 150.25,
        volume: Some(1_200_000),
        change: None,
        change_percent: None,
    };
    let receipt = client.save_price(&payload).await.expect("should succeed");
    assert_eq!(receipt.data.symbol, "AAPL");

    let requests = transport.recorded_requests();
    assert_eq!(requests[0].method, HttpMethod::Post);
    assert_eq!(requests[0].url, "https://api.example.test/prod/stock");

    let body: serde_json::Value =
        serde_json::from_str(requests[0].body.as_deref().expect("body present"))
            .expect("body is JSON");
    assert_eq!(body["symbol"], "AAPL");
    assert_eq!(body["volume"], 1_200_000);
    assert!(body.get("change").is_none(), "blank optionals are omitted");
}

#[tokio::test]
async fn history_forwards_days_and_limit_verbatim() {
    let transport = ScriptedHttpClient::single(Scripted::ok(
        200,
        r#"{"symbol":"AAPL","period":{"days":30},"statistics":{"count":0,"max":0,"min":0,"avg":0},"data":[]}"#,
    ));
    let client = client_with(transport.clone());

    let symbol = Symbol::parse("AAPL").expect("valid symbol");
    client
        .history(&symbol, "abc", "")
        .await
        .expect("should succeed");

    let requests = transport.recorded_requests();
    assert_eq!(
        requests[0].url,
        "https://api.example.test/prod/stock/AAPL/history?days=abc&limit="
    );
}

#[tokio::test]
async fn error_message_prefers_the_server_message_field() {
    let transport =
        ScriptedHttpClient::single(Scripted::ok(404, r#"{"message":"Symbol not found"}"#));
    let client = client_with(transport);

    let symbol = Symbol::parse("ZZZZ").expect("valid symbol");
    let error = client
        .latest_price(&symbol)
        .await
        .expect_err("404 must fail");

    assert_eq!(error.message(), "Symbol not found");
}

#[tokio::test]
async fn error_message_falls_back_to_the_http_status() {
    let transport = ScriptedHttpClient::single(Scripted::ok(500, "upstream exploded"));
    let client = client_with(transport);

    let symbol = Symbol::parse("AAPL").expect("valid symbol");
    let error = client
        .latest_price(&symbol)
        .await
        .expect_err("500 must fail");

    assert_eq!(error.message(), "HTTP 500");
}

#[tokio::test]
async fn error_body_without_message_field_also_falls_back_to_status() {
    let transport = ScriptedHttpClient::single(Scripted::ok(422, r#"{"error":"bad input"}"#));
    let client = client_with(transport);

    let symbol = Symbol::parse("AAPL").expect("valid symbol");
    let error = client
        .latest_price(&symbol)
        .await
        .expect_err("422 must fail");

    assert_eq!(error.message(), "HTTP 422");
}

#[tokio::test]
async fn transport_failures_surface_the_transport_message() {
    let transport =
        ScriptedHttpClient::single(Scripted::transport_failure("connection failed: refused"));
    let client = client_with(transport);

    let error = client.portfolio().await.expect_err("must fail");
    assert_eq!(error.message(), "connection failed: refused");
}

#[tokio::test]
async fn malformed_success_body_fails_through_the_same_error_kind() {
    let transport = ScriptedHttpClient::single(Scripted::ok(200, "not json at all"));
    let client = client_with(transport);

    let error = client.portfolio().await.expect_err("must fail");
    assert!(error.message().starts_with("malformed response body:"));
}

#[tokio::test]
async fn client_is_reusable_across_sequential_calls() {
    let transport = ScriptedHttpClient::new(vec![
        Scripted::ok(
            200,
            r#"{"data":{"symbol":"AAPL","price":1.0,"timestamp":1}}"#,
        ),
        Scripted::ok(
            200,
            r#"{"data":{"symbol":"AAPL","price":2.0,"timestamp":2}}"#,
        ),
    ]);
    let client = client_with(transport.clone());
    let symbol = Symbol::parse("AAPL").expect("valid symbol");

    let first = client.latest_price(&symbol).await.expect("first call");
    let second = client.latest_price(&symbol).await.expect("second call");

    assert_eq!(first.data.price, 1.0);
    assert_eq!(second.data.price, 2.0);
    assert_eq!(transport.recorded_requests().len(), 2);
}
