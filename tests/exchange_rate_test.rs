use eduspend::config::toml_config::ExchangeConfig;
use eduspend::domain::catalog::Currency;
use eduspend::domain::ports::{RateOutcome, RateProvider};
use eduspend::ExchangeRateResolver;
use httpmock::prelude::*;
use std::time::Duration;

fn resolver_for(server: &MockServer) -> ExchangeRateResolver {
    ExchangeRateResolver::new(server.url("/convert"))
}

/// 同幣別不應發出任何請求
#[tokio::test]
async fn test_identity_pairs_never_hit_network() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/convert");
        then.status(200).json_body(serde_json::json!({"result": 3.0}));
    });

    let resolver = resolver_for(&server);
    for currency in Currency::ALL {
        let resolution = resolver.resolve(currency, currency).await;
        assert_eq!(resolution.rate.value(), 1.0, "{}", currency);
        assert_eq!(resolution.outcome, RateOutcome::Identity);
    }

    api_mock.assert_hits(0);
}

#[tokio::test]
async fn test_successful_lookup_sends_codes() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET)
            .path("/convert")
            .query_param("from", "AUD")
            .query_param("to", "ZMW");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({
                "query": {"from": "AUD", "to": "ZMW", "amount": 1},
                "result": 17.25
            }));
    });

    let resolution = resolver_for(&server)
        .resolve(Currency::Aud, Currency::Zmw)
        .await;

    api_mock.assert();
    assert_eq!(resolution.rate.value(), 17.25);
    assert_eq!(resolution.outcome, RateOutcome::Fetched);
}

async fn assert_fallback_for(status: u16, body: &str) {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/convert");
        then.status(status)
            .header("Content-Type", "application/json")
            .body(body);
    });

    let resolution = resolver_for(&server)
        .resolve(Currency::Usd, Currency::Eur)
        .await;

    api_mock.assert_hits(1);
    assert_eq!(resolution.rate.value(), 1.0, "status {} body {}", status, body);
    assert!(resolution.is_fallback(), "status {} body {}", status, body);
}

#[tokio::test]
async fn test_not_found_falls_back() {
    assert_fallback_for(404, r#"{"result": 0.92}"#).await;
}

#[tokio::test]
async fn test_server_error_falls_back() {
    assert_fallback_for(500, "").await;
}

#[tokio::test]
async fn test_malformed_json_falls_back() {
    assert_fallback_for(200, "{result: oops").await;
}

#[tokio::test]
async fn test_missing_result_falls_back() {
    assert_fallback_for(200, r#"{"success": false, "error": {"code": 101}}"#).await;
}

#[tokio::test]
async fn test_null_or_non_numeric_result_falls_back() {
    assert_fallback_for(200, r#"{"result": null}"#).await;
    assert_fallback_for(200, r#"{"result": "0.92"}"#).await;
}

#[tokio::test]
async fn test_non_positive_result_falls_back() {
    assert_fallback_for(200, r#"{"result": 0}"#).await;
    assert_fallback_for(200, r#"{"result": -1.5}"#).await;
}

#[tokio::test]
async fn test_timeout_falls_back() {
    let server = MockServer::start();
    let api_mock = server.mock(|when, then| {
        when.method(GET).path("/convert");
        then.status(200)
            .delay(Duration::from_secs(3))
            .json_body(serde_json::json!({"result": 0.5}));
    });

    let config = ExchangeConfig {
        endpoint: server.url("/convert"),
        timeout_seconds: Some(1),
        access_key: None,
    };
    let resolver = ExchangeRateResolver::from_config(&config, None).unwrap();
    let resolution = resolver.resolve(Currency::Cad, Currency::Inr).await;

    api_mock.assert_hits(1);
    assert_eq!(resolution.rate.value(), 1.0);
    assert!(resolution.is_fallback());
}

#[tokio::test]
async fn test_unreachable_service_falls_back() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let resolver = ExchangeRateResolver::new(format!("http://127.0.0.1:{}/convert", port));
    let resolution = resolver.resolve(Currency::Gbp, Currency::Usd).await;

    assert_eq!(resolution.rate.value(), 1.0);
    match resolution.outcome {
        RateOutcome::Fallback { reason } => assert!(reason.contains("HTTP request failed")),
        other => panic!("expected fallback, got {:?}", other),
    }
}
