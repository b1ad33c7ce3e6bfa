//! Shared fixtures for the mock-server tests

#![allow(dead_code)]

use baht_bot::core::config::ExchangeConfig;
use baht_bot::exchanges::bitkub::signer::{sign, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use serde_json::{json, Value};
use wiremock::{Match, MockServer, Request};

pub const TEST_API_KEY: &str = "test_api_key";
pub const TEST_SECRET: &str = "test_secret_key";

pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

pub fn bitkub_config(server: &MockServer) -> ExchangeConfig {
    ExchangeConfig::new(
        TEST_API_KEY.to_string(),
        TEST_SECRET.to_string(),
        server.uri(),
    )
}

pub fn binance_config(server: &MockServer) -> ExchangeConfig {
    ExchangeConfig::public(server.uri())
}

/// Paginated envelope as Bitkub returns it
pub fn page_body(result: Value, page: u64, last: u64, next: u64) -> Value {
    json!({
        "error": 0,
        "result": result,
        "pagination": {
            "page": page,
            "last": last,
            "next": next,
            "prev": page.saturating_sub(1),
        }
    })
}

pub fn deposit(txn_id: &str) -> Value {
    json!({
        "txn_id": txn_id,
        "currency": "BTC",
        "amount": 0.5,
        "status": "complete",
        "time": 1_700_000_000_u64,
    })
}

pub fn order(order_id: &str) -> Value {
    json!({
        "txn_id": format!("BTCBUY{}", order_id),
        "order_id": order_id,
        "hash": format!("hash-{}", order_id),
        "parent_order_id": "0",
        "parent_order_hash": "",
        "super_order_id": "0",
        "super_order_hash": "",
        "client_id": "",
        "taken_by_me": false,
        "is_maker": true,
        "side": "buy",
        "type": "limit",
        "rate": "1290000.00",
        "fee": "0.10",
        "credit": "0.00",
        "amount": "39.40",
        "ts": 1_702_543_272_000_u64,
    })
}

fn header<'a>(request: &'a Request, name: &str) -> Option<&'a str> {
    request.headers.get(name).and_then(|value| value.to_str().ok())
}

/// Matches only requests whose `X-BTK-SIGN` is the HMAC the server would compute
pub struct ValidBitkubSignature {
    pub secret: &'static str,
}

impl Match for ValidBitkubSignature {
    fn matches(&self, request: &Request) -> bool {
        let (Some(timestamp), Some(signature)) = (
            header(request, TIMESTAMP_HEADER),
            header(request, SIGNATURE_HEADER),
        ) else {
            return false;
        };
        let Ok(timestamp) = timestamp.parse::<u64>() else {
            return false;
        };

        sign(
            self.secret,
            timestamp,
            request.method.as_str(),
            request.url.path(),
            request.url.query().unwrap_or(""),
        )
        .map(|expected| expected == signature)
        .unwrap_or(false)
    }
}
