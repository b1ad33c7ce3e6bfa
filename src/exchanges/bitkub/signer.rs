use crate::core::errors::ExchangeError;
use crate::core::kernel::{hmac_sha256_hex, SignatureResult, Signer};
use secrecy::{ExposeSecret, Secret};
use std::collections::HashMap;

pub const TIMESTAMP_HEADER: &str = "X-BTK-TIMESTAMP";
pub const API_KEY_HEADER: &str = "X-BTK-APIKEY";
pub const SIGNATURE_HEADER: &str = "X-BTK-SIGN";

/// Signs Bitkub v3 private requests
///
/// The signed payload is `timestamp + METHOD + path + query`, where the query
/// keeps its leading `?` and is omitted entirely when there are no
/// parameters. The result travels in the `X-BTK-*` header triplet.
pub struct BitkubSigner {
    api_key: Secret<String>,
    secret_key: Secret<String>,
}

impl BitkubSigner {
    pub fn new(api_key: String, secret_key: String) -> Self {
        Self {
            api_key: Secret::new(api_key),
            secret_key: Secret::new(secret_key),
        }
    }
}

impl Signer for BitkubSigner {
    fn sign_request(
        &self,
        method: &str,
        endpoint: &str,
        query_string: &str,
        timestamp: u64,
    ) -> SignatureResult {
        let signature = sign(
            self.secret_key.expose_secret(),
            timestamp,
            method,
            endpoint,
            query_string,
        )?;

        let mut headers = HashMap::new();
        headers.insert(TIMESTAMP_HEADER.to_string(), timestamp.to_string());
        headers.insert(
            API_KEY_HEADER.to_string(),
            self.api_key.expose_secret().clone(),
        );
        headers.insert(SIGNATURE_HEADER.to_string(), signature);

        Ok(headers)
    }
}

/// Canonical string that gets signed
///
/// `query_string` is given without the leading '?'.
pub fn signature_payload(
    timestamp: u64,
    method: &str,
    endpoint: &str,
    query_string: &str,
) -> String {
    if query_string.is_empty() {
        format!("{}{}{}", timestamp, method, endpoint)
    } else {
        format!("{}{}{}?{}", timestamp, method, endpoint, query_string)
    }
}

/// Lowercase hex HMAC-SHA256 signature for one request
pub fn sign(
    secret: &str,
    timestamp: u64,
    method: &str,
    endpoint: &str,
    query_string: &str,
) -> Result<String, ExchangeError> {
    let payload = signature_payload(timestamp, method, endpoint, query_string);
    hmac_sha256_hex(secret.as_bytes(), payload.as_bytes())
}
