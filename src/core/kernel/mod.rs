//! Transport layer shared by every exchange client
//!
//! The kernel contains no exchange-specific logic:
//!
//! - `RestClient`: HTTP interface with a fixed status and decoding policy
//! - `ReqwestRest`: the `reqwest` implementation, built by `RestClientBuilder`
//! - `Signer`: pluggable request authentication
//!
//! # Example
//! ```rust,no_run
//! use baht_bot::core::kernel::*;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let rest_config = RestClientConfig::new("https://fapi.binance.com".to_string(), "binance".to_string());
//! let rest = RestClientBuilder::new(rest_config).build()?;
//!
//! let time: serde_json::Value = rest.get_json("/fapi/v1/time", &[], false).await?;
//! # Ok(())
//! # }
//! ```
pub mod rest;
pub mod signer;

pub use rest::{
    build_query_string, with_cancellation, ReqwestRest, RestClient, RestClientBuilder,
    RestClientConfig,
};
pub use signer::{hmac_sha256_hex, SignatureResult, Signer};
