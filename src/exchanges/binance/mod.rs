pub mod connector;
pub mod rest;
pub mod types;

use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};

pub use connector::BinanceConnector;
pub use rest::BinanceRestClient;
pub use types::{BinancePing, BinanceServerTime};

/// Create a Binance futures connector for the public endpoints
///
/// Credentials in `config` are ignored; only the base URL and timeout apply.
pub fn create_binance_connector(
    config: &ExchangeConfig,
) -> Result<BinanceConnector<ReqwestRest>, ExchangeError> {
    let rest_config = RestClientConfig::new(config.base_url.clone(), "binance".to_string())
        .with_timeout(config.timeout_seconds);
    let rest = RestClientBuilder::new(rest_config).build()?;

    Ok(BinanceConnector::new(rest))
}
