pub mod connector;
pub mod rest;
pub mod signer;
pub mod types;

use crate::core::config::ExchangeConfig;
use crate::core::errors::ExchangeError;
use crate::core::kernel::{ReqwestRest, RestClientBuilder, RestClientConfig};
use signer::BitkubSigner;
use std::sync::Arc;

pub use connector::BitkubConnector;
pub use rest::BitkubRestClient;
pub use types::{BitkubPaginated, BitkubPagination};

/// Create an authenticated Bitkub connector
pub fn create_bitkub_connector(
    config: &ExchangeConfig,
) -> Result<BitkubConnector<ReqwestRest>, ExchangeError> {
    if !config.has_credentials() {
        return Err(ExchangeError::AuthError(
            "Bitkub history endpoints require an API key and secret".to_string(),
        ));
    }

    let rest_config = RestClientConfig::new(config.base_url.clone(), "bitkub".to_string())
        .with_timeout(config.timeout_seconds);
    let signer = Arc::new(BitkubSigner::new(
        config.api_key().to_string(),
        config.secret_key().to_string(),
    ));

    let rest = RestClientBuilder::new(rest_config)
        .with_signer(signer)
        .build()?;

    Ok(BitkubConnector::new(rest, config.base_url.clone()))
}
