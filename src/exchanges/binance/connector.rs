use crate::core::{
    errors::ExchangeError,
    kernel::{with_cancellation, RestClient},
    traits::ServerStatus,
};
use crate::exchanges::binance::rest::BinanceRestClient;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

/// Binance futures connector for the unauthenticated health endpoints
pub struct BinanceConnector<R: RestClient> {
    rest: BinanceRestClient<R>,
}

impl<R: RestClient> BinanceConnector<R> {
    pub fn new(rest: R) -> Self {
        Self {
            rest: BinanceRestClient::new(rest),
        }
    }
}

#[async_trait]
impl<R: RestClient> ServerStatus for BinanceConnector<R> {
    #[instrument(skip(self, cancel), fields(exchange = "binance"))]
    async fn ping(&self, cancel: &CancellationToken) -> Result<(), ExchangeError> {
        with_cancellation(cancel, self.rest.ping()).await?;
        debug!("Ping succeeded");
        Ok(())
    }

    #[instrument(skip(self, cancel), fields(exchange = "binance"))]
    async fn check_server_time(&self, cancel: &CancellationToken) -> Result<u64, ExchangeError> {
        let time = with_cancellation(cancel, self.rest.get_server_time()).await?;
        debug!(server_time = time.server_time, "Fetched server time");
        Ok(time.server_time)
    }
}
