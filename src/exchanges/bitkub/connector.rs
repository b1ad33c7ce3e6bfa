use crate::core::{
    errors::ExchangeError,
    kernel::RestClient,
    traits::AccountHistory,
    types::{DepositHistory, OrderHistory},
};
use crate::exchanges::bitkub::rest::BitkubRestClient;
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;
use tracing::{info, instrument};

/// Bitkub connector exposing the authenticated account history endpoints
pub struct BitkubConnector<R: RestClient> {
    rest: BitkubRestClient<R>,
    base_url: String,
}

impl<R: RestClient> BitkubConnector<R> {
    /// Create a new Bitkub connector with dependency injection
    pub fn new(rest: R, base_url: String) -> Self {
        Self {
            rest: BitkubRestClient::new(rest),
            base_url,
        }
    }

    /// Cap on requests per paginated operation
    pub fn with_max_pages(mut self, max_pages: u64) -> Self {
        self.rest = self.rest.with_max_pages(max_pages);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl<R: RestClient> AccountHistory for BitkubConnector<R> {
    #[instrument(skip(self, cancel), fields(exchange = "bitkub"))]
    async fn fetch_deposit_history(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<DepositHistory>, ExchangeError> {
        let deposits = self.rest.get_deposit_history(cancel).await?;
        info!(count = deposits.len(), "Fetched deposit history");
        Ok(deposits)
    }

    #[instrument(skip(self, cancel), fields(exchange = "bitkub"))]
    async fn fetch_order_history(
        &self,
        symbol: &str,
        start_timestamp: Option<u64>,
        cancel: &CancellationToken,
    ) -> Result<Vec<OrderHistory>, ExchangeError> {
        let orders = self
            .rest
            .get_order_history(symbol, start_timestamp, cancel)
            .await?;
        info!(count = orders.len(), "Fetched order history");
        Ok(orders)
    }
}
