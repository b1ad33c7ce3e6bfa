use crate::core::{
    errors::ExchangeError,
    types::{DepositHistory, OrderHistory},
};
use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

#[async_trait]
pub trait AccountHistory {
    /// Every deposit on the account, oldest page first
    async fn fetch_deposit_history(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<DepositHistory>, ExchangeError>;

    /// Every order for `symbol`, optionally starting at an epoch-millisecond timestamp
    async fn fetch_order_history(
        &self,
        symbol: &str,
        start_timestamp: Option<u64>,
        cancel: &CancellationToken,
    ) -> Result<Vec<OrderHistory>, ExchangeError>;
}

#[async_trait]
pub trait ServerStatus {
    /// Test connectivity to the REST API
    async fn ping(&self, cancel: &CancellationToken) -> Result<(), ExchangeError>;

    /// Exchange server time in epoch milliseconds
    async fn check_server_time(&self, cancel: &CancellationToken) -> Result<u64, ExchangeError>;
}
