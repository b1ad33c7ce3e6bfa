use crate::core::errors::ExchangeError;
use crate::core::kernel::RestClient;
use crate::exchanges::binance::types::{BinancePing, BinanceServerTime};

pub const PING_PATH: &str = "/fapi/v1/ping";
pub const SERVER_TIME_PATH: &str = "/fapi/v1/time";

/// Thin typed wrapper around `RestClient` for the public Binance futures API
pub struct BinanceRestClient<R: RestClient> {
    client: R,
}

impl<R: RestClient> BinanceRestClient<R> {
    pub fn new(client: R) -> Self {
        Self { client }
    }

    pub async fn ping(&self) -> Result<BinancePing, ExchangeError> {
        self.client.get_json(PING_PATH, &[], false).await
    }

    pub async fn get_server_time(&self) -> Result<BinanceServerTime, ExchangeError> {
        self.client.get_json(SERVER_TIME_PATH, &[], false).await
    }
}
