use serde::Deserialize;

/// Body of `/fapi/v1/ping`, always an empty object
#[derive(Debug, Deserialize)]
pub struct BinancePing {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct BinanceServerTime {
    #[serde(rename = "serverTime")]
    pub server_time: u64,
}
