pub mod core;
pub mod exchanges;

pub use crate::core::{
    config::{AppConfig, AppEnvironment, ExchangeConfig},
    errors::ExchangeError,
    traits::{AccountHistory, ServerStatus},
    types::{DepositHistory, OrderHistory},
};
pub use crate::exchanges::binance::{create_binance_connector, BinanceConnector};
pub use crate::exchanges::bitkub::{create_bitkub_connector, BitkubConnector};
