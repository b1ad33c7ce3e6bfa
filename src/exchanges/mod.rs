pub mod binance;
pub mod bitkub;
