use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A crypto deposit as reported by the exchange
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepositHistory {
    pub txn_id: String,
    pub currency: String,
    pub amount: Decimal,
    pub status: String,
    /// Epoch timestamp of the deposit
    pub time: u64,
}

/// A filled or partially filled order from the account's trade history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderHistory {
    #[serde(default)]
    pub txn_id: String,
    pub order_id: String,
    pub hash: String,
    #[serde(default)]
    pub parent_order_id: String,
    #[serde(default)]
    pub parent_order_hash: String,
    #[serde(default)]
    pub super_order_id: String,
    #[serde(default)]
    pub super_order_hash: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub taken_by_me: bool,
    pub is_maker: bool,
    pub side: String,
    #[serde(rename = "type")]
    pub order_type: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub rate: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fee: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub credit: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// Epoch milliseconds
    pub ts: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deposit_amount_from_json_number() {
        let deposit: DepositHistory = serde_json::from_value(serde_json::json!({
            "txn_id": "XRPWD0000100276",
            "currency": "XRP",
            "amount": 5.75,
            "status": "complete",
            "time": 1_570_893_867
        }))
        .unwrap();

        assert_eq!(deposit.amount, Decimal::from_str("5.75").unwrap());
        assert_eq!(deposit.time, 1_570_893_867);
    }

    #[test]
    fn test_order_decimals_from_strings() {
        let order: OrderHistory = serde_json::from_value(serde_json::json!({
            "txn_id": "BTCBUY0003372258",
            "order_id": "277863251",
            "hash": "fwQ6dnQWQPs4cbatFGc9LPnpqyu",
            "parent_order_id": "0",
            "super_order_id": "0",
            "taken_by_me": false,
            "is_maker": true,
            "side": "buy",
            "type": "limit",
            "rate": "1290000.00",
            "fee": "0.10",
            "credit": "0.00",
            "amount": "39.40",
            "ts": 1_702_543_272_000_u64
        }))
        .unwrap();

        assert_eq!(order.order_type, "limit");
        assert_eq!(order.rate, Decimal::from_str("1290000.00").unwrap());
        assert_eq!(order.amount, Decimal::from_str("39.40").unwrap());
        assert!(order.is_maker);
        assert_eq!(order.parent_order_hash, "");
        assert_eq!(order.client_id, "");
    }
}
