use crate::core::errors::ExchangeError;
use crate::core::kernel::{with_cancellation, RestClient};
use crate::core::types::{DepositHistory, OrderHistory};
use crate::exchanges::bitkub::types::BitkubPaginated;
use reqwest::Method;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::{debug, instrument};

pub const DEPOSIT_HISTORY_PATH: &str = "/api/v3/crypto/deposit-history";
pub const ORDER_HISTORY_PATH: &str = "/api/v3/market/my-order-history";

/// Records requested per page
pub const PAGE_LIMIT: u32 = 100;
/// Quote currency every Bitkub market symbol is suffixed with
pub const QUOTE_CURRENCY: &str = "thb";
pub const DEFAULT_MAX_PAGES: u64 = 1000;

/// Thin typed wrapper around `RestClient` for the Bitkub v3 API
pub struct BitkubRestClient<R: RestClient> {
    client: R,
    max_pages: u64,
}

impl<R: RestClient> BitkubRestClient<R> {
    pub fn new(client: R) -> Self {
        Self {
            client,
            max_pages: DEFAULT_MAX_PAGES,
        }
    }

    /// Cap on requests per paginated operation
    pub fn with_max_pages(mut self, max_pages: u64) -> Self {
        self.max_pages = max_pages;
        self
    }

    /// All deposits, walking every page
    pub async fn get_deposit_history(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<DepositHistory>, ExchangeError> {
        self.fetch_all_pages(
            "deposit_history",
            Method::GET,
            DEPOSIT_HISTORY_PATH,
            |page| deposit_history_params(page, PAGE_LIMIT),
            cancel,
        )
        .await
    }

    /// All orders for `symbol`, walking every page
    ///
    /// Fails with `InvalidSymbol` before any request when `symbol` is not
    /// plain ASCII alphanumeric.
    pub async fn get_order_history(
        &self,
        symbol: &str,
        start_timestamp: Option<u64>,
        cancel: &CancellationToken,
    ) -> Result<Vec<OrderHistory>, ExchangeError> {
        let market = market_symbol(symbol)?;
        self.fetch_all_pages(
            "order_history",
            Method::POST,
            ORDER_HISTORY_PATH,
            |page| order_history_params(&market, page, PAGE_LIMIT, start_timestamp),
            cancel,
        )
        .await
    }

    /// Request page after page until the server reports `next == 0`
    ///
    /// Any failure discards the records gathered so far. The cursor must
    /// strictly advance and at most `max_pages` requests are issued.
    #[instrument(skip(self, build_params, cancel), fields(exchange = "bitkub", max_pages = self.max_pages))]
    async fn fetch_all_pages<T, F>(
        &self,
        operation: &'static str,
        method: Method,
        endpoint: &str,
        build_params: F,
        cancel: &CancellationToken,
    ) -> Result<Vec<T>, ExchangeError>
    where
        T: DeserializeOwned + Send,
        F: Fn(u64) -> Vec<(&'static str, String)> + Send + Sync,
    {
        let mut page = 1;
        let mut records = Vec::new();

        for _ in 0..self.max_pages {
            if cancel.is_cancelled() {
                return Err(ExchangeError::Cancelled.on_page(operation, page));
            }

            let params = build_params(page);
            let params: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();

            let response: BitkubPaginated<T> = with_cancellation(
                cancel,
                self.client
                    .signed_request_json::<BitkubPaginated<T>>(method.clone(), endpoint, &params),
            )
            .await
            .map_err(|e| e.on_page(operation, page))?;

            if response.error != 0 {
                return Err(ExchangeError::ApiError {
                    code: response.error,
                }
                .on_page(operation, page));
            }

            debug!(
                page,
                next = response.pagination.next,
                received = response.result.len(),
                "Fetched page"
            );
            records.extend(response.result);

            match response.pagination.next {
                0 => return Ok(records),
                next if next > page => page = next,
                next => {
                    return Err(ExchangeError::ProtocolViolation(format!(
                        "cursor did not advance: page {} returned next {}",
                        page, next
                    ))
                    .on_page(operation, page));
                }
            }
        }

        Err(ExchangeError::ProtocolViolation(format!(
            "more than {} pages without a terminating cursor",
            self.max_pages
        ))
        .on_page(operation, page))
    }
}

/// `"BTC"` -> `"btc_thb"`
///
/// The query string is signed as-is, so anything reqwest would percent-encode
/// or that could start a new parameter is rejected.
pub fn market_symbol(symbol: &str) -> Result<String, ExchangeError> {
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(ExchangeError::InvalidSymbol(symbol.to_string()));
    }
    Ok(format!("{}_{}", symbol.to_ascii_lowercase(), QUOTE_CURRENCY))
}

pub fn deposit_history_params(page: u64, limit: u32) -> Vec<(&'static str, String)> {
    vec![("p", page.to_string()), ("lmt", limit.to_string())]
}

pub fn order_history_params(
    market: &str,
    page: u64,
    limit: u32,
    start_timestamp: Option<u64>,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("sym", market.to_string()),
        ("p", page.to_string()),
        ("lmt", limit.to_string()),
    ];
    if let Some(start) = start_timestamp {
        params.push(("start", start.to_string()));
    }
    params
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::kernel::build_query_string;
    use rstest::rstest;

    fn joined(params: &[(&'static str, String)]) -> String {
        let borrowed: Vec<(&str, &str)> = params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        build_query_string(&borrowed)
    }

    #[rstest]
    #[case("BTC", "btc_thb")]
    #[case("eth", "eth_thb")]
    #[case("UsDt", "usdt_thb")]
    fn test_market_symbol(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(market_symbol(input).unwrap(), expected);
    }

    #[rstest]
    #[case("")]
    #[case("BTC X")]
    #[case("BTC&start=1")]
    #[case("btc_thb")]
    #[case("BTC%20")]
    #[case("ÉTH")]
    fn test_market_symbol_rejects_unsafe_input(#[case] input: &str) {
        assert!(matches!(
            market_symbol(input),
            Err(ExchangeError::InvalidSymbol(ref s)) if s == input
        ));
    }

    #[test]
    fn test_deposit_query() {
        assert_eq!(joined(&deposit_history_params(1, PAGE_LIMIT)), "p=1&lmt=100");
    }

    #[test]
    fn test_order_query_without_start() {
        let query = joined(&order_history_params(&market_symbol("BTC").unwrap(), 1, PAGE_LIMIT, None));
        assert_eq!(query, "sym=btc_thb&p=1&lmt=100");
        assert!(!query.contains("start"));
    }

    #[test]
    fn test_order_query_with_start() {
        let query = joined(&order_history_params(
            &market_symbol("BTC").unwrap(),
            4,
            PAGE_LIMIT,
            Some(1_700_000_000_000),
        ));
        assert_eq!(query, "sym=btc_thb&p=4&lmt=100&start=1700000000000");
    }
}
