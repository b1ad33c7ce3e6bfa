use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct BitkubPagination {
    pub page: u64,
    pub last: u64,
    /// Next page to request; 0 means there is none
    pub next: u64,
    pub prev: u64,
}

/// Envelope wrapping every paginated Bitkub v3 response
#[derive(Debug, Deserialize)]
pub struct BitkubPaginated<T> {
    pub error: i64,
    pub result: Vec<T>,
    pub pagination: BitkubPagination,
}
