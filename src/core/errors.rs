use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExchangeError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected HTTP status: {status}")]
    ApiStatus { status: u16 },

    #[error("Malformed response: {0}")]
    MalformedResponse(#[from] serde_json::Error),

    #[error("Exchange returned error code {code}")]
    ApiError { code: i64 },

    #[error("Invalid symbol: {0:?}")]
    InvalidSymbol(String),

    #[error("Pagination protocol violation: {0}")]
    ProtocolViolation(String),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] crate::core::config::ConfigError),

    #[error("{operation} failed on page {page}")]
    Paged {
        operation: &'static str,
        page: u64,
        #[source]
        source: Box<ExchangeError>,
    },
}

impl ExchangeError {
    /// Attach the operation and page that were in flight when the error happened
    pub fn on_page(self, operation: &'static str, page: u64) -> Self {
        Self::Paged {
            operation,
            page,
            source: Box::new(self),
        }
    }

    /// The underlying error with any pagination context stripped
    pub fn root(&self) -> &Self {
        match self {
            Self::Paged { source, .. } => source.root(),
            other => other,
        }
    }

    /// HTTP status code, if this is a status failure
    pub fn status(&self) -> Option<u16> {
        match self.root() {
            Self::ApiStatus { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self.root(), Self::Cancelled)
    }
}
