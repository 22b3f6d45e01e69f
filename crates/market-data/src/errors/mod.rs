//! Error types for the market data crate.
//!
//! [`MarketDataError`] is the typed failure of a single upstream call. Above the
//! single-symbol fetch, failures are carried as values (see
//! [`QuoteOutcome`](crate::models::QuoteOutcome)) instead of being propagated.

use thiserror::Error;

/// Errors that can occur during market data operations.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The caller passed input that can never succeed (empty symbol list,
    /// blank symbol, empty search query).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The upstream provider does not know the requested symbol.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The provider answered successfully but returned no result entry.
    #[error("No data available for {0}")]
    NoData(String),

    /// A provider-specific error occurred (non-success status, unreadable body).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned a result that lacks the core numeric fields.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// The provider does not implement the requested operation.
    #[error("Operation '{operation}' not supported by {provider}")]
    NotSupported {
        /// The unsupported operation
        operation: String,
        /// The provider that was asked
        provider: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether the error means "this symbol has nothing to show" rather than
    /// "the upstream misbehaved". The routing layer maps this to 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoData(_))
    }
}
