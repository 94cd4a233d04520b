#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure taxonomy for gateway calls.
///
/// `Validation` failures are detected locally and never reach the network;
/// `Network` covers transport failures, `Server` non-success responses.
/// Every error is surfaced as a transient notice and leaves prior
/// selections intact so the user can retry.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("server responded with status {status}")]
    Server { status: u16 },
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True for failures raised before any network activity.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}
