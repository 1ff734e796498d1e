//! Error taxonomy shared by the accumulator, the backend and the frontend.

use serde::{Deserialize, Serialize};

use crate::brewery::BreweryId;

/// Failure of a single request against the brewery listing API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or a non-success response.
    #[error("network error: {0}")]
    Network(String),

    /// The payload was not a list of brewery-shaped objects.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Single brewery lookup found nothing.
    #[error("brewery not found: {0}")]
    NotFound(BreweryId),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::MalformedResponse(err.to_string())
    }
}

/// Errors raised by the accumulator state machine.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AccumulatorError {
    #[error("page {page} is still being fetched")]
    FetchInFlight { page: u64 },

    /// Implicit fetches stay blocked until the failed page is retried.
    #[error("fetching page {page} failed; retry it first")]
    BlockedByError { page: u64 },

    #[error("session is closed")]
    SessionClosed,

    #[error(transparent)]
    Fetch(#[from] FetchError),
}
