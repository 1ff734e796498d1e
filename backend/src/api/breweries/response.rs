//! Turns listing API responses into the fetch error taxonomy.

use common::{brewery::BreweryId, fetch_error::FetchError};
use reqwest::StatusCode;

pub(crate) fn transport_error(err: reqwest::Error) -> FetchError {
    FetchError::Network(err.to_string())
}

/// `lookup` is set for single-record requests, where 404 means the brewery does not exist.
pub(crate) fn check_status(status: StatusCode, body: &str, lookup: Option<&BreweryId>) -> Result<(), FetchError> {
    if status.is_success() {
        return Ok(());
    }
    if let (StatusCode::NOT_FOUND, Some(id)) = (status, lookup) {
        return Err(FetchError::NotFound(id.clone()));
    }
    Err(FetchError::Network(format!("Error: {}: {}", status, body.trim())))
}
