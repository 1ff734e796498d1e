//! Client API calls for the brewery listing endpoints.

use common::{
    accumulator::{BrewerySource, PageRequest},
    brewery::{Brewery, BreweryId},
    fetch_error::FetchError,
};
use dioxus::prelude::*;

const CODE_NOT_FOUND: u16 = 404;
const CODE_MALFORMED: u16 = 422;
const CODE_NETWORK: u16 = 502;


#[server]
pub async fn list_brewery_page(request: PageRequest) -> Result<Vec<Brewery>, ServerFnError> {
    let api = backend::api_utils::brewery_api_utils::BreweryApiClient::from_env().map_err(config_error)?;
    let x = backend::api::breweries::list_brewery_page(&api, request).await;
    x.map_err(encode_fetch_error)
}

#[server]
pub async fn get_brewery_detail(brewery_id: BreweryId) -> Result<Brewery, ServerFnError> {
    let api = backend::api_utils::brewery_api_utils::BreweryApiClient::from_env().map_err(config_error)?;
    let x = backend::api::breweries::get_brewery_detail(&api, &brewery_id).await;
    x.map_err(encode_fetch_error)
}

#[allow(dead_code)]
fn config_error(e: impl std::fmt::Display) -> ServerFnError {
    ServerFnError::ServerError { message: format!("{e:#}"), code: 500, details: None }
}

/// Carries the typed error through the server function boundary.
pub fn encode_fetch_error(e: FetchError) -> ServerFnError {
    let code = match &e {
        FetchError::NotFound(_) => CODE_NOT_FOUND,
        FetchError::MalformedResponse(_) => CODE_MALFORMED,
        FetchError::Network(_) => CODE_NETWORK,
    };
    ServerFnError::ServerError { message: e.to_string(), code, details: serde_json::to_value(&e).ok() }
}

/// Inverse of [`encode_fetch_error`]; anything else is treated as a network failure.
pub fn decode_fetch_error(e: ServerFnError, lookup: Option<&BreweryId>) -> FetchError {
    match e {
        ServerFnError::ServerError { message, code, details } => {
            if let Some(fetch_error) = details.and_then(|d| serde_json::from_value::<FetchError>(d).ok()) {
                return fetch_error;
            }
            match (code, lookup) {
                (CODE_NOT_FOUND, Some(id)) => FetchError::NotFound(id.clone()),
                (CODE_MALFORMED, _) => FetchError::MalformedResponse(message),
                _ => FetchError::Network(message),
            }
        }
        other => FetchError::Network(other.to_string()),
    }
}

/// `BrewerySource` that goes through the server functions above.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ServerFnBrewerySource;

impl BrewerySource for ServerFnBrewerySource {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Brewery>, FetchError> {
        list_brewery_page(request).await.map_err(|e| decode_fetch_error(e, None))
    }

    async fn fetch_brewery(&self, id: &BreweryId) -> Result<Brewery, FetchError> {
        get_brewery_detail(id.clone()).await.map_err(|e| decode_fetch_error(e, Some(id)))
    }
}
