//! Single brewery lookup for the detail page.

use common::{
    brewery::{Brewery, BreweryId, parse_brewery},
    fetch_error::FetchError,
};
use tracing::info;

use super::response::{check_status, transport_error};
use crate::api_utils::brewery_api_utils::BreweryApiClient;

pub async fn get_brewery_detail(api: &BreweryApiClient, id: &BreweryId) -> Result<Brewery, FetchError> {
    let url = api.config.detail_url(id)?;
    info!(%url, "fetching brewery detail");

    let response = api.client.get(url).send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    check_status(status, &body, Some(id))?;

    parse_brewery(&body)
}
