//! One page of the brewery collection endpoint.

use common::{
    accumulator::PageRequest,
    brewery::{Brewery, parse_brewery_page},
    fetch_error::FetchError,
};
use tracing::{debug, info, warn};

use super::response::{check_status, transport_error};
use crate::api_utils::brewery_api_utils::BreweryApiClient;

pub async fn list_brewery_page(api: &BreweryApiClient, request: PageRequest) -> Result<Vec<Brewery>, FetchError> {
    if request.per_page != api.config.per_page {
        debug!(requested = request.per_page, configured = api.config.per_page, "overriding client page size");
    }
    let url = api.config.page_url(request);
    info!(%url, page = request.page, "fetching brewery page");
    let t0 = std::time::Instant::now();

    let response = api.client.get(url).send().await.map_err(transport_error)?;
    let status = response.status();
    let body = response.text().await.map_err(transport_error)?;
    check_status(status, &body, None)?;

    let breweries = parse_brewery_page(&body).inspect_err(|err| {
        warn!(page = request.page, %err, "brewery page payload rejected");
    })?;
    info!(
        page = request.page,
        count = breweries.len(),
        elapsed_ms = t0.elapsed().as_millis() as u64,
        "brewery page fetched"
    );
    Ok(breweries)
}
