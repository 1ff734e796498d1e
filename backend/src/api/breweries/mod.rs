//! Listing API calls and the `BrewerySource` backed by them.

use common::{
    accumulator::{BrewerySource, PageRequest},
    brewery::{Brewery, BreweryId},
    fetch_error::FetchError,
};

use crate::api_utils::brewery_api_utils::BreweryApiClient;

mod list_brewery_page;
pub use list_brewery_page::list_brewery_page;

mod get_brewery_detail;
pub use get_brewery_detail::get_brewery_detail;

mod response;

impl BrewerySource for BreweryApiClient {
    async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Brewery>, FetchError> {
        list_brewery_page(self, request).await
    }

    async fn fetch_brewery(&self, id: &BreweryId) -> Result<Brewery, FetchError> {
        get_brewery_detail(self, id).await
    }
}
