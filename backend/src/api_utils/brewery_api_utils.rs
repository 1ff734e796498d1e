use std::time::Duration;

use anyhow::Context;
use common::{
    accumulator::PageRequest,
    brewery::BreweryId,
    brewery_const::{DEFAULT_BREWERY_API_URL, DEFAULT_PER_PAGE, MAX_PER_PAGE},
    fetch_error::FetchError,
};
use reqwest::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct BreweryApiConfig {
    /// Collection endpoint; single records live at `<base_url>/<id>`.
    pub base_url: Url,
    pub per_page: u32,
    pub timeout: Duration,
}

impl BreweryApiConfig {
    /// Reads `BREWERY_API_URL`, `BREWERY_API_PER_PAGE` and `BREWERY_API_TIMEOUT_SECS`.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let base_url = lookup("BREWERY_API_URL").unwrap_or(DEFAULT_BREWERY_API_URL.to_string());
        let base_url = Url::parse(&base_url).with_context(|| format!("invalid BREWERY_API_URL: {base_url}"))?;

        let per_page = match lookup("BREWERY_API_PER_PAGE") {
            Some(value) => value
                .trim()
                .parse::<u32>()
                .with_context(|| format!("invalid BREWERY_API_PER_PAGE: {value}"))?,
            None => DEFAULT_PER_PAGE,
        };
        if per_page == 0 || per_page > MAX_PER_PAGE {
            anyhow::bail!("BREWERY_API_PER_PAGE must be between 1 and {MAX_PER_PAGE}, got {per_page}");
        }

        let timeout_secs = match lookup("BREWERY_API_TIMEOUT_SECS") {
            Some(value) => value
                .trim()
                .parse::<u64>()
                .with_context(|| format!("invalid BREWERY_API_TIMEOUT_SECS: {value}"))?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self { base_url, per_page, timeout: Duration::from_secs(timeout_secs) })
    }

    /// The configured page size wins over the one in `request`, which comes from the client.
    pub fn page_url(&self, request: PageRequest) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("per_page", &self.per_page.to_string())
            .append_pair("page", &request.page.to_string());
        url
    }

    pub fn detail_url(&self, id: &BreweryId) -> Result<Url, FetchError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| FetchError::Network(format!("cannot append a path to {}", self.base_url)))?
            .pop_if_empty()
            .push(id.as_str());
        Ok(url)
    }
}

/// HTTP client bound to one listing API configuration.
#[derive(Debug, Clone)]
pub struct BreweryApiClient {
    pub(crate) client: reqwest::Client,
    pub(crate) config: BreweryApiConfig,
}

impl BreweryApiClient {
    pub fn new(config: BreweryApiConfig) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .context("failed to build brewery API http client")?;
        Ok(Self { client, config })
    }

    pub fn from_env() -> anyhow::Result<Self> {
        Self::new(BreweryApiConfig::from_env()?)
    }

    pub fn config(&self) -> &BreweryApiConfig {
        &self.config
    }
}
