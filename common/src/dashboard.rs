//! Session state behind the brewery dashboard page.

use crate::{
    accumulator::{BreweryAccumulator, BrewerySource, FetchOutcome, FetchState, FetchTrigger, NewRecords, PageTicket},
    brewery::{Brewery, BreweryId},
    brewery_const::DEFAULT_PER_PAGE,
    fetch_error::{AccumulatorError, FetchError},
    projection::{BreweryFilter, ChartBucket, FilterKind, GroupDimension, apply_filters, group_by},
};

/// Owns the accumulated collection together with the user's filter and chart choices.
///
/// Chart series are computed over the whole collection, not the filtered list, so the
/// chart keeps showing the overall distribution while the user narrows the list.
#[derive(Debug)]
pub struct BreweryDashboard {
    accumulator: BreweryAccumulator,
    filter: BreweryFilter,
    dimension: GroupDimension,
}

impl Default for BreweryDashboard {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl BreweryDashboard {
    pub fn new(per_page: u32) -> Self {
        Self {
            accumulator: BreweryAccumulator::new(per_page),
            filter: BreweryFilter::default(),
            dimension: GroupDimension::default(),
        }
    }

    pub fn filtered_breweries(&self) -> Vec<&Brewery> {
        apply_filters(self.accumulator.collection().as_slice(), &self.filter)
    }

    pub fn chart_series(&self, dimension: GroupDimension) -> Vec<ChartBucket> {
        group_by(self.accumulator.collection(), dimension)
    }

    pub fn active_chart_series(&self) -> Vec<ChartBucket> {
        self.chart_series(self.dimension)
    }

    pub fn filter(&self) -> &BreweryFilter {
        &self.filter
    }

    pub fn set_filter(&mut self, kind: FilterKind, value: impl Into<String>) {
        self.filter.set(kind, value);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn group_dimension(&self) -> GroupDimension {
        self.dimension
    }

    pub fn set_group_dimension(&mut self, dimension: GroupDimension) {
        self.dimension = dimension;
    }

    pub fn cycle_group_dimension(&mut self) -> GroupDimension {
        self.dimension = self.dimension.next();
        self.dimension
    }

    pub fn brewery(&self, id: &BreweryId) -> Option<&Brewery> {
        self.accumulator.collection().get(id)
    }

    pub fn total_count(&self) -> usize {
        self.accumulator.collection().len()
    }

    pub fn cursor(&self) -> u64 {
        self.accumulator.cursor().page()
    }

    pub fn fetch_state(&self) -> &FetchState {
        self.accumulator.state()
    }

    pub fn is_fetching(&self) -> bool {
        self.accumulator.is_fetching()
    }

    pub fn failed_page(&self) -> Option<u64> {
        self.accumulator.failed_page()
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        self.accumulator.last_error()
    }

    /// "Load more" is only offered while idle; errors need an explicit retry.
    pub fn can_load_more(&self) -> bool {
        matches!(self.accumulator.state(), FetchState::Idle)
    }

    pub fn begin_fetch(&mut self, trigger: FetchTrigger) -> Result<PageTicket, AccumulatorError> {
        self.accumulator.begin_fetch(trigger)
    }

    pub fn complete_fetch(&mut self, ticket: PageTicket, result: Result<Vec<Brewery>, FetchError>) -> FetchOutcome {
        self.accumulator.complete_fetch(ticket, result)
    }

    pub async fn fetch_next_page<S: BrewerySource>(&mut self, source: &S) -> Result<NewRecords, AccumulatorError> {
        self.accumulator.fetch_next_page(source).await
    }

    pub async fn retry<S: BrewerySource>(&mut self, source: &S) -> Result<NewRecords, AccumulatorError> {
        self.accumulator.retry(source).await
    }

    pub fn close(&mut self) {
        self.accumulator.close();
    }
}
