//! Page-by-page accumulation of breweries into a deduplicated collection.
//!
//! Fetching is split into [`BreweryAccumulator::begin_fetch`] and
//! [`BreweryAccumulator::complete_fetch`] so that UI state never has to stay
//! borrowed while the request is awaited. The ticket returned by `begin_fetch`
//! ties the response back to the session and page that asked for it; responses
//! for a closed session or a page that is no longer in flight are dropped
//! without touching the collection.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::brewery::{Brewery, BreweryId};
use crate::brewery_const::{DEFAULT_PER_PAGE, FIRST_PAGE};
use crate::collection::BreweryCollection;
use crate::fetch_error::{AccumulatorError, FetchError};

static NEXT_SESSION_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    pub page: u64,
    pub per_page: u32,
}

/// Remote collection of breweries.
pub trait BrewerySource {
    fn fetch_page(&self, request: PageRequest) -> impl Future<Output = Result<Vec<Brewery>, FetchError>>;

    fn fetch_brewery(&self, id: &BreweryId) -> impl Future<Output = Result<Brewery, FetchError>>;
}

/// Next page to request. Starts at 1 and only moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PageCursor(u64);

impl Default for PageCursor {
    fn default() -> Self {
        Self(FIRST_PAGE)
    }
}

impl PageCursor {
    pub fn page(self) -> u64 {
        self.0
    }

    fn advance_past(&mut self, page: u64) {
        if page >= self.0 {
            self.0 = page + 1;
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchState {
    Idle,
    Fetching { page: u64 },
    /// Blocks implicit fetches until the page is retried. Collected records stay available.
    Failed { page: u64, error: FetchError },
    Closed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchTrigger {
    /// Load the page under the cursor.
    NextPage,
    /// User asked to retry; re-requests the failed page if there is one.
    Retry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTicket {
    session: u64,
    request: PageRequest,
    trigger: FetchTrigger,
}

impl PageTicket {
    pub fn request(&self) -> PageRequest {
        self.request
    }

    pub fn page(&self) -> u64 {
        self.request.page
    }

    pub fn trigger(&self) -> FetchTrigger {
        self.trigger
    }
}

/// Records a page added to the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecords {
    pub page: u64,
    pub records: Vec<Brewery>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Merged(NewRecords),
    Failed { page: u64, error: FetchError },
    /// Response arrived for a closed session or a page no longer in flight.
    Discarded { page: u64 },
}

#[derive(Debug)]
pub struct BreweryAccumulator {
    session: u64,
    per_page: u32,
    cursor: PageCursor,
    state: FetchState,
    collection: BreweryCollection,
}

impl Default for BreweryAccumulator {
    fn default() -> Self {
        Self::new(DEFAULT_PER_PAGE)
    }
}

impl BreweryAccumulator {
    pub fn new(per_page: u32) -> Self {
        Self {
            session: NEXT_SESSION_ID.fetch_add(1, Ordering::Relaxed),
            per_page,
            cursor: PageCursor::default(),
            state: FetchState::Idle,
            collection: BreweryCollection::new(),
        }
    }

    pub fn collection(&self) -> &BreweryCollection {
        &self.collection
    }

    pub fn cursor(&self) -> PageCursor {
        self.cursor
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn per_page(&self) -> u32 {
        self.per_page
    }

    pub fn is_fetching(&self) -> bool {
        matches!(self.state, FetchState::Fetching { .. })
    }

    pub fn failed_page(&self) -> Option<u64> {
        match self.state {
            FetchState::Failed { page, .. } => Some(page),
            _ => None,
        }
    }

    pub fn last_error(&self) -> Option<&FetchError> {
        match &self.state {
            FetchState::Failed { error, .. } => Some(error),
            _ => None,
        }
    }

    /// Reserves the single in-flight slot of this session.
    pub fn begin_fetch(&mut self, trigger: FetchTrigger) -> Result<PageTicket, AccumulatorError> {
        let page = match (&self.state, trigger) {
            (FetchState::Closed, _) => return Err(AccumulatorError::SessionClosed),
            (FetchState::Fetching { page }, _) => return Err(AccumulatorError::FetchInFlight { page: *page }),
            (FetchState::Failed { page, .. }, FetchTrigger::NextPage) => {
                return Err(AccumulatorError::BlockedByError { page: *page });
            }
            (FetchState::Failed { page, .. }, FetchTrigger::Retry) => *page,
            (FetchState::Idle, _) => self.cursor.page(),
        };
        self.state = FetchState::Fetching { page };
        debug!(session = self.session, page, ?trigger, "brewery page fetch started");
        Ok(PageTicket {
            session: self.session,
            request: PageRequest { page, per_page: self.per_page },
            trigger,
        })
    }

    /// Applies the response for a ticket. The cursor moves past the page whether the
    /// fetch succeeded or not; a failed response never touches the collection.
    pub fn complete_fetch(&mut self, ticket: PageTicket, result: Result<Vec<Brewery>, FetchError>) -> FetchOutcome {
        let page = ticket.page();
        let in_flight = matches!(self.state, FetchState::Fetching { page: p } if p == page);
        if ticket.session != self.session || !in_flight {
            warn!(session = self.session, ticket_session = ticket.session, page, "discarding stale brewery page response");
            return FetchOutcome::Discarded { page };
        }

        self.cursor.advance_past(page);
        match result {
            Ok(candidates) => {
                let received = candidates.len();
                let records = self.collection.merge(candidates);
                self.state = FetchState::Idle;
                debug!(
                    page,
                    received,
                    appended = records.len(),
                    total = self.collection.len(),
                    "merged brewery page"
                );
                FetchOutcome::Merged(NewRecords { page, records })
            }
            Err(error) => {
                warn!(page, %error, "brewery page fetch failed");
                self.state = FetchState::Failed { page, error: error.clone() };
                FetchOutcome::Failed { page, error }
            }
        }
    }

    /// Ends the session. Responses still on their way are discarded.
    pub fn close(&mut self) {
        self.state = FetchState::Closed;
    }

    pub async fn fetch_next_page<S: BrewerySource>(&mut self, source: &S) -> Result<NewRecords, AccumulatorError> {
        self.fetch_with(source, FetchTrigger::NextPage).await
    }

    pub async fn retry<S: BrewerySource>(&mut self, source: &S) -> Result<NewRecords, AccumulatorError> {
        self.fetch_with(source, FetchTrigger::Retry).await
    }

    async fn fetch_with<S: BrewerySource>(
        &mut self,
        source: &S,
        trigger: FetchTrigger,
    ) -> Result<NewRecords, AccumulatorError> {
        let ticket = self.begin_fetch(trigger)?;
        let result = source.fetch_page(ticket.request()).await;
        match self.complete_fetch(ticket, result) {
            FetchOutcome::Merged(new_records) => Ok(new_records),
            FetchOutcome::Failed { error, .. } => Err(AccumulatorError::Fetch(error)),
            FetchOutcome::Discarded { .. } => Err(AccumulatorError::SessionClosed),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;

    /// Replays scripted responses and records the pages asked for.
    #[derive(Default)]
    struct ScriptedSource {
        responses: RefCell<VecDeque<Result<Vec<Brewery>, FetchError>>>,
        requested: RefCell<Vec<u64>>,
    }

    impl ScriptedSource {
        fn new(responses: Vec<Result<Vec<Brewery>, FetchError>>) -> Self {
            Self { responses: RefCell::new(responses.into()), requested: RefCell::default() }
        }
    }

    impl BrewerySource for ScriptedSource {
        async fn fetch_page(&self, request: PageRequest) -> Result<Vec<Brewery>, FetchError> {
            self.requested.borrow_mut().push(request.page);
            self.responses.borrow_mut().pop_front().unwrap_or_else(|| Ok(vec![]))
        }

        async fn fetch_brewery(&self, id: &BreweryId) -> Result<Brewery, FetchError> {
            Err(FetchError::NotFound(id.clone()))
        }
    }

    fn brewery(id: &str) -> Brewery {
        Brewery::new(id, format!("Brewery {id}"))
    }

    fn ids(accumulator: &BreweryAccumulator) -> Vec<&str> {
        accumulator.collection().iter().map(|b| b.id.as_str()).collect()
    }

    #[tokio::test]
    async fn overlapping_pages_do_not_duplicate() {
        let source = ScriptedSource::new(vec![Ok(vec![brewery("1")]), Ok(vec![brewery("1"), brewery("2")])]);
        let mut accumulator = BreweryAccumulator::default();

        let first = accumulator.fetch_next_page(&source).await.unwrap();
        assert_eq!(first.records.len(), 1);
        let second = accumulator.fetch_next_page(&source).await.unwrap();
        assert_eq!(second.records, vec![brewery("2")]);

        assert_eq!(ids(&accumulator), vec!["1", "2"]);
        assert_eq!(*source.requested.borrow(), vec![1, 2]);
        assert_eq!(accumulator.cursor().page(), 3);
    }

    #[tokio::test]
    async fn failure_keeps_collection_and_advances_cursor() {
        let source = ScriptedSource::new(vec![
            Ok(vec![brewery("1")]),
            Err(FetchError::Network("connection reset".to_string())),
        ]);
        let mut accumulator = BreweryAccumulator::default();
        accumulator.fetch_next_page(&source).await.unwrap();

        let err = accumulator.fetch_next_page(&source).await.unwrap_err();
        assert!(matches!(err, AccumulatorError::Fetch(FetchError::Network(_))));
        assert_eq!(ids(&accumulator), vec!["1"]);
        assert_eq!(accumulator.cursor().page(), 3);
        assert_eq!(accumulator.failed_page(), Some(2));
    }

    #[tokio::test]
    async fn failed_state_blocks_next_page_until_retry() {
        let source = ScriptedSource::new(vec![
            Err(FetchError::MalformedResponse("not a list".to_string())),
            Ok(vec![brewery("a")]),
        ]);
        let mut accumulator = BreweryAccumulator::default();
        assert!(accumulator.fetch_next_page(&source).await.is_err());

        let blocked = accumulator.fetch_next_page(&source).await.unwrap_err();
        assert_eq!(blocked, AccumulatorError::BlockedByError { page: 1 });

        let retried = accumulator.retry(&source).await.unwrap();
        assert_eq!(retried.page, 1);
        assert_eq!(ids(&accumulator), vec!["a"]);
        assert_eq!(*accumulator.state(), FetchState::Idle);
        // the retried page was already behind the cursor
        assert_eq!(accumulator.cursor().page(), 2);
        assert_eq!(*source.requested.borrow(), vec![1, 1]);
    }

    #[tokio::test]
    async fn retried_page_overlapping_collection_appends_only_new_ids() {
        let source = ScriptedSource::new(vec![
            Ok(vec![brewery("1")]),
            Err(FetchError::Network("timeout".to_string())),
            Ok(vec![brewery("1"), brewery("2")]),
        ]);
        let mut accumulator = BreweryAccumulator::default();
        accumulator.fetch_next_page(&source).await.unwrap();
        assert!(accumulator.fetch_next_page(&source).await.is_err());

        let retried = accumulator.retry(&source).await.unwrap();
        assert_eq!(retried.page, 2);
        assert_eq!(retried.records, vec![brewery("2")]);
        assert_eq!(ids(&accumulator), vec!["1", "2"]);
        assert_eq!(*source.requested.borrow(), vec![1, 2, 2]);
        assert_eq!(accumulator.cursor().page(), 3);
    }

    #[test]
    fn second_fetch_is_rejected_while_in_flight() {
        let mut accumulator = BreweryAccumulator::default();
        let ticket = accumulator.begin_fetch(FetchTrigger::NextPage).unwrap();
        assert_eq!(
            accumulator.begin_fetch(FetchTrigger::NextPage),
            Err(AccumulatorError::FetchInFlight { page: 1 })
        );
        assert_eq!(
            accumulator.begin_fetch(FetchTrigger::Retry),
            Err(AccumulatorError::FetchInFlight { page: 1 })
        );
        let outcome = accumulator.complete_fetch(ticket, Ok(vec![brewery("1")]));
        assert!(matches!(outcome, FetchOutcome::Merged(_)));
        assert_eq!(accumulator.begin_fetch(FetchTrigger::NextPage).unwrap().page(), 2);
    }

    #[test]
    fn response_after_close_is_discarded() {
        let mut accumulator = BreweryAccumulator::default();
        let ticket = accumulator.begin_fetch(FetchTrigger::NextPage).unwrap();
        accumulator.close();

        let outcome = accumulator.complete_fetch(ticket, Ok(vec![brewery("1")]));
        assert_eq!(outcome, FetchOutcome::Discarded { page: 1 });
        assert!(accumulator.collection().is_empty());
        assert_eq!(accumulator.cursor().page(), 1);
        assert_eq!(accumulator.begin_fetch(FetchTrigger::NextPage), Err(AccumulatorError::SessionClosed));
    }

    #[test]
    fn ticket_from_another_session_is_discarded() {
        let mut first = BreweryAccumulator::default();
        let mut second = BreweryAccumulator::default();
        let foreign = first.begin_fetch(FetchTrigger::NextPage).unwrap();
        let _own = second.begin_fetch(FetchTrigger::NextPage).unwrap();

        let outcome = second.complete_fetch(foreign, Ok(vec![brewery("1")]));
        assert_eq!(outcome, FetchOutcome::Discarded { page: 1 });
        assert!(second.collection().is_empty());
        assert!(second.is_fetching());
    }

    #[test]
    fn ticket_carries_page_size() {
        let mut accumulator = BreweryAccumulator::new(50);
        let ticket = accumulator.begin_fetch(FetchTrigger::NextPage).unwrap();
        assert_eq!(ticket.request(), PageRequest { page: 1, per_page: 50 });
        assert_eq!(ticket.trigger(), FetchTrigger::NextPage);
    }
}
