//! Loading/error/data state for a remote resource keyed by URL.
//!
//! [`FetchTracker`] is the state machine behind [`use_fetch`]. It keeps the
//! last good data visible while a new request is in flight and only accepts
//! the result of the most recently issued request: each request gets a
//! [`FetchTicket`] stamped with a generation number and results carrying an
//! older generation are dropped.

mod hook;

pub use hook::use_fetch;

use crate::request::FetchError;
use tracing::{debug, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    pub data: Option<T>,
    pub loading: bool,
    pub error: Option<String>,
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
        }
    }
}

/// Handle for one issued request. Hand it back to [`FetchTracker::settle`]
/// together with the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    url: String,
}

impl FetchTicket {
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug)]
pub struct FetchTracker<T> {
    state: FetchState<T>,
    target: Option<String>,
    generation: u64,
}

impl<T> Default for FetchTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FetchTracker<T> {
    pub fn new() -> Self {
        Self {
            state: FetchState::default(),
            target: None,
            generation: 0,
        }
    }

    pub fn state(&self) -> &FetchState<T> {
        &self.state
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Generation of the most recently issued request (0 before any).
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Point the tracker at a new target.
    ///
    /// Returns a ticket when a request must be issued: the target is non-empty
    /// and differs from the current one. An empty target stops loading and
    /// invalidates whatever is in flight, but keeps the data.
    pub fn retarget(&mut self, target: Option<&str>) -> Option<FetchTicket> {
        let target = target.filter(|t| !t.is_empty());

        let Some(url) = target else {
            if self.target.take().is_some() {
                self.generation += 1;
            }
            self.state.loading = false;
            return None;
        };

        if self.target.as_deref() == Some(url) {
            return None;
        }

        self.generation += 1;
        self.target = Some(url.to_string());
        self.state.loading = true;
        self.state.error = None;

        debug!(url = %url, generation = self.generation, "issuing request");

        Some(FetchTicket {
            generation: self.generation,
            url: url.to_string(),
        })
    }

    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Commit the outcome of `ticket`'s request.
    ///
    /// Returns false, leaving state untouched, when a newer request has been
    /// issued since the ticket was handed out.
    pub fn settle(&mut self, ticket: &FetchTicket, result: Result<T, FetchError>) -> bool {
        if !self.is_current(ticket) {
            debug!(
                url = %ticket.url,
                generation = ticket.generation,
                current = self.generation,
                "dropping superseded response"
            );
            return false;
        }

        self.state = match result {
            Ok(data) => FetchState {
                data: Some(data),
                loading: false,
                error: None,
            },
            Err(e) => {
                warn!(url = %ticket.url, error = %e, "request failed");
                FetchState {
                    data: None,
                    loading: false,
                    error: Some(e.message()),
                }
            }
        };
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::testing::ScriptedFetcher;
    use crate::request::{fetch_json, FALLBACK_ERROR};
    use futures::executor::block_on;
    use serde_json::json;

    const URL_A: &str = "https://api.test/?comic=1";
    const URL_B: &str = "https://api.test/?comic=2";
    const URL_C: &str = "https://api.test/?comic=3";

    fn drive(tracker: &mut FetchTracker<u32>, fetcher: &ScriptedFetcher, target: Option<&str>) {
        if let Some(ticket) = tracker.retarget(target) {
            let result = block_on(fetch_json::<u32>(fetcher, ticket.url()));
            tracker.settle(&ticket, result);
        }
    }

    #[test]
    fn test_no_target_never_fetches() {
        let fetcher = ScriptedFetcher::default();
        let mut tracker = FetchTracker::<u32>::new();

        drive(&mut tracker, &fetcher, None);
        drive(&mut tracker, &fetcher, Some(""));

        assert_eq!(*tracker.state(), FetchState::default());
        assert!(fetcher.calls.borrow().is_empty());
    }

    #[test]
    fn test_success_transitions() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Ok(json!(11)));
        let mut tracker = FetchTracker::<u32>::new();
        assert!(!tracker.state().loading);

        let ticket = tracker.retarget(Some(URL_A)).unwrap();
        assert!(tracker.state().loading);
        assert_eq!(tracker.state().data, None);
        assert_eq!(tracker.state().error, None);

        let result = block_on(fetch_json::<u32>(&fetcher, ticket.url()));
        assert!(tracker.settle(&ticket, result));
        assert_eq!(
            *tracker.state(),
            FetchState {
                data: Some(11),
                loading: false,
                error: None
            }
        );
        assert_eq!(fetcher.calls.borrow().len(), 1);
    }

    #[test]
    fn test_failure_clears_data() {
        let fetcher = ScriptedFetcher::default()
            .with(URL_A, Ok(json!(1)))
            .with(URL_B, Err(FetchError::Network("Network error".to_string())));
        let mut tracker = FetchTracker::<u32>::new();

        drive(&mut tracker, &fetcher, Some(URL_A));
        drive(&mut tracker, &fetcher, Some(URL_B));

        assert_eq!(
            *tracker.state(),
            FetchState {
                data: None,
                loading: false,
                error: Some("Network error".to_string())
            }
        );
    }

    #[test]
    fn test_undescribed_failure_uses_fallback() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Err(FetchError::Unknown));
        let mut tracker = FetchTracker::<u32>::new();

        drive(&mut tracker, &fetcher, Some(URL_A));

        assert_eq!(tracker.state().error.as_deref(), Some(FALLBACK_ERROR));
        assert_eq!(tracker.state().data, None);
    }

    #[test]
    fn test_keeps_previous_data_while_loading() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Ok(json!(1)));
        let mut tracker = FetchTracker::<u32>::new();
        drive(&mut tracker, &fetcher, Some(URL_A));

        let ticket = tracker.retarget(Some(URL_B)).unwrap();
        assert!(tracker.state().loading);
        assert_eq!(tracker.state().data, Some(1));

        tracker.settle(&ticket, Ok(2));
        assert_eq!(tracker.state().data, Some(2));
    }

    #[test]
    fn test_same_target_does_not_refetch() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Ok(json!(1)));
        let mut tracker = FetchTracker::<u32>::new();

        drive(&mut tracker, &fetcher, Some(URL_A));
        assert!(tracker.retarget(Some(URL_A)).is_none());
        drive(&mut tracker, &fetcher, Some(URL_A));

        assert_eq!(fetcher.calls.borrow().len(), 1);
        assert_eq!(tracker.generation(), 1);
    }

    #[test]
    fn test_last_request_wins() {
        let mut tracker = FetchTracker::<u32>::new();

        let a = tracker.retarget(Some(URL_A)).unwrap();
        let b = tracker.retarget(Some(URL_B)).unwrap();
        let c = tracker.retarget(Some(URL_C)).unwrap();

        // C lands first, then the stragglers.
        assert!(tracker.settle(&c, Ok(3)));
        assert!(!tracker.settle(&a, Ok(1)));
        assert!(!tracker.settle(&b, Err(FetchError::Http { status: 500 })));

        assert_eq!(
            *tracker.state(),
            FetchState {
                data: Some(3),
                loading: false,
                error: None
            }
        );
    }

    #[test]
    fn test_stale_result_does_not_end_loading() {
        let mut tracker = FetchTracker::<u32>::new();

        let a = tracker.retarget(Some(URL_A)).unwrap();
        let _b = tracker.retarget(Some(URL_B)).unwrap();

        assert!(!tracker.settle(&a, Ok(1)));
        assert!(tracker.state().loading);
        assert_eq!(tracker.state().data, None);
    }

    #[test]
    fn test_clearing_target_keeps_data() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Ok(json!(5)));
        let mut tracker = FetchTracker::<u32>::new();
        drive(&mut tracker, &fetcher, Some(URL_A));

        let pending = tracker.retarget(Some(URL_B)).unwrap();
        assert!(tracker.retarget(None).is_none());

        assert!(!tracker.state().loading);
        assert_eq!(tracker.state().data, Some(5));
        assert_eq!(tracker.target(), None);
        assert!(!tracker.settle(&pending, Ok(6)));
        assert_eq!(tracker.state().data, Some(5));
    }

    #[test]
    fn test_returning_to_cleared_target_refetches() {
        let fetcher = ScriptedFetcher::default().with(URL_A, Ok(json!(5)));
        let mut tracker = FetchTracker::<u32>::new();

        drive(&mut tracker, &fetcher, Some(URL_A));
        drive(&mut tracker, &fetcher, None);
        drive(&mut tracker, &fetcher, Some(URL_A));

        assert_eq!(fetcher.calls.borrow().len(), 2);
    }
}
