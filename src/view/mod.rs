//! View state for the comic page: which comic is requested, the latest-comic
//! anchor that bounds navigation, the search box text, and everything the
//! controls derive from those plus the current fetch state.
//!
//! Kept free of Dioxus types so the rules can be checked without a DOM.

use crate::comic::{Comic, ComicRequest};
use crate::fetch::FetchState;
use crate::random::random_in_range_with;
use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("Enter a comic number")]
    NotANumber,
    #[error("The comic id must be greater than 0")]
    BelowRange,
    #[error("The latest comic id is {latest}")]
    AboveRange { latest: u32 },
}

/// What the image area shows. Variants are in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ImagePhase {
    Error(String),
    Loading,
    Ready(Comic),
}

/// Pick the image area's phase.
///
/// `image_ready` is the browser's decode signal for the current image, tracked
/// apart from the API's `loading` flag. Either one pending keeps the
/// placeholders up.
pub fn image_phase(state: &FetchState<Comic>, image_ready: bool) -> ImagePhase {
    if let Some(error) = &state.error {
        return ImagePhase::Error(error.clone());
    }
    if state.loading || !image_ready {
        return ImagePhase::Loading;
    }
    match &state.data {
        Some(comic) => ImagePhase::Ready(comic.clone()),
        None => ImagePhase::Loading,
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewModel {
    search: Option<i64>,
    latest: Option<Comic>,
    input: String,
}

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(&self) -> Option<i64> {
        self.search
    }

    /// The latest-comic anchor, once the first `latest` fetch has landed.
    pub fn latest(&self) -> Option<&Comic> {
        self.latest.as_ref()
    }

    pub fn latest_num(&self) -> Option<u32> {
        self.latest.as_ref().map(|c| c.num)
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, value: impl Into<String>) {
        self.input = value.into();
    }

    pub fn request(&self) -> ComicRequest {
        ComicRequest::from_search(self.search)
    }

    /// Navigation controls are meaningless until the upper bound is known.
    pub fn header_visible(&self) -> bool {
        self.latest.is_some()
    }

    /// React to a new fetch state for `request`.
    ///
    /// The first comic loaded for `Latest` becomes the anchor and is never
    /// replaced afterwards. Any settled comic is mirrored into the search box.
    pub fn observe(&mut self, request: ComicRequest, state: &FetchState<Comic>) {
        if state.loading {
            return;
        }
        let Some(comic) = &state.data else {
            return;
        };

        if request == ComicRequest::Latest && self.latest.is_none() {
            info!(num = comic.num, "latest comic anchored");
            self.latest = Some(comic.clone());
        }

        self.input = comic.num.to_string();
    }

    /// Id of the comic on screen, or of the one being asked for.
    pub fn current_id(&self, state: &FetchState<Comic>) -> Option<u32> {
        state
            .data
            .as_ref()
            .map(|c| c.num)
            .or_else(|| match self.request() {
                ComicRequest::Id(id) => Some(id),
                ComicRequest::Latest => None,
            })
    }

    pub fn can_go_previous(&self, state: &FetchState<Comic>) -> bool {
        !state.loading && self.current_id(state).map_or(true, |id| id > 1)
    }

    pub fn can_go_next(&self, state: &FetchState<Comic>) -> bool {
        if state.loading {
            return false;
        }
        match (self.latest_num(), self.current_id(state)) {
            (Some(latest), Some(current)) => current < latest,
            _ => false,
        }
    }

    pub fn can_randomize(&self, state: &FetchState<Comic>) -> bool {
        !state.loading && state.error.is_none()
    }

    pub fn go_previous(&mut self, state: &FetchState<Comic>) -> Option<u32> {
        if !self.can_go_previous(state) {
            return None;
        }
        let target = self.current_id(state)?.checked_sub(1)?;
        self.go_to(target);
        Some(target)
    }

    pub fn go_next(&mut self, state: &FetchState<Comic>) -> Option<u32> {
        if !self.can_go_next(state) {
            return None;
        }
        let target = self.current_id(state)? + 1;
        self.go_to(target);
        Some(target)
    }

    /// Jump to a uniformly chosen comic between 1 and the anchor.
    pub fn go_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let upper = i64::from(self.latest_num().unwrap_or(1));
        let target = random_in_range_with(rng, 1, upper) as u32;
        self.go_to(target);
        target
    }

    /// Check a raw search value against `[1, latest]`.
    pub fn validate_search(&self, raw: &str) -> Result<u32, SearchError> {
        let value: i64 = raw.trim().parse().map_err(|_| SearchError::NotANumber)?;
        if value < 1 {
            return Err(SearchError::BelowRange);
        }
        if let Some(latest) = self.latest_num() {
            if value > i64::from(latest) {
                return Err(SearchError::AboveRange { latest });
            }
        }
        u32::try_from(value).map_err(|_| SearchError::NotANumber)
    }

    /// Request whatever is in the search box.
    pub fn submit_search(&mut self) -> Result<u32, SearchError> {
        let target = self.validate_search(&self.input)?;
        self.go_to(target);
        Ok(target)
    }

    fn go_to(&mut self, id: u32) {
        debug!(id, "navigating");
        self.search = Some(i64::from(id));
        self.input = id.to_string();
    }
}
