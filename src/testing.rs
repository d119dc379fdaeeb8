//! Helpers for driving components inside a headless `VirtualDom`.

use crate::config::Config;
use dioxus::dioxus_core::NoOpMutations;
use dioxus::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// How many work/render rounds `settle` runs. Each spawned fetch needs one
/// round to resolve and one for the effect that reacts to it.
const SETTLE_ROUNDS: usize = 16;

/// Run queued tasks and re-render dirty scopes until the tree goes quiet.
pub async fn settle(dom: &mut VirtualDom) {
    for _ in 0..SETTLE_ROUNDS {
        tokio::select! {
            _ = dom.wait_for_work() => {}
            _ = tokio::time::sleep(Duration::from_millis(5)) => {}
        }
        dom.render_immediate(&mut NoOpMutations);
    }
}

/// Configuration pointing at a scripted API.
pub fn config() -> Config {
    Config {
        api_url: "https://comics.test".to_string(),
        log_level: "debug".to_string(),
    }
}

/// Values captured by a test component on every render.
#[derive(Clone)]
pub struct Recorder<T>(Rc<RefCell<Vec<T>>>);

impl<T> Default for Recorder<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(Vec::new())))
    }
}

impl<T: Clone> Recorder<T> {
    pub fn record(&self, value: T) {
        self.0.borrow_mut().push(value);
    }

    pub fn last(&self) -> Option<T> {
        self.0.borrow().last().cloned()
    }

    pub fn all(&self) -> Vec<T> {
        self.0.borrow().clone()
    }
}

/// Hands a value created inside the tree (usually a signal) back to the test.
#[derive(Clone)]
pub struct Slot<T>(Rc<RefCell<Option<T>>>);

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self(Rc::new(RefCell::new(None)))
    }
}

impl<T: Clone> Slot<T> {
    /// Store `value` unless a value is already held.
    pub fn fill(&self, value: T) {
        self.0.borrow_mut().get_or_insert(value);
    }

    pub fn get(&self) -> Option<T> {
        self.0.borrow().clone()
    }
}
