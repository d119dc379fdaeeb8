use super::{FetchState, FetchTracker};
use crate::request::Fetcher;
use dioxus::prelude::*;
use serde::de::DeserializeOwned;

/// Keep a [`FetchState`] in sync with `target`.
///
/// Whenever `target` changes to a new non-empty URL a request is spawned on
/// the component's task queue through the [`Fetcher`] found in context.
/// Responses to superseded requests are dropped by the tracker.
pub fn use_fetch<T>(target: Memo<Option<String>>) -> Memo<FetchState<T>>
where
    T: DeserializeOwned + Clone + PartialEq + 'static,
{
    let fetcher = use_context::<Fetcher>();
    let mut tracker = use_signal(FetchTracker::<T>::new);

    use_effect(move || {
        let target = target.read().clone();
        let Some(ticket) = tracker.write().retarget(target.as_deref()) else {
            return;
        };

        let fetcher = fetcher.clone();
        spawn(async move {
            let result = fetcher.fetch_json::<T>(ticket.url()).await;
            tracker.write().settle(&ticket, result);
        });
    });

    use_memo(move || tracker.read().state().clone())
}
