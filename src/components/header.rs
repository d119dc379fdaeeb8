use super::{Button, SearchInput, Tooltip};
use crate::comic::Comic;
use crate::fetch::FetchState;
use crate::view::ViewModel;
use dioxus::prelude::*;

/// Previous / search / random / next controls.
///
/// Only rendered once the latest-comic anchor exists, so the search bounds
/// and the Next button always have an upper limit to work with.
#[component]
pub fn Header(mut view: Signal<ViewModel>, state: FetchState<Comic>) -> Element {
    let mut message = use_signal(|| None::<String>);

    let (input, latest, can_previous, can_next, can_random) = {
        let model = view.read();
        (
            model.input().to_string(),
            model.latest_num().unwrap_or(0),
            model.can_go_previous(&state),
            model.can_go_next(&state),
            model.can_randomize(&state),
        )
    };
    let loading = state.loading;
    let previous_state = state.clone();
    let next_state = state.clone();

    rsx! {
        div { class: "header",
            Button {
                disabled: !can_previous,
                onclick: move |_| {
                    message.set(None);
                    view.write().go_previous(&previous_state);
                },
                "Previous"
            }
            form {
                prevent_default: "onsubmit",
                onsubmit: move |_| {
                    let outcome = view.write().submit_search();
                    message.set(outcome.err().map(|e| e.to_string()));
                },
                SearchInput {
                    value: input,
                    name: "search",
                    placeholder: "Search",
                    class: "search-input",
                    disabled: loading,
                    min: 1,
                    max: latest,
                    message: message(),
                    icon: rsx! { span { class: "search-icon", "⌕" } },
                    oninput: move |value: String| {
                        message.set(None);
                        view.write().set_input(value);
                    },
                }
            }
            Tooltip { content: "Jump to a random comic",
                Button {
                    disabled: !can_random,
                    onclick: move |_| {
                        message.set(None);
                        view.write().go_random(&mut rand::thread_rng());
                    },
                    "Random"
                }
            }
            Button {
                disabled: !can_next,
                onclick: move |_| {
                    message.set(None);
                    view.write().go_next(&next_state);
                },
                "Next"
            }
        }
    }
}
