//! Root components.

use crate::comic::{use_comic, Comic};
use crate::components::{ComicImage, Header};
use crate::config::Config;
use crate::fetch::FetchState;
use crate::request::Fetcher;
use crate::view::ViewModel;
use dioxus::prelude::*;

/// Application root: provides configuration and the fetch primitive to the
/// tree, then renders the comic page.
#[component]
pub fn App() -> Element {
    use_context_provider(Config::from_env);
    use_context_provider(Fetcher::http);

    rsx! { ComicPage {} }
}

/// View model plus the comic it currently requests.
///
/// The latest-comic anchor is latched from the fetch state as it settles.
pub fn use_comic_page() -> (Signal<ViewModel>, Memo<FetchState<Comic>>) {
    let mut view = use_signal(ViewModel::new);
    let request = use_memo(move || view.read().request());
    let comic = use_comic(request);

    // Subscribed to the fetch state only.
    use_effect(move || {
        let state = comic.read().clone();
        let request = *request.peek();
        view.write().observe(request, &state);
    });

    (view, comic)
}

#[component]
pub fn ComicPage() -> Element {
    let (view, comic) = use_comic_page();

    let state = comic.read().clone();
    let header_visible = view.read().header_visible();

    rsx! {
        div { class: "app",
            if header_visible {
                Header { view, state: state.clone() }
            }
            div { class: "image-container",
                ComicImage { state }
            }
        }
    }
}
