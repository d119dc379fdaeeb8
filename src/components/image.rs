use super::class_names;
use dioxus::prelude::*;
use tracing::warn;

/// Image that stays hidden behind a placeholder until the browser has
/// finished loading the current `src`, or while the caller says its data is
/// still `loading`.
///
/// Readiness is remembered per source: swapping `src` on the same element
/// brings the placeholder back until the new image arrives. A failed load
/// also counts as finished so the placeholder never sticks. `onready`
/// receives the source that finished.
#[component]
pub fn Image(
    src: String,
    alt: String,
    #[props(default)] loading: bool,
    #[props(into, default)] class: String,
    onready: EventHandler<String>,
) -> Element {
    let mut decoded = use_signal(|| None::<String>);
    let hidden = loading || decoded.read().as_deref() != Some(src.as_str());
    let classes = class_names(&["image", &class]);

    let loaded_src = src.clone();
    let failed_src = src.clone();

    rsx! {
        if hidden {
            div { class: "image__loader image-placeholder" }
        }
        img {
            class: "{classes}",
            src: "{src}",
            alt: "{alt}",
            display: if hidden { "none" } else { "block" },
            onload: move |_| {
                decoded.set(Some(loaded_src.clone()));
                onready.call(loaded_src.clone());
            },
            onerror: move |_| {
                warn!(src = %failed_src, "image failed to load");
                decoded.set(Some(failed_src.clone()));
                onready.call(failed_src.clone());
            },
        }
    }
}
