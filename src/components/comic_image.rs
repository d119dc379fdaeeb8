use super::Image;
use crate::comic::Comic;
use crate::fetch::FetchState;
use crate::view::{image_phase, ImagePhase};
use dioxus::prelude::*;

/// Phase of the image area for `state`, plus the signal recording which
/// image source has finished loading.
///
/// The component is not remounted between comics, so readiness only counts
/// when the recorded source is the image currently being shown.
pub fn use_image_phase(state: &FetchState<Comic>) -> (ImagePhase, Signal<Option<String>>) {
    let decoded = use_signal(|| None::<String>);
    let current = state.data.as_ref().map(|c| c.img.as_str());
    let image_ready = current.is_some() && decoded.read().as_deref() == current;
    (image_phase(state, image_ready), decoded)
}

/// Image area for one comic: error text, placeholders, or title + image +
/// alt text.
#[component]
pub fn ComicImage(state: FetchState<Comic>) -> Element {
    let (phase, mut decoded) = use_image_phase(&state);

    let (errored, message) = match &phase {
        ImagePhase::Error(message) => (true, message.clone()),
        _ => (false, String::new()),
    };
    let ready = matches!(phase, ImagePhase::Ready(_));
    let has_comic = state.data.is_some();
    let Comic {
        safe_title,
        alt,
        img,
        ..
    } = state.data.clone().unwrap_or_default();

    rsx! {
        if errored {
            div { class: "error", role: "alert", "{message}" }
        } else {
            if ready {
                div { class: "title", "{safe_title}" }
            }
            if has_comic {
                Image {
                    src: img,
                    alt: alt.clone(),
                    loading: state.loading,
                    onready: move |src: String| decoded.set(Some(src)),
                }
            } else {
                div { class: "image__loader image-placeholder" }
            }
            if ready {
                div { class: "alt", "{alt}" }
            } else {
                div { class: "image__loader alt-placeholder" }
            }
        }
    }
}
