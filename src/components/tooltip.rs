use super::class_names;
use dioxus::html::geometry::euclid::Rect;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::debug;

/// Gap between the tooltip's bottom edge and its trigger, in pixels.
const TOOLTIP_GAP: f64 = 8.0;

/// Client-space rectangle, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bounds {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl From<Rect<f64, f64>> for Bounds {
    fn from(rect: Rect<f64, f64>) -> Self {
        Self {
            x: rect.origin.x,
            y: rect.origin.y,
            width: rect.size.width,
            height: rect.size.height,
        }
    }
}

/// Top-left corner that places a `tip`-sized box above `trigger`,
/// horizontally centred on it.
pub fn tooltip_position(trigger: Bounds, tip: Bounds) -> (f64, f64) {
    let x = trigger.x + trigger.width / 2.0 - tip.width / 2.0;
    let y = trigger.y - tip.height - TOOLTIP_GAP;
    (x, y)
}

#[component]
pub fn Tooltip(
    #[props(into)] content: String,
    #[props(into, default)] class: String,
    children: Element,
) -> Element {
    let mut visible = use_signal(|| false);
    let mut position = use_signal(|| None::<(f64, f64)>);
    let mut trigger = use_signal(|| None::<Rc<MountedData>>);

    let mut hide = move || {
        visible.set(false);
        position.set(None);
    };

    let (left, top) = position().unwrap_or_default();
    let placed = if position().is_some() { "visible" } else { "hidden" };
    let classes = class_names(&["tooltip", &class]);
    let show = visible() && !content.is_empty();

    rsx! {
        div { class: "tooltip-container",
            div {
                class: "tooltip-trigger",
                onmounted: move |evt| trigger.set(Some(evt.data())),
                onmouseenter: move |_| visible.set(true),
                onmouseleave: move |_| hide(),
                onfocusin: move |_| visible.set(true),
                onfocusout: move |_| hide(),
                {children}
            }
            if show {
                div {
                    class: "{classes}",
                    role: "tooltip",
                    position: "fixed",
                    left: "{left}px",
                    top: "{top}px",
                    visibility: "{placed}",
                    onmounted: move |evt| async move {
                        let Some(anchor) = trigger.peek().clone() else {
                            return;
                        };
                        let (Ok(anchor), Ok(tip)) =
                            (anchor.get_client_rect().await, evt.get_client_rect().await)
                        else {
                            debug!("tooltip geometry unavailable");
                            return;
                        };
                        position.set(Some(tooltip_position(anchor.into(), tip.into())));
                    },
                    "{content}"
                    div { class: "tooltip__arrow" }
                }
            }
        }
    }
}
