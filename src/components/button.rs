use super::class_names;
use dioxus::prelude::*;

/// Button that ignores clicks while disabled and shows a spinner while
/// `loading`.
#[component]
pub fn Button(
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(into, default)] class: String,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let inactive = disabled || loading;
    let classes = class_names(&[
        "btn",
        if loading { "btn--loading" } else { "" },
        if inactive { "btn--disabled" } else { "" },
        &class,
    ]);

    rsx! {
        button {
            class: "{classes}",
            r#type: "button",
            disabled: inactive,
            onclick: move |evt| {
                if !inactive {
                    onclick.call(evt);
                }
            },
            if loading {
                span { class: "btn__spinner", role: "status" }
            }
            span { class: "btn__content", {children} }
        }
    }
}
