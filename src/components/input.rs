use super::class_names;
use dioxus::prelude::*;

/// Controlled numeric input.
///
/// `min`/`max` go to the native attributes; `message` is the custom text for
/// a range violation and is rendered under the field when present.
#[component]
pub fn SearchInput(
    value: String,
    #[props(into, default)] name: String,
    #[props(into, default)] placeholder: String,
    #[props(into, default)] class: String,
    #[props(default)] disabled: bool,
    min: u32,
    max: u32,
    #[props(default)] message: Option<String>,
    #[props(default)] icon: Element,
    oninput: EventHandler<String>,
) -> Element {
    let classes = class_names(&["input", &class]);
    let has_icon = icon.is_some();
    let invalid = message.is_some();
    let message = message.unwrap_or_default();

    rsx! {
        div { class: "input-wrapper",
            div { class: "input__container",
                if has_icon {
                    div { class: "input__icon input__icon--left", {icon} }
                }
                input {
                    class: "{classes}",
                    r#type: "number",
                    name: "{name}",
                    placeholder: "{placeholder}",
                    min: "{min}",
                    max: "{max}",
                    value: "{value}",
                    disabled: disabled,
                    oninput: move |evt| oninput.call(evt.value()),
                }
            }
            if invalid {
                span { class: "input__message", role: "alert", "{message}" }
            }
        }
    }
}
