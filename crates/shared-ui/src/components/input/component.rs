use dioxus::prelude::*;

use super::classed;

/// Single-line text input.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = classed("input", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

/// Multi-line text input.
#[component]
pub fn TextArea(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = 3)] rows: i64,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let merged = classed("input textarea", attributes);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        textarea {
            value: value,
            placeholder: placeholder,
            rows: rows,
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
    }
}

/// Inline validation message rendered under a field.
#[component]
pub fn FieldError(message: Option<String>) -> Element {
    match message {
        Some(msg) => rsx! {
            p { class: "field-error", role: "alert", "{msg}" }
        },
        None => rsx! {},
    }
}
