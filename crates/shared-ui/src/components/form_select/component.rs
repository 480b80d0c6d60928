use dioxus::prelude::*;

use super::classed;

/// Native `<select>` styled to match [`Input`](super::Input).
///
/// Children are `option` elements. An empty `placeholder` omits the
/// disabled leading option.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] on_change: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default = false)] disabled: bool,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let merged = classed("form-select", attributes);
    let show_placeholder = !placeholder.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        select {
            value: value.clone(),
            disabled: disabled,
            onchange: move |evt| on_change.call(evt),
            ..merged,
            if show_placeholder {
                option {
                    value: "",
                    disabled: true,
                    selected: value.is_empty(),
                    "{placeholder}"
                }
            }
            {children}
        }
    }
}
