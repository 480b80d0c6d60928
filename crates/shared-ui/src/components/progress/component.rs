use dioxus::prelude::*;
use dioxus_primitives::progress as prim;

/// Horizontal meter. `value` is read against the primitive's `max`
/// (100 unless overridden).
#[component]
pub fn Progress(mut props: prim::ProgressProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "meter", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        prim::Progress { ..props }
    }
}

#[component]
pub fn ProgressIndicator(mut props: prim::ProgressIndicatorProps) -> Element {
    props
        .attributes
        .push(Attribute::new("class", "meter-fill", None, false));

    rsx! {
        prim::ProgressIndicator { ..props }
    }
}

/// Labelled percentage bar used for regional completion figures.
/// `percent` is clamped to 0..=100.
#[component]
pub fn PercentBar(label: String, percent: u8) -> Element {
    let percent = percent.min(100);

    rsx! {
        div { class: "percent-bar",
            div { class: "percent-bar-caption",
                span { "{label}" }
                span { class: "percent-bar-value", "{percent}%" }
            }
            Progress { value: Some(f64::from(percent)),
                ProgressIndicator {}
            }
        }
    }
}
