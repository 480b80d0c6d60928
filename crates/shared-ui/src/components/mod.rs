use dioxus::prelude::*;

// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod progress;
pub mod tabs;

// Primitive wrappers
pub mod label;
pub mod toast;

// Layout shell
pub mod sidebar;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use label::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use tabs::*;
pub use toast::*;

/// Base class for a component, merged ahead of caller attributes so a
/// caller-supplied `class` extends rather than replaces it.
pub(crate) fn classed(class: &'static str, attributes: Vec<Attribute>) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![Attribute::new("class", class, None, false)],
        attributes,
    ])
}

/// Like [`classed`], plus a `data-style` variant hook for the stylesheet.
pub(crate) fn styled(
    class: &'static str,
    style: &'static str,
    attributes: Vec<Attribute>,
) -> Vec<Attribute> {
    dioxus_primitives::merge_attributes(vec![
        vec![
            Attribute::new("class", class, None, false),
            Attribute::new("data-style", style, None, false),
        ],
        attributes,
    ])
}
