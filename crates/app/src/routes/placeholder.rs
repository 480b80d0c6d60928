use dioxus::prelude::*;
use shared_ui::{Card, CardContent, PageDescription, PageHeader, PageTitle};

/// Stand-in body for sections that have a route and a sidebar entry but
/// no content yet.
#[component]
pub fn PlaceholderPage(title: String, description: String) -> Element {
    rsx! {
        PageHeader {
            PageTitle { "{title}" }
            PageDescription { "{description}" }
        }
        Card {
            CardContent {
                p { class: "placeholder-note", "This section is coming soon." }
            }
        }
    }
}
