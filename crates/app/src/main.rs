use dioxus::prelude::*;
use shared_types::PortalConfig;

mod config;
mod format_helpers;
mod icons;
mod routes;
mod session;
use routes::Route;
use session::SessionState;

const PORTAL_THEME: Asset = asset!("/assets/portal.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Loaded after launch so the config log lines reach the installed logger.
    use_context_provider(|| -> PortalConfig { config::load_portal_config().clone() });
    use_context_provider(SessionState::new);

    rsx! {
        document::Link { rel: "stylesheet", href: PORTAL_THEME }
        shared_ui::ToastProvider {
            Router::<Route> {}
        }
    }
}
