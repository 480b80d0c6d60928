pub mod analytics;
pub mod dashboard;
pub mod inspections;
pub mod landing;
pub mod login;
pub mod not_found;
pub mod placeholder;
pub mod registration;
pub mod status_badges;

use crate::icons::{BellIcon, NavIcon};
use crate::session::{use_navigation, use_session};
use dioxus::prelude::*;
use shared_types::{header_title, NavigationEntry, PortalConfig};
use shared_ui::{
    Button, ButtonVariant, Sidebar, SidebarContent, SidebarFooter, SidebarGroup,
    SidebarGroupLabel, SidebarHeader, SidebarInset, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, SidebarProvider, SidebarTrigger,
};

use analytics::Analytics;
use dashboard::Dashboard;
use inspections::Inspections;
use landing::Landing;
use login::Login;
use not_found::NotFound;
use placeholder::PlaceholderPage;
use registration::Registration;

/// Application routes. Paths inside the layout are the ones the
/// navigation tables point at.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Landing {},
    #[route("/login")]
    Login {},
    #[layout(PortalLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/registration")]
    Registration {},
    #[route("/inspections")]
    Inspections {},
    #[route("/documents")]
    Documents {},
    #[route("/rules")]
    Rules {},
    #[route("/analytics")]
    Analytics {},
    #[route("/communications")]
    Communications {},
    #[route("/reports")]
    Reports {},
    #[route("/inspection-status")]
    InspectionStatus {},
    #[route("/assigned-inspections")]
    AssignedInspections {},
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

impl Route {
    /// Route for a navigation path. Paths without a page land on the
    /// not-found route.
    pub fn from_path(path: &str) -> Route {
        path.parse().unwrap_or_else(|_| Route::NotFound {
            route: path
                .split('/')
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

/// Portal shell: role-scoped sidebar, header and page outlet.
#[component]
fn PortalLayout() -> Element {
    let route: Route = use_route();
    let portal: PortalConfig = use_context();
    let mut session = use_session();
    let entries = use_navigation();

    let current_path = route.to_string();
    let title = header_title(entries, &current_path);
    let role_caption = (session.role)().header_label();
    let user_label = session.user_label();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        SidebarProvider { default_open: false,
            Sidebar {
                SidebarHeader {
                    div { class: "portal-brand",
                        div { class: "portal-brand-mark", "D" }
                        div {
                            div { class: "portal-brand-name", "{portal.branding.name}" }
                            div { class: "portal-brand-subtitle", "{portal.branding.subtitle}" }
                        }
                    }
                }

                SidebarContent {
                    SidebarGroup {
                        SidebarGroupLabel { "Navigation" }
                        SidebarMenu {
                            for entry in entries.iter() {
                                NavItem {
                                    key: "{entry.route_path}",
                                    entry: *entry,
                                    active: entry.is_active(&current_path),
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    p { class: "portal-footer-text", "{portal.branding.footer}" }
                }
            }

            SidebarInset {
                header { class: "portal-header",
                    SidebarTrigger {
                        span { class: "portal-trigger-icon", "\u{2630}" }
                    }
                    h2 { class: "portal-header-title", "{title}" }
                    div { class: "portal-header-spacer" }

                    if portal.features.notifications {
                        button {
                            class: "button portal-bell",
                            "data-style": "ghost",
                            r#type: "button",
                            "aria-label": "Notifications",
                            BellIcon {}
                        }
                    }

                    div { class: "portal-user",
                        span { class: "portal-user-name", "{user_label}" }
                        span { class: "portal-role-caption", "{role_caption}" }
                    }

                    if session.is_signed_in() {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                session.sign_out();
                                navigator().push(Route::Login {});
                            },
                            "Sign Out"
                        }
                    } else {
                        Button {
                            variant: ButtonVariant::Outline,
                            onclick: move |_| {
                                navigator().push(Route::Login {});
                            },
                            "Sign In"
                        }
                    }
                }

                main { class: "portal-page",
                    Outlet::<Route> {}
                }
            }
        }
    }
}

/// One sidebar row linking to its entry's page.
#[component]
fn NavItem(entry: NavigationEntry, active: bool) -> Element {
    rsx! {
        SidebarMenuItem {
            Link {
                class: "portal-nav-link",
                to: Route::from_path(entry.route_path),
                SidebarMenuButton { active,
                    NavIcon { icon: entry.icon }
                    span { "{entry.label}" }
                }
            }
        }
    }
}

// Pages with no content of their own yet

#[component]
fn Documents() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Documents",
            description: "Certificates, licences and inspection reports filed with the directorate.",
        }
    }
}

#[component]
fn Rules() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Rules & Alerts",
            description: "Compliance rules and the alerts raised against them.",
        }
    }
}

#[component]
fn Communications() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Communications",
            description: "Notices and correspondence between the directorate and industry.",
        }
    }
}

#[component]
fn Reports() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Reports",
            description: "Inspection reports prepared and submitted for review.",
        }
    }
}

#[component]
fn InspectionStatus() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Inspection Status",
            description: "Progress of inspections scheduled for your facilities.",
        }
    }
}

#[component]
fn AssignedInspections() -> Element {
    rsx! {
        PlaceholderPage {
            title: "Assigned Inspections",
            description: "Inspections assigned to you as a competent person.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use shared_types::{quick_actions, resolve, Role, SIGN_IN_ROLES};

    fn all_roles() -> impl Iterator<Item = Role> {
        SIGN_IN_ROLES.iter().copied().chain([Role::Guest])
    }

    #[test]
    fn every_navigation_entry_has_a_page() {
        for role in all_roles() {
            for entry in resolve(role) {
                let route = Route::from_path(entry.route_path);
                assert!(
                    !matches!(route, Route::NotFound { .. }),
                    "{} has no page for {}",
                    role,
                    entry.route_path
                );
                assert_eq!(route.to_string(), entry.route_path);
            }
        }
    }

    #[test]
    fn every_quick_action_has_a_page() {
        for action in quick_actions() {
            let route = Route::from_path(action.route_path);
            assert!(!matches!(route, Route::NotFound { .. }), "{}", action.route_path);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        let route = Route::from_path("/inspections/INS-001");
        assert_eq!(
            route,
            Route::NotFound {
                route: vec!["inspections".to_string(), "INS-001".to_string()]
            }
        );
    }
}
