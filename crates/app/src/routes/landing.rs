use dioxus::prelude::*;
use shared_types::{IconRef, PortalConfig};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::icons::NavIcon;
use crate::routes::Route;

const STAKEHOLDERS: &[(&str, &str)] = &[
    ("Industry", "Manage registrations and track compliance status"),
    ("Inspector", "Conduct inspections and submit reports digitally"),
    ("Competent Person", "Review assigned inspections and manage certifications"),
    ("DISH Admin", "Oversee all operations and analytics"),
];

const FEATURES: &[(IconRef, &str, &str)] = &[
    (
        IconRef::Users,
        "Registration Management",
        "Streamlined application process for competent persons, inspectors, and industry licenses.",
    ),
    (
        IconRef::ClipboardCheck,
        "Inspection Scheduling",
        "Inspection management with 11 standardized forms and workflow tracking.",
    ),
    (
        IconRef::BarChart,
        "Analytics & Reporting",
        "Compliance heatmaps, regional performance and trend analysis.",
    ),
    (
        IconRef::MessageSquare,
        "Communications Hub",
        "Notifications by email, SMS and in-app messaging.",
    ),
    (
        IconRef::FileText,
        "Document Workflow",
        "Digital document management with approval tracking.",
    ),
    (
        IconRef::Shield,
        "Security & Compliance",
        "Role-based access for every stakeholder.",
    ),
];

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    let portal: PortalConfig = use_context();
    let to_login = move |_: MouseEvent| {
        navigator().push(Route::Login {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        div { class: "landing",
            header { class: "landing-header",
                div { class: "portal-brand",
                    NavIcon { icon: IconRef::Shield, size: 24 }
                    div {
                        div { class: "portal-brand-name", "{portal.branding.name}" }
                        div { class: "portal-brand-subtitle", "{portal.branding.subtitle}" }
                    }
                }
                Button { onclick: to_login, "Sign In" }
            }

            section { class: "landing-hero",
                span { class: "landing-kicker", "Government of India Initiative" }
                h1 { "DISH Registration & Inspection Management" }
                p {
                    "A digital platform for industrial safety compliance: registration, "
                    "inspection scheduling and regulatory oversight."
                }
                div { class: "landing-cta",
                    Button { onclick: to_login, "Access Portal" }
                    Button {
                        variant: ButtonVariant::Outline,
                        onclick: move |_| {
                            navigator().push(Route::Dashboard {});
                        },
                        "View Demo"
                    }
                }
            }

            section { class: "landing-section",
                h2 { "Portal Access for All Stakeholders" }
                div { class: "landing-grid landing-grid-4",
                    for (name, description) in STAKEHOLDERS.iter() {
                        Card { key: "{name}",
                            CardHeader { CardTitle { "{name}" } }
                            CardContent { CardDescription { "{description}" } }
                        }
                    }
                }
            }

            section { class: "landing-section",
                h2 { "Safety Management in One Place" }
                div { class: "landing-grid landing-grid-3",
                    for (icon, title, description) in FEATURES.iter() {
                        Card { key: "{title}",
                            CardHeader {
                                span { class: "landing-feature-icon", NavIcon { icon: *icon, size: 22 } }
                                CardTitle { "{title}" }
                            }
                            CardContent { CardDescription { "{description}" } }
                        }
                    }
                }
            }

            footer { class: "landing-footer",
                span { "{portal.branding.name}" }
                span { "{portal.branding.footer}" }
            }
        }
    }
}
