use dioxus::prelude::*;
use shared_types::{
    quick_actions, sample_compliance_alerts, sample_inspections, sample_kpis, Inspection, Kpi,
};
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardDescription, CardHeader, CardTitle};

use crate::format_helpers::format_date_human;
use crate::icons::NavIcon;
use crate::routes::status_badges::{InspectionStatusBadge, PriorityBadge};
use crate::routes::Route;

/// Landing page inside the portal: KPIs, recent inspections, quick actions
/// and open compliance alerts.
#[component]
pub fn Dashboard() -> Element {
    let inspections = sample_inspections();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            section { class: "dashboard-welcome",
                h1 { "Welcome to DISH Portal Dashboard" }
                p { "Monitor industrial safety compliance, manage inspections, and track regulatory activities." }
            }

            div { class: "kpi-grid",
                for kpi in sample_kpis() {
                    KpiCard { key: "{kpi.title}", kpi: kpi.clone() }
                }
            }

            div { class: "dashboard-grid",
                Card { class: "dashboard-recent",
                    CardHeader {
                        CardTitle { "Recent Inspections" }
                        CardDescription { "Latest inspection activities and status updates" }
                    }
                    CardContent {
                        for inspection in inspections {
                            RecentInspectionRow { key: "{inspection.id}", inspection: inspection.clone() }
                        }
                    }
                }

                div { class: "dashboard-side",
                    Card {
                        CardHeader {
                            CardTitle { "Quick Actions" }
                            CardDescription { "Frequently used functions" }
                        }
                        CardContent { class: "quick-actions",
                            for action in quick_actions() {
                                Button {
                                    key: "{action.route_path}",
                                    variant: ButtonVariant::Outline,
                                    onclick: move |_| {
                                        navigator().push(Route::from_path(action.route_path));
                                    },
                                    NavIcon { icon: action.icon, size: 16 }
                                    span { "{action.label}" }
                                }
                            }
                        }
                    }

                    Card {
                        CardHeader {
                            CardTitle { "Compliance Alerts" }
                            CardDescription { "Critical items requiring attention" }
                        }
                        CardContent { class: "compliance-alerts",
                            for alert in sample_compliance_alerts() {
                                div {
                                    key: "{alert.title}",
                                    class: "compliance-alert",
                                    "data-tone": alert.tone.as_str(),
                                    p { class: "compliance-alert-title", "{alert.title}" }
                                    p { class: "compliance-alert-detail", "{alert.detail}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn KpiCard(kpi: Kpi) -> Element {
    let arrow = kpi.trend.arrow();

    rsx! {
        div { class: "kpi-card", "data-tone": kpi.tone.as_str(),
            Card {
                CardContent {
                    div { class: "kpi-head",
                        span { class: "kpi-title", "{kpi.title}" }
                        span { class: "kpi-icon", NavIcon { icon: kpi.icon, size: 18 } }
                    }
                    div { class: "kpi-value", "{kpi.value}" }
                    div { class: "kpi-foot",
                        span { class: "kpi-trend", "{arrow} {kpi.trend_value}" }
                        span { "{kpi.description}" }
                    }
                }
            }
        }
    }
}

#[component]
fn RecentInspectionRow(inspection: Inspection) -> Element {
    let date = format_date_human(&inspection.scheduled_date);

    rsx! {
        div { class: "recent-inspection",
            div { class: "recent-inspection-badges",
                span { class: "recent-inspection-id", "{inspection.id}" }
                InspectionStatusBadge { status: inspection.status }
                PriorityBadge { priority: inspection.priority }
            }
            h4 { "{inspection.facility}" }
            p { class: "muted", "{inspection.form}" }
            p { class: "muted small", "Inspector: {inspection.inspector} \u{b7} {date}" }
        }
    }
}
