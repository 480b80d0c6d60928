use dioxus::prelude::*;
use shared_types::{
    sample_facility_alerts, sample_region_stats, sample_summary_metrics, ExportKind,
    FacilityAlert, IconRef, PortalConfig, RegionStats, ReportPeriod, SummaryMetric, EXPORT_KINDS,
    REPORT_PERIODS,
};
use shared_ui::{
    toast_message, use_toast, Badge, Button, ButtonVariant, Card, CardContent, CardDescription,
    CardHeader, CardTitle, FormSelect, PageDescription, PageHeader, PageTitle, PercentBar,
    ToastOptions,
};

use crate::icons::NavIcon;
use crate::routes::status_badges::{compliance_variant, severity_variant};

/// Regional performance and compliance overview over the sample figures.
#[component]
pub fn Analytics() -> Element {
    let portal: PortalConfig = use_context();
    let toast = use_toast();
    let mut period = use_signal(ReportPeriod::default);

    let request_export = move |kind: ExportKind| {
        let summary = kind.request_summary(period());
        tracing::info!(export = ?kind, period = period().as_str(), "analytics export requested");
        toast.info(toast_message("Export Requested", &summary), ToastOptions::new());
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./analytics.css") }

        PageHeader {
            div { class: "analytics-heading",
                PageTitle { "BI & Analytics Dashboard" }
                PageDescription {
                    "Insights into inspection performance, compliance trends and regional statistics."
                }
            }
            div { class: "analytics-actions",
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| request_export(ExportKind::SummaryReport),
                    NavIcon { icon: IconRef::Download, size: 16 }
                    span { "Export" }
                }
            }
        }

        div { class: "metric-grid",
            for metric in sample_summary_metrics() {
                MetricCard { key: "{metric.label}", metric: metric.clone() }
            }
        }

        div { class: "analytics-grid",
            Card { class: "region-card",
                CardHeader { class: "region-card-header",
                    div {
                        CardTitle { "Region-wise Performance" }
                        CardDescription {
                            "Inspection statistics and compliance rates by region, "
                            {period().label()}
                        }
                    }
                    FormSelect {
                        class: "period-select",
                        value: period().as_str(),
                        on_change: move |e: FormEvent| {
                            if let Some(p) = ReportPeriod::parse(&e.value()) {
                                period.set(p);
                            }
                        },
                        for p in REPORT_PERIODS.iter().copied() {
                            option { key: "{p:?}", value: p.as_str(), {p.label()} }
                        }
                    }
                }
                CardContent {
                    for region in sample_region_stats() {
                        RegionRow { key: "{region.region}", region: region.clone() }
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Compliance Alerts" }
                    CardDescription { "Critical compliance issues requiring attention" }
                }
                CardContent {
                    for alert in sample_facility_alerts() {
                        FacilityAlertRow { key: "{alert.facility}", alert: alert.clone() }
                    }
                }
            }
        }

        if portal.features.analytics_charts {
            div { class: "analytics-grid analytics-charts",
                ChartPlaceholder {
                    icon: IconRef::TrendingUp,
                    title: "Monthly Trends",
                    description: "Inspection volume and compliance trends over time",
                }
                ChartPlaceholder {
                    icon: IconRef::BarChart,
                    title: "Compliance Heatmap",
                    description: "Geographic distribution of compliance rates",
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "Export Options" }
                CardDescription { "Download reports and analytics data" }
            }
            CardContent { class: "export-options",
                for kind in EXPORT_KINDS.iter().copied() {
                    Button {
                        key: "{kind:?}",
                        variant: ButtonVariant::Outline,
                        onclick: move |_| request_export(kind),
                        NavIcon { icon: IconRef::Download, size: 16 }
                        span { {kind.label()} }
                    }
                }
            }
        }
    }
}

#[component]
fn MetricCard(metric: SummaryMetric) -> Element {
    let arrow = metric.trend.arrow();
    let tone = if metric.favorable { "good" } else { "bad" };

    rsx! {
        Card {
            CardContent {
                div { class: "metric-head",
                    div {
                        p { class: "metric-label", "{metric.label}" }
                        p { class: "metric-value", "{metric.value}" }
                    }
                    NavIcon { icon: metric.icon, size: 28 }
                }
                p { class: "metric-change", "data-tone": tone,
                    "{arrow} {metric.change}"
                }
            }
        }
    }
}

#[component]
fn RegionRow(region: RegionStats) -> Element {
    let completed = region.completed_percent().round() as u8;
    let pending = region.pending_percent().round() as u8;
    let band = region.band();

    rsx! {
        div { class: "region-row",
            div { class: "region-row-head",
                h4 { "{region.region}" }
                span { class: "muted small", "{region.total} total" }
                Badge { variant: compliance_variant(band), "{region.compliance}%" }
            }
            div { class: "region-row-bars",
                div { class: "region-bar-completed",
                    PercentBar { label: "Completed", percent: completed }
                }
                div { class: "region-bar-pending",
                    PercentBar { label: "Pending", percent: pending }
                }
            }
            div { class: "region-row-foot muted small",
                span { "{region.completed} completed" }
                span { "{region.pending} pending" }
            }
        }
    }
}

#[component]
fn FacilityAlertRow(alert: FacilityAlert) -> Element {
    rsx! {
        div { class: "facility-alert",
            div { class: "facility-alert-head",
                h5 { "{alert.facility}" }
                Badge { variant: severity_variant(alert.severity), {alert.severity.label()} }
            }
            p { class: "muted", "{alert.issue}" }
            div { class: "facility-alert-foot small",
                span { class: "muted", "{alert.location}" }
                span { class: "facility-alert-overdue", "{alert.days_overdue} days overdue" }
            }
        }
    }
}

#[component]
fn ChartPlaceholder(icon: IconRef, title: String, description: String) -> Element {
    rsx! {
        Card {
            CardHeader {
                CardTitle { "{title}" }
                CardDescription { "{description}" }
            }
            CardContent {
                div { class: "chart-placeholder",
                    NavIcon { icon, size: 40 }
                    p { "Chart placeholder" }
                }
            }
        }
    }
}
