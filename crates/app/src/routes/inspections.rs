use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{
    active_inspections, completed_inspections, sample_inspections, IconRef, Inspection,
    InspectionType, Priority, ScheduleInspectionRequest, FACILITIES, INSPECTION_FORMS,
    INSPECTION_TYPES, INSPECTORS, PRIORITIES,
};
use shared_ui::{
    toast_message, use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, FormSelect, Input, Label, PageDescription, PageHeader, PageTitle, TabContent,
    TabList, TabTrigger, Tabs, ToastOptions,
};

use crate::format_helpers::format_date_human;
use crate::icons::NavIcon;
use crate::routes::status_badges::{InspectionStatusBadge, PriorityBadge};

#[component]
pub fn Inspections() -> Element {
    let inspections = sample_inspections();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./inspections.css") }

        PageHeader {
            PageTitle { "Inspection Management" }
            PageDescription {
                "Schedule, manage, and track industrial safety inspections across all facilities."
            }
        }

        Tabs { default_value: "schedule", horizontal: true,
            TabList {
                TabTrigger { value: "schedule", index: 0usize, "Schedule Inspection" }
                TabTrigger { value: "active", index: 1usize, "Active Inspections" }
                TabTrigger { value: "completed", index: 2usize, "Completed" }
            }

            TabContent { value: "schedule", index: 0usize,
                ScheduleInspectionForm {}
            }

            TabContent { value: "active", index: 1usize,
                Card {
                    CardHeader {
                        CardTitle { "Active Inspections" }
                        CardDescription { "Currently scheduled and in-progress inspections" }
                    }
                    CardContent {
                        for inspection in active_inspections(&inspections) {
                            InspectionRow {
                                key: "{inspection.id}",
                                inspection: inspection.clone(),
                                show_priority: true,
                            }
                        }
                    }
                }
            }

            TabContent { value: "completed", index: 2usize,
                Card {
                    CardHeader {
                        CardTitle { "Completed Inspections" }
                        CardDescription { "Successfully completed inspection records" }
                    }
                    CardContent {
                        for inspection in completed_inspections(&inspections) {
                            InspectionRow {
                                key: "{inspection.id}",
                                inspection: inspection.clone(),
                                show_priority: false,
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn InspectionRow(inspection: Inspection, show_priority: bool) -> Element {
    let date = format_date_human(&inspection.scheduled_date);

    rsx! {
        div { class: "inspection-row",
            div { class: "inspection-row-head",
                span { class: "inspection-id", "{inspection.id}" }
                InspectionStatusBadge { status: inspection.status }
                if show_priority {
                    PriorityBadge { priority: inspection.priority }
                }
            }
            h4 { "{inspection.facility}" }
            div { class: "inspection-meta",
                span { "{inspection.location}" }
                span { "{inspection.inspector}" }
                span { "{date}" }
            }
            p { class: "muted small", "{inspection.form} \u{b7} " {inspection.inspection_type.label()} }
        }
    }
}

#[component]
fn ScheduleInspectionForm() -> Element {
    let toast = use_toast();

    let mut facility = use_signal(String::new);
    let mut inspector = use_signal(String::new);
    let mut form = use_signal(String::new);
    let mut priority = use_signal(String::new);
    let mut date = use_signal(String::new);
    let mut inspection_type = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_schedule = move |evt: FormEvent| {
        evt.prevent_default();

        let request = ScheduleInspectionRequest {
            facility: facility(),
            inspector: inspector(),
            form: form(),
            priority: Priority::parse(&priority.read()),
            date: date(),
            inspection_type: InspectionType::parse(&inspection_type.read()),
        };

        match request.check() {
            Ok(()) => {
                tracing::info!(
                    facility = %request.facility,
                    form = %request.form,
                    date = %request.date,
                    "inspection schedule submitted"
                );
                toast.success(
                    toast_message(
                        "Inspection Scheduled",
                        "the inspection has been scheduled successfully.",
                    ),
                    ToastOptions::new(),
                );
                field_errors.set(HashMap::new());
            }
            Err(err) => {
                toast.error(toast_message("Error", &err.friendly_message()), ToastOptions::new());
                field_errors.set(err.field_errors);
            }
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    NavIcon { icon: IconRef::ClipboardCheck, size: 18 }
                    " Schedule New Inspection"
                }
                CardDescription {
                    "Create a new inspection schedule with assigned inspector and inspection form."
                }
            }
            CardContent {
                form { class: "portal-form", onsubmit: handle_schedule,
                    div { class: "form-grid",
                        div { class: "form-field",
                            Label { html_for: "facility", "Company/Facility" }
                            FormSelect {
                                id: "facility",
                                value: facility(),
                                placeholder: "Select company",
                                on_change: move |e: FormEvent| facility.set(e.value()),
                                for (value, label) in FACILITIES.iter().copied() {
                                    option { key: "{value}", value: value, "{label}" }
                                }
                            }
                            FieldError { message: error_for("facility") }
                        }
                        div { class: "form-field",
                            Label { html_for: "inspector", "Assigned Inspector" }
                            FormSelect {
                                id: "inspector",
                                value: inspector(),
                                placeholder: "Select inspector",
                                on_change: move |e: FormEvent| inspector.set(e.value()),
                                for (value, label) in INSPECTORS.iter().copied() {
                                    option { key: "{value}", value: value, "{label}" }
                                }
                            }
                            FieldError { message: error_for("inspector") }
                        }
                        div { class: "form-field",
                            Label { html_for: "inspection_form", "Inspection Form" }
                            FormSelect {
                                id: "inspection_form",
                                value: form(),
                                placeholder: "Select inspection form",
                                on_change: move |e: FormEvent| form.set(e.value()),
                                for name in INSPECTION_FORMS.iter().copied() {
                                    option { key: "{name}", value: name, "{name}" }
                                }
                            }
                            FieldError { message: error_for("form") }
                        }
                        div { class: "form-field",
                            Label { html_for: "inspection_priority", "Priority Level" }
                            FormSelect {
                                id: "inspection_priority",
                                value: priority(),
                                placeholder: "Select priority",
                                on_change: move |e: FormEvent| priority.set(e.value()),
                                for level in PRIORITIES.iter().copied() {
                                    option { key: "{level:?}", value: level.as_str(), {level.label()} }
                                }
                            }
                            FieldError { message: error_for("priority") }
                        }
                        div { class: "form-field",
                            Label { html_for: "inspection_date", "Inspection Date" }
                            Input {
                                id: "inspection_date",
                                input_type: "date",
                                value: date(),
                                on_input: move |e: FormEvent| date.set(e.value()),
                            }
                            FieldError { message: error_for("date") }
                        }
                        div { class: "form-field",
                            Label { html_for: "inspection_type", "Inspection Type" }
                            FormSelect {
                                id: "inspection_type",
                                value: inspection_type(),
                                placeholder: "Select inspection type",
                                on_change: move |e: FormEvent| inspection_type.set(e.value()),
                                for kind in INSPECTION_TYPES.iter().copied() {
                                    option { key: "{kind:?}", value: kind.as_str(), {kind.label()} }
                                }
                            }
                            FieldError { message: error_for("inspection_type") }
                        }
                    }

                    div { class: "form-actions",
                        Button { button_type: "submit", "Schedule Inspection" }
                    }
                }
            }
        }
    }
}
