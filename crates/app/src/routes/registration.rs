use std::collections::HashMap;

use dioxus::prelude::*;
use shared_types::{
    approved_applications, pending_applications, sample_applications, ApplicationPriority,
    ApplicationType, IconRef, RegistrationApplication, RegistrationApplicationRequest,
    APPLICATION_PRIORITIES, APPLICATION_TYPES,
};
use shared_ui::{
    toast_message, use_toast, Button, Card, CardContent, CardDescription, CardHeader, CardTitle,
    FieldError, FormSelect, Input, Label, PageDescription, PageHeader, PageTitle, TabContent,
    TabList, TabTrigger, Tabs, TextArea, ToastOptions,
};

use crate::format_helpers::{format_date_human, format_optional_date};
use crate::icons::NavIcon;
use crate::routes::status_badges::ApplicationStatusBadge;

/// Blank or a whole number of years. Anything else is reported against
/// the experience field.
fn parse_experience(raw: &str) -> Result<Option<u32>, String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    raw.parse::<u32>()
        .map(Some)
        .map_err(|_| "Experience must be a whole number of years".to_string())
}

#[component]
pub fn Registration() -> Element {
    let applications = sample_applications();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./registration.css") }

        PageHeader {
            PageTitle { "Registration Management" }
            PageDescription {
                "Manage registration applications for competent persons, inspectors, and industry licenses."
            }
        }

        Tabs { default_value: "new-application", horizontal: true,
            TabList {
                TabTrigger { value: "new-application", index: 0usize, "New Application" }
                TabTrigger { value: "pending-applications", index: 1usize, "Pending Applications" }
                TabTrigger { value: "approved-applications", index: 2usize, "Approved Applications" }
            }

            TabContent { value: "new-application", index: 0usize,
                NewApplicationForm {}
            }

            TabContent { value: "pending-applications", index: 1usize,
                Card {
                    CardHeader {
                        CardTitle { "Pending Applications" }
                        CardDescription { "Applications awaiting review and approval" }
                    }
                    CardContent {
                        for application in pending_applications(&applications) {
                            ApplicationRow {
                                key: "{application.id}",
                                application: application.clone(),
                                date_label: "Submitted",
                                date: format_date_human(&application.submitted_date),
                            }
                        }
                    }
                }
            }

            TabContent { value: "approved-applications", index: 2usize,
                Card {
                    CardHeader {
                        CardTitle { "Approved Applications" }
                        CardDescription { "Successfully approved registrations" }
                    }
                    CardContent {
                        for application in approved_applications(&applications) {
                            ApplicationRow {
                                key: "{application.id}",
                                application: application.clone(),
                                date_label: "Approved",
                                date: format_optional_date(application.review_date.as_deref()),
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationRow(application: RegistrationApplication, date_label: String, date: String) -> Element {
    rsx! {
        div { class: "application-row",
            div { class: "application-row-head",
                span { class: "application-id", "{application.id}" }
                ApplicationStatusBadge { status: application.status }
            }
            h4 { "{application.applicant_name}" }
            p { class: "muted", "{application.company}" }
            p { class: "muted", {application.application_type.label()} }
            p { class: "muted small", "{date_label}: {date}" }
        }
    }
}

#[component]
fn NewApplicationForm() -> Element {
    let toast = use_toast();

    let mut application_type = use_signal(String::new);
    let mut priority = use_signal(String::new);
    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut aadhaar = use_signal(String::new);
    let mut qualification = use_signal(String::new);
    let mut experience = use_signal(String::new);
    let mut specialization = use_signal(String::new);
    let mut field_errors = use_signal(HashMap::<String, String>::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();

        let experience_years = parse_experience(&experience.read());
        let request = RegistrationApplicationRequest {
            application_type: ApplicationType::parse(&application_type.read()),
            priority: ApplicationPriority::parse(&priority.read()),
            full_name: full_name.read().trim().to_string(),
            email: email.read().trim().to_string(),
            phone: phone.read().trim().to_string(),
            aadhaar: aadhaar.read().trim().to_string(),
            qualification: qualification.read().trim().to_string(),
            experience_years: experience_years.clone().ok().flatten(),
            specialization: specialization.read().trim().to_string(),
        };

        let mut errors = request
            .check()
            .err()
            .map(|err| err.field_errors)
            .unwrap_or_default();
        if let Err(msg) = experience_years {
            errors.insert("experience_years".to_string(), msg);
        }

        if errors.is_empty() {
            tracing::info!(
                application_type = ?request.application_type,
                priority = ?request.priority,
                "registration application submitted"
            );
            toast.success(
                toast_message(
                    "Application Submitted",
                    "your registration application has been submitted successfully.",
                ),
                ToastOptions::new(),
            );
            field_errors.set(HashMap::new());
        } else {
            toast.error(toast_message("Error", "Please fill in all fields"), ToastOptions::new());
            field_errors.set(errors);
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Card {
            CardHeader {
                CardTitle {
                    NavIcon { icon: IconRef::Users, size: 18 }
                    " New Registration Application"
                }
                CardDescription {
                    "Submit a new registration for competent person, inspector, or industry license."
                }
            }
            CardContent {
                form { class: "portal-form", onsubmit: handle_submit,
                    div { class: "form-grid",
                        div { class: "form-field",
                            Label { html_for: "application_type", "Application Type" }
                            FormSelect {
                                id: "application_type",
                                value: application_type(),
                                placeholder: "Select application type",
                                on_change: move |e: FormEvent| application_type.set(e.value()),
                                for kind in APPLICATION_TYPES.iter().copied() {
                                    option { key: "{kind:?}", value: kind.as_str(), {kind.label()} }
                                }
                            }
                            FieldError { message: error_for("application_type") }
                        }
                        div { class: "form-field",
                            Label { html_for: "priority", "Priority Level" }
                            FormSelect {
                                id: "priority",
                                value: priority(),
                                placeholder: "Select priority",
                                on_change: move |e: FormEvent| priority.set(e.value()),
                                for level in APPLICATION_PRIORITIES.iter().copied() {
                                    option { key: "{level:?}", value: level.as_str(), {level.label()} }
                                }
                            }
                            FieldError { message: error_for("priority") }
                        }
                    }

                    h3 { class: "form-section-title", "Personal Details" }
                    div { class: "form-grid",
                        div { class: "form-field",
                            Label { html_for: "full_name", "Full Name" }
                            Input {
                                id: "full_name",
                                placeholder: "Enter full name",
                                value: full_name(),
                                on_input: move |e: FormEvent| full_name.set(e.value()),
                            }
                            FieldError { message: error_for("full_name") }
                        }
                        div { class: "form-field",
                            Label { html_for: "reg_email", "Email Address" }
                            Input {
                                id: "reg_email",
                                input_type: "email",
                                placeholder: "Enter email address",
                                value: email(),
                                on_input: move |e: FormEvent| email.set(e.value()),
                            }
                            FieldError { message: error_for("email") }
                        }
                        div { class: "form-field",
                            Label { html_for: "phone", "Phone Number" }
                            Input {
                                id: "phone",
                                placeholder: "Enter phone number",
                                value: phone(),
                                on_input: move |e: FormEvent| phone.set(e.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { html_for: "aadhaar", "Aadhaar Number" }
                            Input {
                                id: "aadhaar",
                                placeholder: "Enter Aadhaar number",
                                value: aadhaar(),
                                on_input: move |e: FormEvent| aadhaar.set(e.value()),
                            }
                            FieldError { message: error_for("aadhaar") }
                        }
                    }

                    h3 { class: "form-section-title", "Professional Details" }
                    div { class: "form-grid",
                        div { class: "form-field",
                            Label { html_for: "qualification", "Highest Qualification" }
                            Input {
                                id: "qualification",
                                placeholder: "Enter qualification",
                                value: qualification(),
                                on_input: move |e: FormEvent| qualification.set(e.value()),
                            }
                        }
                        div { class: "form-field",
                            Label { html_for: "experience", "Years of Experience" }
                            Input {
                                id: "experience",
                                input_type: "number",
                                placeholder: "Enter years of experience",
                                value: experience(),
                                on_input: move |e: FormEvent| experience.set(e.value()),
                            }
                            FieldError { message: error_for("experience_years") }
                        }
                    }
                    div { class: "form-field",
                        Label { html_for: "specialization", "Area of Specialization" }
                        TextArea {
                            id: "specialization",
                            placeholder: "Describe your area of specialization",
                            value: specialization(),
                            on_input: move |e: FormEvent| specialization.set(e.value()),
                        }
                    }

                    div { class: "form-actions",
                        Button { button_type: "submit", "Submit Application" }
                    }
                }
            }
        }
    }
}
