use dioxus::prelude::*;
use shared_types::{ApplicationStatus, ComplianceBand, InspectionStatus, Priority, Severity};
use shared_ui::{Badge, BadgeVariant};

pub fn inspection_status_variant(status: InspectionStatus) -> BadgeVariant {
    match status {
        InspectionStatus::Completed => BadgeVariant::Success,
        InspectionStatus::InProgress => BadgeVariant::Warning,
        InspectionStatus::Scheduled => BadgeVariant::Info,
    }
}

pub fn priority_variant(priority: Priority) -> BadgeVariant {
    match priority {
        Priority::Urgent | Priority::High => BadgeVariant::Destructive,
        Priority::Medium => BadgeVariant::Warning,
        Priority::Low => BadgeVariant::Outline,
    }
}

pub fn application_status_variant(status: ApplicationStatus) -> BadgeVariant {
    match status {
        ApplicationStatus::Approved => BadgeVariant::Success,
        ApplicationStatus::UnderReview => BadgeVariant::Warning,
        ApplicationStatus::Pending => BadgeVariant::Info,
    }
}

pub fn severity_variant(severity: Severity) -> BadgeVariant {
    match severity {
        Severity::High => BadgeVariant::Destructive,
        Severity::Medium => BadgeVariant::Warning,
        Severity::Low => BadgeVariant::Outline,
    }
}

pub fn compliance_variant(band: ComplianceBand) -> BadgeVariant {
    match band {
        ComplianceBand::Good => BadgeVariant::Success,
        ComplianceBand::Warning => BadgeVariant::Warning,
        ComplianceBand::Critical => BadgeVariant::Destructive,
    }
}

#[component]
pub fn InspectionStatusBadge(status: InspectionStatus) -> Element {
    rsx! {
        Badge { variant: inspection_status_variant(status), {status.label()} }
    }
}

#[component]
pub fn PriorityBadge(priority: Priority) -> Element {
    rsx! {
        Badge { variant: priority_variant(priority), {priority.label()} }
    }
}

#[component]
pub fn ApplicationStatusBadge(status: ApplicationStatus) -> Element {
    rsx! {
        Badge { variant: application_status_variant(status), {status.label()} }
    }
}
