use serde::{Deserialize, Serialize};

// ── Reference lists ─────────────────────────────────────────────────

/// The standardized inspection forms an inspection can be filed under.
pub const INSPECTION_FORMS: &[&str] = &[
    "Form 9 - Factory Inspection",
    "Form 15 - Pressure Vessel Inspection",
    "Form 23 - Lifting Machine Inspection",
    "Form 25 - Steam Boiler Inspection",
    "Form 27 - Air Receiver Inspection",
    "Form 30 - Hazardous Process Inspection",
    "Form 35 - Safety Audit",
    "Form 40 - Environmental Impact",
    "Form 45 - Fire Safety Inspection",
    "Form 50 - Chemical Storage Inspection",
    "Form 55 - Emergency Response Audit",
];

/// Facilities offered on the scheduling form as `(value, label)`.
pub const FACILITIES: &[(&str, &str)] = &[
    ("abc-manufacturing", "ABC Manufacturing Ltd."),
    ("xyz-chemical", "XYZ Chemical Works"),
    ("def-steel", "DEF Steel Plant"),
    ("ghi-textiles", "GHI Textiles Pvt Ltd"),
];

/// Inspectors offered on the scheduling form as `(value, label)`.
pub const INSPECTORS: &[(&str, &str)] = &[
    ("dr-sharma", "Dr. R. Sharma"),
    ("er-patel", "Er. M. Patel"),
    ("dr-kumar", "Dr. S. Kumar"),
    ("er-singh", "Er. A. Singh"),
];

/// Check whether a string names one of the standard inspection forms.
pub fn is_inspection_form(s: &str) -> bool {
    INSPECTION_FORMS.contains(&s)
}

/// Check whether a value is a known facility key.
pub fn is_known_facility(s: &str) -> bool {
    FACILITIES.iter().any(|(value, _)| *value == s)
}

/// Check whether a value is a known inspector key.
pub fn is_known_inspector(s: &str) -> bool {
    INSPECTORS.iter().any(|(value, _)| *value == s)
}

// ── Enums ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum InspectionStatus {
    Scheduled,
    InProgress,
    Completed,
}

impl InspectionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InspectionStatus::Scheduled => "Scheduled",
            InspectionStatus::InProgress => "In Progress",
            InspectionStatus::Completed => "Completed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Urgent,
}

pub const PRIORITIES: &[Priority] = &[Priority::Low, Priority::Medium, Priority::High, Priority::Urgent];

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Urgent => "urgent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Urgent => "Urgent",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        PRIORITIES.iter().copied().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InspectionType {
    Routine,
    Compliance,
    Incident,
    #[serde(rename = "followup")]
    FollowUp,
}

pub const INSPECTION_TYPES: &[InspectionType] = &[
    InspectionType::Routine,
    InspectionType::Compliance,
    InspectionType::Incident,
    InspectionType::FollowUp,
];

impl InspectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            InspectionType::Routine => "routine",
            InspectionType::Compliance => "compliance",
            InspectionType::Incident => "incident",
            InspectionType::FollowUp => "followup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InspectionType::Routine => "Routine Inspection",
            InspectionType::Compliance => "Compliance Check",
            InspectionType::Incident => "Incident Investigation",
            InspectionType::FollowUp => "Follow-up Inspection",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        INSPECTION_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

// ── Records ─────────────────────────────────────────────────────────

/// An inspection as listed on the dashboard and inspections pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inspection {
    pub id: String,
    pub facility: String,
    pub location: String,
    pub inspector: String,
    pub form: String,
    /// ISO date (`YYYY-MM-DD`).
    pub scheduled_date: String,
    pub status: InspectionStatus,
    pub priority: Priority,
    pub inspection_type: InspectionType,
}

impl Inspection {
    pub fn is_active(&self) -> bool {
        self.status != InspectionStatus::Completed
    }
}

#[allow(clippy::too_many_arguments)]
fn inspection(
    id: &str,
    facility: &str,
    location: &str,
    inspector: &str,
    form: &str,
    scheduled_date: &str,
    status: InspectionStatus,
    priority: Priority,
    inspection_type: InspectionType,
) -> Inspection {
    Inspection {
        id: id.into(),
        facility: facility.into(),
        location: location.into(),
        inspector: inspector.into(),
        form: form.into(),
        scheduled_date: scheduled_date.into(),
        status,
        priority,
        inspection_type,
    }
}

/// Sample inspections backing the inspections page.
pub fn sample_inspections() -> Vec<Inspection> {
    vec![
        inspection(
            "INS-001",
            "ABC Manufacturing Ltd.",
            "Mumbai, Maharashtra",
            "Dr. R. Sharma",
            "Form 9 - Factory Inspection",
            "2024-01-25",
            InspectionStatus::Scheduled,
            Priority::High,
            InspectionType::Routine,
        ),
        inspection(
            "INS-002",
            "XYZ Chemical Works",
            "Pune, Maharashtra",
            "Er. M. Patel",
            "Form 27 - Air Receiver Inspection",
            "2024-01-26",
            InspectionStatus::InProgress,
            Priority::Medium,
            InspectionType::Compliance,
        ),
        inspection(
            "INS-003",
            "DEF Steel Plant",
            "Chennai, Tamil Nadu",
            "Dr. S. Kumar",
            "Form 15 - Pressure Vessel Inspection",
            "2024-01-28",
            InspectionStatus::Completed,
            Priority::High,
            InspectionType::Incident,
        ),
    ]
}

/// Scheduled and in-progress inspections, in input order.
pub fn active_inspections(all: &[Inspection]) -> Vec<&Inspection> {
    all.iter().filter(|i| i.is_active()).collect()
}

/// Completed inspections, in input order.
pub fn completed_inspections(all: &[Inspection]) -> Vec<&Inspection> {
    all.iter().filter(|i| !i.is_active()).collect()
}
