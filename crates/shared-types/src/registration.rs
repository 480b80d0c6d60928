use serde::{Deserialize, Serialize};

/// Kind of registration an applicant is filing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationType {
    CompetentPerson,
    Inspector,
    Factory,
    License,
}

pub const APPLICATION_TYPES: &[ApplicationType] = &[
    ApplicationType::CompetentPerson,
    ApplicationType::Inspector,
    ApplicationType::Factory,
    ApplicationType::License,
];

impl ApplicationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationType::CompetentPerson => "competent-person",
            ApplicationType::Inspector => "inspector",
            ApplicationType::Factory => "factory",
            ApplicationType::License => "license",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationType::CompetentPerson => "Competent Person",
            ApplicationType::Inspector => "Inspector Certification",
            ApplicationType::Factory => "Factory Registration",
            ApplicationType::License => "Industrial License",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        APPLICATION_TYPES.iter().copied().find(|t| t.as_str() == s)
    }
}

/// Processing priority requested on a registration application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationPriority {
    Normal,
    Urgent,
    Emergency,
}

pub const APPLICATION_PRIORITIES: &[ApplicationPriority] = &[
    ApplicationPriority::Normal,
    ApplicationPriority::Urgent,
    ApplicationPriority::Emergency,
];

impl ApplicationPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApplicationPriority::Normal => "normal",
            ApplicationPriority::Urgent => "urgent",
            ApplicationPriority::Emergency => "emergency",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ApplicationPriority::Normal => "Normal",
            ApplicationPriority::Urgent => "Urgent",
            ApplicationPriority::Emergency => "Emergency",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        APPLICATION_PRIORITIES.iter().copied().find(|p| p.as_str() == s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ApplicationStatus {
    Approved,
    UnderReview,
    Pending,
}

impl ApplicationStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ApplicationStatus::Approved => "Approved",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Pending => "Pending",
        }
    }
}

/// A submitted registration application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationApplication {
    pub id: String,
    pub applicant_name: String,
    pub company: String,
    pub application_type: ApplicationType,
    pub status: ApplicationStatus,
    /// ISO date (`YYYY-MM-DD`).
    pub submitted_date: String,
    /// ISO date; `None` until a reviewer has picked the application up.
    pub review_date: Option<String>,
}

/// Sample applications backing the registration page.
pub fn sample_applications() -> Vec<RegistrationApplication> {
    vec![
        RegistrationApplication {
            id: "REG-2024-001".into(),
            applicant_name: "Dr. Rajesh Kumar".into(),
            company: "ABC Manufacturing Ltd.".into(),
            application_type: ApplicationType::CompetentPerson,
            status: ApplicationStatus::Approved,
            submitted_date: "2024-01-15".into(),
            review_date: Some("2024-01-18".into()),
        },
        RegistrationApplication {
            id: "REG-2024-002".into(),
            applicant_name: "Er. Priya Sharma".into(),
            company: "XYZ Chemical Works".into(),
            application_type: ApplicationType::Factory,
            status: ApplicationStatus::UnderReview,
            submitted_date: "2024-01-20".into(),
            review_date: None,
        },
        RegistrationApplication {
            id: "REG-2024-003".into(),
            applicant_name: "Mr. Anil Patel".into(),
            company: "DEF Steel Plant".into(),
            application_type: ApplicationType::Inspector,
            status: ApplicationStatus::Pending,
            submitted_date: "2024-01-22".into(),
            review_date: None,
        },
    ]
}

/// Applications still awaiting a decision.
pub fn pending_applications(all: &[RegistrationApplication]) -> Vec<&RegistrationApplication> {
    all.iter()
        .filter(|a| a.status != ApplicationStatus::Approved)
        .collect()
}

pub fn approved_applications(all: &[RegistrationApplication]) -> Vec<&RegistrationApplication> {
    all.iter()
        .filter(|a| a.status == ApplicationStatus::Approved)
        .collect()
}
