use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::{Validate, ValidationError};

use crate::{ApplicationPriority, ApplicationType, InspectionType, Priority, Role};

/// Sign-in form submission. Nothing is authenticated; a valid form only
/// selects the role the portal renders for.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_sign_in_role"))
    )]
    pub role: Role,
    #[cfg_attr(
        feature = "validation",
        validate(
            length(min = 1, message = "Email is required"),
            email(message = "Valid email is required")
        )
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Password is required"))
    )]
    pub password: String,
}

/// New registration application.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct RegistrationApplicationRequest {
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Application type is required"))
    )]
    pub application_type: Option<ApplicationType>,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Priority is required"))
    )]
    pub priority: Option<ApplicationPriority>,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Full name is required"))
    )]
    pub full_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    pub phone: String,
    /// Empty when the applicant did not supply one.
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_aadhaar"))
    )]
    pub aadhaar: String,
    pub qualification: String,
    #[cfg_attr(
        feature = "validation",
        validate(range(max = 60, message = "Experience must be between 0 and 60 years"))
    )]
    pub experience_years: Option<u32>,
    pub specialization: String,
}

/// Inspection scheduling form. Validated and acknowledged only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct ScheduleInspectionRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_facility"))
    )]
    pub facility: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_inspector"))
    )]
    pub inspector: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_inspection_form"))
    )]
    pub form: String,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Priority is required"))
    )]
    pub priority: Option<Priority>,
    /// ISO date (`YYYY-MM-DD`) from the date input.
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "validate_iso_date"))
    )]
    pub date: String,
    #[cfg_attr(
        feature = "validation",
        validate(required(message = "Inspection type is required"))
    )]
    pub inspection_type: Option<InspectionType>,
}

#[cfg(feature = "validation")]
fn invalid(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(message.into())
}

#[cfg(feature = "validation")]
fn validate_sign_in_role(role: &Role) -> Result<(), ValidationError> {
    if role.is_recognized() {
        Ok(())
    } else {
        Err(invalid("role", "Please select a user type"))
    }
}

#[cfg(feature = "validation")]
fn validate_aadhaar(aadhaar: &str) -> Result<(), ValidationError> {
    if aadhaar.is_empty() || (aadhaar.len() == 12 && aadhaar.bytes().all(|b| b.is_ascii_digit())) {
        Ok(())
    } else {
        Err(invalid("aadhaar", "Aadhaar number must be 12 digits"))
    }
}

#[cfg(feature = "validation")]
fn validate_facility(facility: &str) -> Result<(), ValidationError> {
    if crate::is_known_facility(facility) {
        Ok(())
    } else {
        Err(invalid("facility", "Select a company or facility"))
    }
}

#[cfg(feature = "validation")]
fn validate_inspector(inspector: &str) -> Result<(), ValidationError> {
    if crate::is_known_inspector(inspector) {
        Ok(())
    } else {
        Err(invalid("inspector", "Select an inspector"))
    }
}

#[cfg(feature = "validation")]
fn validate_inspection_form(form: &str) -> Result<(), ValidationError> {
    if crate::is_inspection_form(form) {
        Ok(())
    } else {
        Err(invalid("form", "Select an inspection form"))
    }
}

#[cfg(feature = "validation")]
fn validate_iso_date(date: &str) -> Result<(), ValidationError> {
    chrono::NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid("date", "Pick an inspection date"))
}

#[cfg(feature = "validation")]
impl LoginRequest {
    pub fn check(&self) -> Result<(), crate::AppError> {
        Ok(self.validate()?)
    }
}

#[cfg(feature = "validation")]
impl RegistrationApplicationRequest {
    pub fn check(&self) -> Result<(), crate::AppError> {
        Ok(self.validate()?)
    }
}

#[cfg(feature = "validation")]
impl ScheduleInspectionRequest {
    pub fn check(&self) -> Result<(), crate::AppError> {
        Ok(self.validate()?)
    }
}
