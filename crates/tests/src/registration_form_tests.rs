//! Registration application form and the sample applications it sits beside.

use pretty_assertions::assert_eq;
use shared_types::{
    approved_applications, pending_applications, sample_applications, ApplicationPriority,
    ApplicationStatus, ApplicationType, RegistrationApplicationRequest, APPLICATION_PRIORITIES,
    APPLICATION_TYPES,
};

fn application() -> RegistrationApplicationRequest {
    RegistrationApplicationRequest {
        application_type: ApplicationType::parse("factory"),
        priority: ApplicationPriority::parse("urgent"),
        full_name: "Er. Priya Sharma".into(),
        email: "priya@xyzchem.in".into(),
        phone: "+91 98765 43210".into(),
        aadhaar: String::new(),
        qualification: "B.E. Chemical".into(),
        experience_years: Some(8),
        specialization: "Chemical process safety".into(),
    }
}

#[test]
fn form_select_values_parse_back_to_their_variants() {
    for t in APPLICATION_TYPES {
        assert_eq!(ApplicationType::parse(t.as_str()), Some(*t));
    }
    for p in APPLICATION_PRIORITIES {
        assert_eq!(ApplicationPriority::parse(p.as_str()), Some(*p));
    }
    assert_eq!(ApplicationType::parse(""), None);
}

#[test]
fn filled_form_is_accepted() {
    assert!(application().check().is_ok());
}

#[test]
fn unselected_type_is_reported_on_its_field() {
    let req = RegistrationApplicationRequest {
        application_type: ApplicationType::parse(""),
        ..application()
    };
    let err = req.check().unwrap_err();
    assert_eq!(err.field_errors.len(), 1);
    assert_eq!(err.field_error("application_type"), Some("Application type is required"));
}

#[test]
fn blank_name_and_bad_email_are_both_reported() {
    let req = RegistrationApplicationRequest {
        full_name: String::new(),
        email: "priya-at-xyzchem".into(),
        ..application()
    };
    let err = req.check().unwrap_err();
    assert_eq!(err.field_error("full_name"), Some("Full name is required"));
    assert_eq!(err.field_error("email"), Some("Valid email is required"));
}

#[test]
fn experience_boundaries() {
    let at_limit = RegistrationApplicationRequest {
        experience_years: Some(60),
        ..application()
    };
    assert!(at_limit.check().is_ok());

    let unset = RegistrationApplicationRequest {
        experience_years: None,
        ..application()
    };
    assert!(unset.check().is_ok());
}

#[test]
fn sample_applications_split_into_pending_and_approved() {
    let all = sample_applications();
    let pending = pending_applications(&all);
    let approved = approved_applications(&all);

    assert_eq!(pending.len() + approved.len(), all.len());
    assert!(approved.iter().all(|a| a.status == ApplicationStatus::Approved));
    assert!(approved.iter().all(|a| a.review_date.is_some()));
    assert!(pending.iter().all(|a| a.status != ApplicationStatus::Approved));
}
