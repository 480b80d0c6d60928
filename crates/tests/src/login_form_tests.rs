//! Sign-in form validation as the login page drives it.

use pretty_assertions::assert_eq;
use shared_types::{resolve, AppErrorKind, LoginRequest, Role, SIGN_IN_ROLES};

fn login(role: Role, email: &str, password: &str) -> LoginRequest {
    LoginRequest {
        role,
        email: email.to_string(),
        password: password.to_string(),
    }
}

#[test]
fn each_sign_in_role_can_log_in() {
    for role in SIGN_IN_ROLES {
        let req = login(*role, "officer@dish.gov.in", "pass");
        assert!(req.check().is_ok(), "{role} rejected");
    }
}

#[test]
fn accepted_login_role_drives_the_sidebar() {
    let req = login(Role::from_str_or_default("industry"), "ops@factory.in", "pass");
    assert!(req.check().is_ok());
    assert_eq!(resolve(req.role).len(), 4);
}

#[test]
fn missing_user_type_produces_a_form_prompt() {
    let err = login(Role::Guest, "ops@factory.in", "pass").check().unwrap_err();
    assert_eq!(err.kind, AppErrorKind::ValidationError);
    assert_eq!(err.friendly_message(), "Please fill in all fields");
    assert_eq!(err.field_errors.len(), 1);
    assert_eq!(err.field_error("role"), Some("Please select a user type"));
}

#[test]
fn blank_password_is_the_only_error() {
    let err = login(Role::Admin, "admin@dish.gov.in", "").check().unwrap_err();
    assert_eq!(err.field_errors.len(), 1);
    assert_eq!(err.field_error("password"), Some("Password is required"));
}

#[test]
fn login_parsed_from_json_applies_the_same_rules() {
    let req: LoginRequest = serde_json::from_str(
        r#"{ "role": "superuser", "email": "x@y.in", "password": "pw" }"#,
    )
    .unwrap();
    assert_eq!(req.role, Role::Guest);
    assert!(req.check().unwrap_err().field_error("role").is_some());
}
