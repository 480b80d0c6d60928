//! Role tags as they arrive from the sign-in form and from stored sessions.

use pretty_assertions::assert_eq;
use shared_types::{resolve, Role, SIGN_IN_ROLES};

use crate::common::{labels_for, UNKNOWN_TAGS};

#[test]
fn sign_in_form_offers_the_four_roles_in_order() {
    let names: Vec<&str> = SIGN_IN_ROLES.iter().map(|r| r.display_name()).collect();
    assert_eq!(names, vec!["Industry", "Competent Person", "Inspector", "DISH Admin"]);
}

#[test]
fn every_sign_in_role_gets_more_than_the_baseline() {
    for role in SIGN_IN_ROLES {
        assert!(resolve(*role).len() > 1, "{role} only sees the baseline");
    }
}

#[test]
fn unknown_tags_degrade_to_guest() {
    for tag in UNKNOWN_TAGS {
        let role = Role::from_str_or_default(tag);
        assert_eq!(role, Role::Guest, "tag {tag:?}");
        assert!(!role.is_recognized(), "tag {tag:?}");
    }
}

#[test]
fn guest_tag_itself_is_not_a_sign_in_role() {
    assert_eq!(Role::from_str_or_default("guest"), Role::Guest);
    assert!(!SIGN_IN_ROLES.contains(&Role::Guest));
    assert_eq!(labels_for(Role::Guest), vec!["Dashboard"]);
}

#[test]
fn header_caption_per_role() {
    let captions: Vec<String> = SIGN_IN_ROLES.iter().map(|r| r.header_label()).collect();
    assert_eq!(captions, vec!["industry", "competent person", "inspector", "admin"]);
}
