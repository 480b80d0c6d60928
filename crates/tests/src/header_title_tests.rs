//! Active-entry matching and the header title derived from it.

use shared_types::{active_entry, header_title, is_active, resolve, Role, DEFAULT_TITLE};

use crate::common::ALL_ROLES;

#[test]
fn admin_on_rules_page_shows_rules_and_alerts() {
    assert_eq!(header_title(resolve(Role::Admin), "/rules"), "Rules & Alerts");
}

#[test]
fn unknown_route_falls_back_to_dashboard() {
    assert_eq!(header_title(resolve(Role::Admin), "/not-a-real-route"), "Dashboard");
    assert_eq!(DEFAULT_TITLE, "Dashboard");
}

#[test]
fn inspector_title_uses_the_role_specific_label() {
    assert_eq!(header_title(resolve(Role::Inspector), "/inspections"), "My Inspections");
    assert_eq!(header_title(resolve(Role::Admin), "/inspections"), "Inspections");
}

#[test]
fn route_outside_the_role_menu_reads_dashboard() {
    assert_eq!(header_title(resolve(Role::Industry), "/analytics"), "Dashboard");
}

#[test]
fn empty_entry_list_reads_dashboard() {
    assert_eq!(header_title(&[], "/rules"), "Dashboard");
}

#[test]
fn activity_is_exact_path_equality() {
    let entries = resolve(Role::Admin);
    let inspections = entries
        .iter()
        .find(|e| e.route_path == "/inspections")
        .copied()
        .expect("admin has an inspections entry");

    assert!(is_active(&inspections, "/inspections"));
    assert!(!is_active(&inspections, "/inspections/123"));
    assert!(!is_active(&inspections, "/inspections/"));
    assert!(!is_active(&inspections, "/Inspections"));
    assert!(!is_active(&inspections, ""));
}

#[test]
fn at_most_one_entry_is_active_per_path() {
    for role in ALL_ROLES {
        let entries = resolve(*role);
        for entry in entries {
            let active = entries
                .iter()
                .filter(|e| is_active(e, entry.route_path))
                .count();
            assert_eq!(active, 1, "{role} on {}", entry.route_path);
            assert_eq!(active_entry(entries, entry.route_path), Some(entry));
        }
    }
}
