//! Role-to-navigation table and the resolver's fail-soft behaviour.

use pretty_assertions::assert_eq;
use shared_types::{resolve, resolve_tag, IconRef, Role};

use crate::common::{labels, labels_for, paths, ALL_ROLES, UNKNOWN_TAGS};

#[test]
fn admin_sees_the_full_portal() {
    assert_eq!(
        labels_for(Role::Admin),
        vec![
            "Dashboard",
            "Registration",
            "Inspections",
            "Documents",
            "Rules & Alerts",
            "Analytics",
            "Communications",
        ]
    );
    assert_eq!(
        paths(resolve(Role::Admin)),
        vec![
            "/dashboard",
            "/registration",
            "/inspections",
            "/documents",
            "/rules",
            "/analytics",
            "/communications",
        ]
    );
}

#[test]
fn inspector_navigation() {
    let entries = resolve(Role::Inspector);
    assert_eq!(
        labels(entries),
        vec!["Dashboard", "My Inspections", "Reports", "Communications"]
    );
    assert_eq!(
        paths(entries),
        vec!["/dashboard", "/inspections", "/reports", "/communications"]
    );
}

#[test]
fn industry_navigation() {
    let entries = resolve(Role::Industry);
    assert_eq!(
        labels(entries),
        vec!["Dashboard", "Registration", "Inspection Status", "Documents"]
    );
    assert_eq!(
        paths(entries),
        vec!["/dashboard", "/registration", "/inspection-status", "/documents"]
    );
}

#[test]
fn competent_person_navigation() {
    let entries = resolve(Role::CompetentPerson);
    assert_eq!(
        labels(entries),
        vec!["Dashboard", "Assigned Inspections", "Reports"]
    );
    assert_eq!(
        paths(entries),
        vec!["/dashboard", "/assigned-inspections", "/reports"]
    );
}

#[test]
fn resolution_by_tag_matches_resolution_by_role() {
    for (tag, role) in [
        ("admin", Role::Admin),
        ("inspector", Role::Inspector),
        ("industry", Role::Industry),
        ("competent_person", Role::CompetentPerson),
    ] {
        assert_eq!(resolve_tag(tag), resolve(role), "tag {tag}");
    }
}

#[test]
fn unknown_tags_fall_back_to_dashboard_only() {
    for tag in UNKNOWN_TAGS {
        let entries = resolve_tag(tag);
        assert_eq!(labels(entries), vec!["Dashboard"], "tag {tag:?}");
        assert_eq!(paths(entries), vec!["/dashboard"], "tag {tag:?}");
    }
}

#[test]
fn every_list_starts_with_dashboard() {
    for role in ALL_ROLES {
        let entries = resolve(*role);
        assert!(!entries.is_empty(), "{role} resolved to nothing");
        assert_eq!(entries[0].label, "Dashboard");
        assert_eq!(entries[0].route_path, "/dashboard");
        assert_eq!(entries[0].icon, IconRef::Home);
    }
}

#[test]
fn resolution_is_idempotent() {
    for role in ALL_ROLES {
        let first = resolve(*role).to_vec();
        let second = resolve(*role).to_vec();
        assert_eq!(first, second);
    }
}

#[test]
fn entries_carry_their_symbolic_icons() {
    let icons: Vec<IconRef> = resolve(Role::Admin).iter().map(|e| e.icon).collect();
    assert_eq!(
        icons,
        vec![
            IconRef::Home,
            IconRef::Users,
            IconRef::ClipboardCheck,
            IconRef::FileText,
            IconRef::Settings,
            IconRef::BarChart,
            IconRef::MessageSquare,
        ]
    );

    for role in [Role::Inspector, Role::Industry, Role::CompetentPerson] {
        for entry in resolve(role).iter().filter(|e| e.label.contains("Inspection")) {
            assert_eq!(entry.icon, IconRef::ClipboardCheck, "{}", entry.label);
        }
    }
}

#[test]
fn no_role_lists_a_path_twice() {
    for role in ALL_ROLES {
        let mut seen = paths(resolve(*role));
        let total = seen.len();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), total, "{role} repeats a route");
    }
}
