//! Dashboard quick actions are the same for every role and each one lands
//! on a page some role's sidebar links to.

use pretty_assertions::assert_eq;
use shared_types::{navigation::paths, quick_actions, resolve};

use crate::common::ALL_ROLES;

#[test]
fn four_shortcuts_in_dashboard_order() {
    let labels: Vec<&str> = quick_actions().iter().map(|a| a.label).collect();
    assert_eq!(
        labels,
        vec!["New Registration", "Schedule Inspection", "Generate Report", "View Analytics"]
    );
}

#[test]
fn shortcut_targets() {
    let targets: Vec<&str> = quick_actions().iter().map(|a| a.route_path).collect();
    assert_eq!(
        targets,
        vec![paths::REGISTRATION, paths::INSPECTIONS, paths::REPORTS, paths::ANALYTICS]
    );
}

#[test]
fn every_shortcut_target_is_a_sidebar_page() {
    for action in quick_actions() {
        let linked = ALL_ROLES
            .iter()
            .any(|role| resolve(*role).iter().any(|e| e.route_path == action.route_path));
        assert!(linked, "{} leads to {}", action.label, action.route_path);
    }
}
