use serde::{Deserialize, Serialize};

use crate::Role;

/// Symbolic icon identifier. The presentation layer maps each variant to
/// a concrete icon; nothing here depends on an icon library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRef {
    Home,
    Users,
    ClipboardCheck,
    FileText,
    Settings,
    BarChart,
    MessageSquare,
    Shield,
    TrendingUp,
    Download,
}

/// Route paths of every page reachable from the sidebar.
pub mod paths {
    pub const DASHBOARD: &str = "/dashboard";
    pub const REGISTRATION: &str = "/registration";
    pub const INSPECTIONS: &str = "/inspections";
    pub const DOCUMENTS: &str = "/documents";
    pub const RULES: &str = "/rules";
    pub const ANALYTICS: &str = "/analytics";
    pub const COMMUNICATIONS: &str = "/communications";
    pub const REPORTS: &str = "/reports";
    pub const INSPECTION_STATUS: &str = "/inspection-status";
    pub const ASSIGNED_INSPECTIONS: &str = "/assigned-inspections";
}

/// Header title used when no entry matches the current route.
pub const DEFAULT_TITLE: &str = "Dashboard";

/// A single sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationEntry {
    pub label: &'static str,
    pub icon: IconRef,
    pub route_path: &'static str,
}

impl NavigationEntry {
    const fn new(label: &'static str, icon: IconRef, route_path: &'static str) -> Self {
        Self {
            label,
            icon,
            route_path,
        }
    }

    /// Exact path equality. `/inspections/1` is not `/inspections`, and
    /// trailing slashes are significant.
    pub fn is_active(&self, current_route_path: &str) -> bool {
        self.route_path == current_route_path
    }
}

const DASHBOARD: NavigationEntry = NavigationEntry::new("Dashboard", IconRef::Home, paths::DASHBOARD);

const BASELINE_NAV: &[NavigationEntry] = &[DASHBOARD];

const ADMIN_NAV: &[NavigationEntry] = &[
    DASHBOARD,
    NavigationEntry::new("Registration", IconRef::Users, paths::REGISTRATION),
    NavigationEntry::new("Inspections", IconRef::ClipboardCheck, paths::INSPECTIONS),
    NavigationEntry::new("Documents", IconRef::FileText, paths::DOCUMENTS),
    NavigationEntry::new("Rules & Alerts", IconRef::Settings, paths::RULES),
    NavigationEntry::new("Analytics", IconRef::BarChart, paths::ANALYTICS),
    NavigationEntry::new("Communications", IconRef::MessageSquare, paths::COMMUNICATIONS),
];

const INSPECTOR_NAV: &[NavigationEntry] = &[
    DASHBOARD,
    NavigationEntry::new("My Inspections", IconRef::ClipboardCheck, paths::INSPECTIONS),
    NavigationEntry::new("Reports", IconRef::FileText, paths::REPORTS),
    NavigationEntry::new("Communications", IconRef::MessageSquare, paths::COMMUNICATIONS),
];

const INDUSTRY_NAV: &[NavigationEntry] = &[
    DASHBOARD,
    NavigationEntry::new("Registration", IconRef::Users, paths::REGISTRATION),
    NavigationEntry::new("Inspection Status", IconRef::ClipboardCheck, paths::INSPECTION_STATUS),
    NavigationEntry::new("Documents", IconRef::FileText, paths::DOCUMENTS),
];

const COMPETENT_PERSON_NAV: &[NavigationEntry] = &[
    DASHBOARD,
    NavigationEntry::new("Assigned Inspections", IconRef::ClipboardCheck, paths::ASSIGNED_INSPECTIONS),
    NavigationEntry::new("Reports", IconRef::FileText, paths::REPORTS),
];

/// Ordered sidebar entries for a role. Always non-empty and always
/// starting with Dashboard; `Guest` gets Dashboard alone.
pub fn resolve(role: Role) -> &'static [NavigationEntry] {
    match role {
        Role::Admin => ADMIN_NAV,
        Role::Inspector => INSPECTOR_NAV,
        Role::Industry => INDUSTRY_NAV,
        Role::CompetentPerson => COMPETENT_PERSON_NAV,
        Role::Guest => BASELINE_NAV,
    }
}

/// Resolve straight from a raw role tag.
pub fn resolve_tag(tag: &str) -> &'static [NavigationEntry] {
    resolve(Role::from_str_or_default(tag))
}

/// See [`NavigationEntry::is_active`].
pub fn is_active(entry: &NavigationEntry, current_route_path: &str) -> bool {
    entry.is_active(current_route_path)
}

/// First entry matching the current route, if any.
pub fn active_entry<'a>(
    entries: &'a [NavigationEntry],
    current_route_path: &str,
) -> Option<&'a NavigationEntry> {
    entries.iter().find(|entry| entry.is_active(current_route_path))
}

/// Page header label: the active entry's label, or [`DEFAULT_TITLE`].
pub fn header_title(entries: &[NavigationEntry], current_route_path: &str) -> &'static str {
    active_entry(entries, current_route_path)
        .map(|entry| entry.label)
        .unwrap_or(DEFAULT_TITLE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn labels(role: Role) -> Vec<&'static str> {
        resolve(role).iter().map(|e| e.label).collect()
    }

    #[test]
    fn admin_table() {
        assert_eq!(
            labels(Role::Admin),
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
    }

    #[test]
    fn guest_gets_dashboard_only() {
        let entries = resolve(Role::Guest);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].label, "Dashboard");
        assert_eq!(entries[0].route_path, paths::DASHBOARD);
        assert_eq!(entries[0].icon, IconRef::Home);
    }

    #[test]
    fn no_duplicate_labels_or_paths_within_a_role() {
        for role in [Role::Admin, Role::Inspector, Role::Industry, Role::CompetentPerson, Role::Guest] {
            let entries = resolve(role);
            let paths: HashSet<_> = entries.iter().map(|e| e.route_path).collect();
            let labels: HashSet<_> = entries.iter().map(|e| e.label).collect();
            assert_eq!(paths.len(), entries.len(), "duplicate path for {role}");
            assert_eq!(labels.len(), entries.len(), "duplicate label for {role}");
        }
    }

    #[test]
    fn is_active_is_exact_equality() {
        let entry = NavigationEntry::new("Inspections", IconRef::ClipboardCheck, "/inspections");
        assert!(is_active(&entry, "/inspections"));
        assert!(!is_active(&entry, "/inspections/1"));
        assert!(!is_active(&entry, "/inspections/"));
        assert!(!is_active(&entry, "/Inspections"));
        assert!(!is_active(&entry, ""));
    }

    #[test]
    fn header_title_uses_first_active_label() {
        assert_eq!(header_title(resolve(Role::Admin), "/rules"), "Rules & Alerts");
        assert_eq!(header_title(resolve(Role::Inspector), "/inspections"), "My Inspections");
    }

    #[test]
    fn header_title_falls_back_to_dashboard() {
        assert_eq!(header_title(resolve(Role::Admin), "/not-a-real-route"), DEFAULT_TITLE);
        assert_eq!(header_title(&[], "/rules"), "Dashboard");
    }

    #[test]
    fn entries_serialize_with_symbolic_icons() {
        let json = serde_json::to_value(resolve(Role::Guest)).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "label": "Dashboard", "icon": "home", "route_path": "/dashboard" }])
        );
    }
}
