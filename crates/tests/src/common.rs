use shared_types::{resolve, NavigationEntry, Role};

/// Every role the resolver knows, plus the fallback.
pub const ALL_ROLES: &[Role] = &[
    Role::Admin,
    Role::Inspector,
    Role::Industry,
    Role::CompetentPerson,
    Role::Guest,
];

/// Raw tags that are not roles.
pub const UNKNOWN_TAGS: &[&str] = &["", "guest", "Admin", "ADMIN", " admin", "superuser", "dish_admin"];

pub fn labels(entries: &[NavigationEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.label).collect()
}

pub fn paths(entries: &[NavigationEntry]) -> Vec<&'static str> {
    entries.iter().map(|e| e.route_path).collect()
}

pub fn labels_for(role: Role) -> Vec<&'static str> {
    labels(resolve(role))
}
