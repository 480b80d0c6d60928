use serde::{Deserialize, Serialize};
use std::fmt;

/// Portal user role controlling which navigation entries are visible.
///
/// - `Industry`: factory operators managing registrations and tracking inspection status.
/// - `CompetentPerson`: certified professionals working assigned inspections.
/// - `Inspector`: government inspectors conducting inspections and filing reports.
/// - `Admin`: DISH administrators overseeing all operations.
/// - `Guest`: any tag outside the four above. Sees the baseline navigation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Industry,
    CompetentPerson,
    Inspector,
    Admin,
    #[default]
    Guest,
}

/// Roles offered on the sign-in form, in display order.
pub const SIGN_IN_ROLES: &[Role] = &[
    Role::Industry,
    Role::CompetentPerson,
    Role::Inspector,
    Role::Admin,
];

impl Role {
    /// Parse a role tag. Unknown values degrade to `Guest`.
    ///
    /// Tags are matched exactly: `"Admin"` is not `"admin"`.
    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "industry" => Role::Industry,
            "competent_person" => Role::CompetentPerson,
            "inspector" => Role::Inspector,
            "admin" => Role::Admin,
            _ => Role::Guest,
        }
    }

    /// Wire tag for the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Industry => "industry",
            Role::CompetentPerson => "competent_person",
            Role::Inspector => "inspector",
            Role::Admin => "admin",
            Role::Guest => "guest",
        }
    }

    /// Label used on the sign-in form and in the header's user block.
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Industry => "Industry",
            Role::CompetentPerson => "Competent Person",
            Role::Inspector => "Inspector",
            Role::Admin => "DISH Admin",
            Role::Guest => "Guest",
        }
    }

    /// Lowercase caption shown under the user name in the header.
    pub fn header_label(&self) -> String {
        self.as_str().replace('_', " ")
    }

    /// True for the four roles a session can actually hold.
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Role::Guest)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_str_or_default(&s)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}
