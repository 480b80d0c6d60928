use serde::{Deserialize, Serialize};

use crate::AppError;

fn enabled() -> bool {
    true
}

/// Portal branding shown in the sidebar header, sign-in page and footer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Branding {
    pub name: String,
    pub subtitle: String,
    pub footer: String,
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            name: "DISH Portal".to_string(),
            subtitle: "Directorate of Industrial Safety".to_string(),
            footer: "Government of India | Ministry of Labour and Employment".to_string(),
        }
    }
}

/// Optional presentation features.
///
/// Unlike integrations, these are on unless the config turns them off,
/// so a missing `config.toml` renders the full portal.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PortalFeatures {
    /// Notification bell in the page header.
    #[serde(default = "enabled")]
    pub notifications: bool,
    /// Chart placeholders on the analytics page.
    #[serde(default = "enabled")]
    pub analytics_charts: bool,
}

impl Default for PortalFeatures {
    fn default() -> Self {
        Self {
            notifications: true,
            analytics_charts: true,
        }
    }
}

/// Top-level config file structure matching `config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PortalConfig {
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub features: PortalFeatures,
}

impl PortalConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Ok(toml::from_str(contents)?)
    }
}
