//! Portal config as shipped in the repository root.

use pretty_assertions::assert_eq;
use shared_types::{AppErrorKind, PortalConfig};

const SHIPPED_CONFIG: &str = include_str!("../../../config.toml");

#[test]
fn shipped_config_parses() {
    let config = PortalConfig::from_toml_str(SHIPPED_CONFIG).unwrap();
    assert_eq!(config.branding.name, "DISH Portal");
    assert!(config.features.notifications);
    assert!(config.features.analytics_charts);
}

#[test]
fn shipped_config_matches_builtin_defaults() {
    let config = PortalConfig::from_toml_str(SHIPPED_CONFIG).unwrap();
    assert_eq!(config, PortalConfig::default());
}

#[test]
fn feature_can_be_switched_off() {
    let config = PortalConfig::from_toml_str("[features]\nanalytics_charts = false\n").unwrap();
    assert!(!config.features.analytics_charts);
    assert!(config.features.notifications);
}

#[test]
fn wrong_value_type_is_rejected() {
    let err = PortalConfig::from_toml_str("[features]\nnotifications = \"yes\"\n").unwrap_err();
    assert_eq!(err.kind, AppErrorKind::BadRequest);
}
