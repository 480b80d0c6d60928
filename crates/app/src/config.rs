use shared_types::PortalConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<PortalConfig> = OnceLock::new();

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Read `config.toml` into the global `OnceLock` on first call and return
/// it. A missing or unparseable file leaves every setting at its default.
pub fn load_portal_config() -> &'static PortalConfig {
    CONFIG.get_or_init(read_config)
}

#[cfg(not(target_arch = "wasm32"))]
fn read_config() -> PortalConfig {
    match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => match PortalConfig::from_toml_str(&contents) {
            Ok(config) => {
                tracing::info!(features = ?config.features, "loaded {CONFIG_PATH}");
                config
            }
            Err(err) => {
                tracing::warn!(error = %err, "{CONFIG_PATH} unparseable, using defaults");
                PortalConfig::default()
            }
        },
        Err(err) => {
            tracing::info!(error = %err, "{CONFIG_PATH} not found, using defaults");
            PortalConfig::default()
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_config() -> PortalConfig {
    tracing::debug!("no file system in the browser, using default portal config");
    PortalConfig::default()
}
