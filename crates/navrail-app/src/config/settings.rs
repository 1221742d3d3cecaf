//! Config loader for .navrail/nav.toml

use std::path::Path;

use navrail_core::prelude::*;

use super::types::NavConfig;
use crate::prefs::NAVRAIL_DIR;

const CONFIG_FILENAME: &str = "nav.toml";

/// Load the nav configuration from `base/.navrail/nav.toml`.
///
/// A missing file is not an error (first run): the built-in demo tree is
/// used. A malformed file is logged and likewise falls back to the demo
/// tree, so a bad edit never prevents the sidebar from rendering.
pub fn load_nav_config(base: &Path) -> NavConfig {
    let config_path = base.join(NAVRAIL_DIR).join(CONFIG_FILENAME);

    if !config_path.exists() {
        debug!("No nav config at {:?}, using built-in defaults", config_path);
        return NavConfig::default();
    }

    match std::fs::read_to_string(&config_path) {
        Ok(content) => match toml::from_str::<NavConfig>(&content) {
            Ok(config) => {
                info!("Loaded nav config from {:?}", config_path);
                config
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", config_path, e);
                NavConfig::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", config_path, e);
            NavConfig::default()
        }
    }
}
