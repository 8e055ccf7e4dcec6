//! Global configuration location (~/.config/medrec/config.toml)

use std::path::PathBuf;

use crate::error::{MedrecError, Result};

const CONFIG_DIR: &str = "medrec";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "MEDREC_CONFIG_DIR";

/// Path of the per-user config file
pub fn global_config_path() -> Result<PathBuf> {
    // Allow environment variable override for testing
    let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
        PathBuf::from(env_dir)
    } else {
        dirs::config_dir()
            .ok_or_else(|| MedrecError::Other("unable to determine config directory".to_string()))?
            .join(CONFIG_DIR)
    };

    Ok(config_dir.join(CONFIG_FILE))
}
