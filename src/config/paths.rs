use crate::config::ConfigError;
use std::path::PathBuf;

pub const STATE_DIR: &str = ".journeyflow";
pub const SETTINGS_FILE_NAME: &str = "settings.yaml";
pub const LOGS_DIR: &str = "logs";
pub const EVENT_LOG_FILE_NAME: &str = "events.log";

pub fn state_root() -> Result<PathBuf, ConfigError> {
    let home = std::env::var_os("HOME").ok_or(ConfigError::HomeDirectoryUnavailable)?;
    Ok(PathBuf::from(home).join(STATE_DIR))
}

pub fn default_settings_path() -> Result<PathBuf, ConfigError> {
    Ok(state_root()?.join(SETTINGS_FILE_NAME))
}

pub fn default_log_path() -> Result<PathBuf, ConfigError> {
    Ok(state_root()?.join(LOGS_DIR).join(EVENT_LOG_FILE_NAME))
}
