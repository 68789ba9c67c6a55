pub mod error;
pub mod paths;
pub mod settings;

pub use error::ConfigError;
pub use paths::{
    default_log_path, default_settings_path, state_root, EVENT_LOG_FILE_NAME, LOGS_DIR,
    SETTINGS_FILE_NAME, STATE_DIR,
};
pub use settings::{Settings, DEFAULT_COPY_INDICATOR_MS, MAX_COPY_INDICATOR_MS};

pub fn load_settings() -> Result<Settings, ConfigError> {
    let path = default_settings_path()?;
    let settings = Settings::from_path_or_default(&path)?;
    settings.validate()?;
    Ok(settings)
}
