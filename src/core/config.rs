use super::services::preferences::PreferenceStore;
use super::services::theme::THEME_STORAGE_KEY;

pub const LOG_LEVEL_KEY: &str = "admin-log-level";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `admin_board=debug`.
    pub log_filter: String,
    pub theme_key: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            theme_key: THEME_STORAGE_KEY.to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, with the log filter overridden by `admin-log-level` if set.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let mut config = Self::default();
        if let Some(filter) = store.get(LOG_LEVEL_KEY).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter.trim().to_string();
        }
        config
    }
}
