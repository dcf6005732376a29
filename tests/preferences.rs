use admin_board::core::config::{AppConfig, LOG_LEVEL_KEY};
use admin_board::core::services::{
    MemoryPreferences, PreferenceStore, Theme, ThemeSettings, THEME_STORAGE_KEY,
};

#[test]
fn theme_defaults_to_light_when_nothing_stored() {
    let settings = ThemeSettings::new(MemoryPreferences::new());
    assert_eq!(settings.load(), Theme::Light);
}

#[test]
fn saved_theme_is_loaded_back() {
    let prefs = MemoryPreferences::new();
    let settings = ThemeSettings::new(prefs.clone());

    settings.save(Theme::Purple).unwrap();

    assert_eq!(prefs.get(THEME_STORAGE_KEY).as_deref(), Some("purple"));
    assert_eq!(ThemeSettings::new(prefs).load(), Theme::Purple);
}

#[test]
fn unknown_stored_theme_falls_back_to_light() {
    let prefs = MemoryPreferences::new().with_value(THEME_STORAGE_KEY, "neon");
    assert_eq!(ThemeSettings::new(prefs).load(), Theme::Light);
}

#[test]
fn only_dark_theme_is_dark() {
    let dark: Vec<Theme> = Theme::all().into_iter().filter(Theme::is_dark).collect();
    assert_eq!(dark, vec![Theme::Dark]);
}

#[test]
fn config_uses_defaults_without_overrides() {
    let config = AppConfig::load(&MemoryPreferences::new());
    assert_eq!(config, AppConfig::default());
    assert_eq!(config.log_filter, "info");
    assert_eq!(config.theme_key, "admin-theme");
}

#[test]
fn config_reads_log_filter_override() {
    let prefs = MemoryPreferences::new().with_value(LOG_LEVEL_KEY, " admin_board=debug ");
    let config = AppConfig::load(&prefs);
    assert_eq!(config.log_filter, "admin_board=debug");

    let blank = MemoryPreferences::new().with_value(LOG_LEVEL_KEY, "  ");
    assert_eq!(AppConfig::load(&blank).log_filter, "info");
}
