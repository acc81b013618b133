//! Persistence helpers for UI preferences and the settings slice.

use crate::core::theme::ThemeMode;
use crate::features::settings::state::{
    DNS_CONCURRENCY_MAX, DNS_CONCURRENCY_MIN, RDAP_CONCURRENCY_MAX, RDAP_CONCURRENCY_MIN,
    SettingsState, sort_providers,
};
use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;

pub(crate) const THEME_KEY: &str = "domainlens.theme";
pub(crate) const LOCALE_KEY: &str = "domainlens.locale";
pub(crate) const SETTINGS_KEY: &str = "domainlens.settings";

pub(crate) fn load_theme() -> ThemeMode {
    if let Ok(value) = LocalStorage::get::<String>(THEME_KEY) {
        return match value.as_str() {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        };
    }
    ThemeMode::Light
}

pub(crate) fn persist_theme(theme: ThemeMode) {
    LocalStorage::set(THEME_KEY, theme.as_str()).ok();
}

pub(crate) fn load_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Some(locale) = LocaleCode::from_lang_tag(&value) {
            return locale;
        }
    }
    if let Some(lang) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&lang) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_locale(locale: LocaleCode) {
    LocalStorage::set(LOCALE_KEY, locale.code()).ok();
}

/// Load the persisted settings slice, normalizing stale values.
///
/// Provider lists are re-sorted into canonical order; out-of-range
/// concurrency values from older builds are clamped. An empty provider list
/// falls back to defaults by returning `None`.
pub(crate) fn load_settings() -> Option<SettingsState> {
    let mut settings = LocalStorage::get::<SettingsState>(SETTINGS_KEY).ok()?;
    settings.doh_providers = sort_providers(&settings.doh_providers);
    if settings.doh_providers.is_empty() {
        return None;
    }
    settings.rdap_concurrency = settings
        .rdap_concurrency
        .clamp(RDAP_CONCURRENCY_MIN, RDAP_CONCURRENCY_MAX);
    settings.dns_concurrency = settings
        .dns_concurrency
        .clamp(DNS_CONCURRENCY_MIN, DNS_CONCURRENCY_MAX);
    Some(settings)
}

pub(crate) fn persist_settings(settings: &SettingsState) {
    LocalStorage::set(SETTINGS_KEY, settings).ok();
}
