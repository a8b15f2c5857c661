//! Persistence and environment helpers for the app shell.

use crate::i18n::{DEFAULT_LOCALE, LocaleCode};
use gloo::console;
use gloo::storage::{LocalStorage, Storage};
use gloo::utils::window;
use shortlink_api_models::{Locale, UserSetting};
use web_sys::Url;

pub(crate) const LOCALE_KEY: &str = "shortlink.locale";

/// Locale for first paint: last stored choice, then the browser language.
pub(crate) fn load_cached_locale() -> LocaleCode {
    if let Ok(value) = LocalStorage::get::<String>(LOCALE_KEY) {
        if let Ok(locale) = value.parse::<Locale>() {
            return locale.into();
        }
    }
    if let Some(nav) = window().navigator().language() {
        if let Some(locale) = LocaleCode::from_lang_tag(&nav) {
            return locale;
        }
    }
    DEFAULT_LOCALE
}

pub(crate) fn persist_cached_setting(setting: &UserSetting) {
    if let Err(err) = LocalStorage::set(LOCALE_KEY, setting.locale.as_str()) {
        console::error!("storage operation failed", "set", LOCALE_KEY, err.to_string());
    }
}

/// API origin for the current page; the dev server port 8080 maps to the API on 7070.
pub(crate) fn api_base_url() -> String {
    let href = window()
        .location()
        .href()
        .unwrap_or_else(|_| "http://localhost:8080".to_string());

    if let Ok(url) = Url::new(&href) {
        let mut base = format!("{}//{}", url.protocol(), url.hostname());
        let port = url.port();
        let mapped_port = match port.as_str() {
            "" => None,
            "8080" => Some("7070"),
            other => Some(other),
        };
        if let Some(port) = mapped_port {
            base.push(':');
            base.push_str(port);
        }
        return base;
    }

    "http://localhost:7070".to_string()
}
