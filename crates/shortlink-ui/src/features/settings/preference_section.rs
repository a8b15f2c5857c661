//! Language and color theme selectors.
//!
//! # Design
//! - Render straight from the store snapshot; keep no local state.
//! - Each change is dispatched without blocking the render, and the two
//!   selectors may have updates in flight at the same time.
//! - Update failures are not handled here; they surface on the console.

use crate::app::AppUserStore;
use crate::components::{BetaBadge, Select};
use crate::core::preference::{color_theme_entries, locale_entries};
use crate::core::store::{
    AppStore, StoreError, handle_select_color_theme, handle_select_locale,
};
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use gloo::console;
use shortlink_api_models::{ColorTheme, Locale, UserSettingField};
use std::future::Future;
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(PreferenceSection)]
pub(crate) fn preference_section() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let store = use_context::<AppUserStore>();
    let setting = use_selector(|store: &AppStore| store.user.setting);

    let Some(store) = store else {
        console::error!("preference section rendered without a user store");
        return html! {};
    };
    let current = (*setting).unwrap_or_default();
    let loaded = setting.is_some();

    let on_select_color_theme = {
        let store = store.clone();
        Callback::from(move |value: AttrValue| {
            let Ok(theme) = value.as_str().parse::<ColorTheme>() else {
                return;
            };
            let store = store.clone();
            dispatch(UserSettingField::ColorTheme, async move {
                handle_select_color_theme(&store, theme).await
            });
        })
    };

    let on_select_locale = {
        let store = store.clone();
        Callback::from(move |value: AttrValue| {
            let Ok(locale) = value.as_str().parse::<Locale>() else {
                return;
            };
            let store = store.clone();
            dispatch(UserSettingField::Locale, async move {
                handle_select_locale(&store, locale).await
            });
        })
    };

    let color_theme_label = bundle.text("settings.preference.color-theme", "Color theme");
    let language_label = bundle.text("common.language", "Language");

    html! {
        <section class="w-full flex flex-col sm:flex-row justify-start items-start gap-4 sm:gap-x-16">
            <p class="sm:w-1/4 text-2xl shrink-0 font-semibold text-base-content">
                {bundle.text("settings.preference.self", "Preference")}
            </p>
            <div class="w-full sm:w-auto grow flex flex-col justify-start items-start gap-4">
                <div class="w-full flex flex-row justify-between items-center">
                    <div class="flex flex-row justify-start items-center gap-x-1">
                        <span class="text-base-content/80">{color_theme_label.clone()}</span>
                    </div>
                    <Select
                        entries={color_theme_entries(&current)}
                        aria_label={Some(AttrValue::from(color_theme_label))}
                        disabled={!loaded}
                        onchange={on_select_color_theme}
                    />
                </div>
                <div class="w-full flex flex-row justify-between items-center">
                    <div class="flex flex-row justify-start items-center gap-x-1">
                        <span class="text-base-content/80">{language_label.clone()}</span>
                        <BetaBadge />
                    </div>
                    <Select
                        entries={locale_entries(&current)}
                        aria_label={Some(AttrValue::from(language_label))}
                        disabled={!loaded}
                        onchange={on_select_locale}
                    />
                </div>
            </div>
        </section>
    }
}

/// Fire the update and report a rejection on the console.
fn dispatch<F, T>(field: UserSettingField, update: F)
where
    F: Future<Output = Result<T, StoreError>> + 'static,
{
    yew::platform::spawn_local(async move {
        if let Err(err) = update.await {
            console::error!("user setting update failed", field.path(), err.to_string());
        }
    });
}
