//! Settings page view.

use crate::core::store::AppStore;
use crate::features::settings::preference_section::PreferenceSection;
use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(SettingsPage)]
pub(crate) fn settings_page() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    let load_error = use_selector(|store: &AppStore| store.user.error.clone());

    html! {
        <main class="mx-auto w-full max-w-4xl flex flex-col gap-8 p-6">
            <h1 class="text-3xl font-bold">{bundle.text("settings.title", "Settings")}</h1>
            {(*load_error).as_ref().map(|_| html! {
                <div role="alert" class="alert alert-error alert-soft">
                    <span>{bundle.text("settings.load_failed", "Could not load your settings.")}</span>
                </div>
            }).unwrap_or_default()}
            <PreferenceSection />
        </main>
    }
}
