//! App shell: boot, initial settings fetch, and context wiring.

use crate::core::store::{AppStore, begin_user_load, set_user_error, set_user_setting};
use crate::features::settings::view::SettingsPage;
use crate::i18n::{LocaleCode, TranslationBundle};
use crate::services::api::ApiClient;
use gloo::console;
use preferences::{api_base_url, load_cached_locale, persist_cached_setting};
use std::rc::Rc;
use yew::prelude::*;
use yewdux::prelude::{Dispatch, use_selector};

mod preferences;
mod user_store;

pub(crate) use user_store::AppUserStore;

#[function_component(ShortlinkApp)]
pub(crate) fn shortlink_app() -> Html {
    let dispatch = Dispatch::<AppStore>::new();
    let user_store = use_memo(
        |_| AppUserStore::new(Rc::new(ApiClient::new(api_base_url()))),
        (),
    );
    let stored_locale = use_selector(|store: &AppStore| store.user.setting.map(|s| s.locale));
    let locale = (*stored_locale).map_or_else(load_cached_locale, LocaleCode::from);
    let bundle = use_memo(move |_| TranslationBundle::new(locale), locale);

    {
        let dispatch = dispatch.clone();
        let client = user_store.client();
        use_effect_with_deps(
            move |_| {
                dispatch.reduce_mut(|store| begin_user_load(&mut store.user));
                yew::platform::spawn_local(async move {
                    match client.fetch_current_user_setting().await {
                        Ok(setting) => {
                            persist_cached_setting(&setting);
                            dispatch.reduce_mut(|store| set_user_setting(&mut store.user, setting));
                        }
                        Err(err) => {
                            let detail = err.to_string();
                            console::error!("user setting fetch failed", detail.as_str());
                            dispatch.reduce_mut(|store| {
                                set_user_error(&mut store.user, detail.as_str());
                            });
                        }
                    }
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<TranslationBundle> context={(*bundle).clone()}>
            <ContextProvider<AppUserStore> context={(*user_store).clone()}>
                <SettingsPage />
            </ContextProvider<AppUserStore>>
        </ContextProvider<TranslationBundle>>
    }
}

/// Mount the app on `#root`, or on `<body>` when no root element exists.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<ShortlinkApp>::with_root(root).render();
    } else {
        yew::Renderer::<ShortlinkApp>::new().render();
    }
}
