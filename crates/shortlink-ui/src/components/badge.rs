//! Small "beta" marker shown beside features still settling in.

use crate::i18n::{DEFAULT_LOCALE, TranslationBundle};
use yew::prelude::*;

#[function_component(BetaBadge)]
pub(crate) fn beta_badge() -> Html {
    let bundle = use_context::<TranslationBundle>()
        .unwrap_or_else(|| TranslationBundle::new(DEFAULT_LOCALE));
    html! {
        <span class="badge badge-xs badge-outline badge-accent uppercase">
            {bundle.text("common.beta", "Beta")}
        </span>
    }
}
