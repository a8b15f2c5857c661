//! Native `<select>` styled with daisyUI classes.

use crate::core::preference::SelectEntry;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    /// Entries in display order; the selected one is preset.
    #[prop_or_default]
    pub(crate) entries: Vec<SelectEntry>,
    #[prop_or_default]
    pub(crate) aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub(crate) disabled: bool,
    #[prop_or_default]
    pub(crate) class: Classes,
    #[prop_or_default]
    pub(crate) onchange: Callback<AttrValue>,
}

#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let onchange = {
        let onchange = props.onchange.clone();
        Callback::from(move |event: Event| {
            if let Some(target) = event.target_dyn_into::<web_sys::HtmlSelectElement>() {
                onchange.emit(target.value().into());
            }
        })
    };

    html! {
        <select
            class={classes!("select", "select-sm", "min-w-36", props.class.clone())}
            aria-label={props.aria_label.clone()}
            disabled={props.disabled}
            onchange={onchange}
        >
            {for props.entries.iter().map(|entry| html! {
                <option key={entry.value} value={entry.value} selected={entry.selected}>
                    {entry.label}
                </option>
            })}
        </select>
    }
}
