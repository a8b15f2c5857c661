//! Option tables and update payloads for the preference panel.
//!
//! # Design
//! - Keep the panel's behaviour here so it can be tested without a DOM.
//! - Every update is a copy of the current record plus one changed field,
//!   paired with the mask path naming that field.

use shortlink_api_models::{ColorTheme, Locale, UserSetting, UserSettingField};

/// Value/label pair rendered as one `<option>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PreferenceOption<T> {
    /// Enum value submitted on selection.
    pub value: T,
    /// Display label.
    pub label: &'static str,
}

/// Color theme choices in display order.
#[must_use]
pub const fn color_theme_options() -> [PreferenceOption<ColorTheme>; 3] {
    [
        PreferenceOption {
            value: ColorTheme::System,
            label: "System",
        },
        PreferenceOption {
            value: ColorTheme::Light,
            label: "Light",
        },
        PreferenceOption {
            value: ColorTheme::Dark,
            label: "Dark",
        },
    ]
}

/// Locale choices in display order. Labels are endonyms and are not translated.
#[must_use]
pub const fn locale_options() -> [PreferenceOption<Locale>; 2] {
    [
        PreferenceOption {
            value: Locale::En,
            label: "English",
        },
        PreferenceOption {
            value: Locale::Zh,
            label: "中文",
        },
    ]
}

/// One rendered `<option>`: wire value, display label, and selection state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectEntry {
    /// Wire name submitted by the select.
    pub value: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Whether this entry matches the current setting.
    pub selected: bool,
}

fn select_entries<T: PartialEq + Copy>(
    options: &[PreferenceOption<T>],
    current: T,
    wire: impl Fn(T) -> &'static str,
) -> Vec<SelectEntry> {
    options
        .iter()
        .map(|option| SelectEntry {
            value: wire(option.value),
            label: option.label,
            selected: option.value == current,
        })
        .collect()
}

/// Color theme select entries for `current`.
#[must_use]
pub fn color_theme_entries(current: &UserSetting) -> Vec<SelectEntry> {
    select_entries(&color_theme_options(), current.color_theme, ColorTheme::as_str)
}

/// Locale select entries for `current`.
#[must_use]
pub fn locale_entries(current: &UserSetting) -> Vec<SelectEntry> {
    select_entries(&locale_options(), current.locale, Locale::as_str)
}

/// Partial update submitted to the user-setting store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreferenceUpdate {
    /// Full record carrying the new value.
    pub setting: UserSetting,
    /// Field paths that changed.
    pub update_mask: Vec<String>,
}

impl PreferenceUpdate {
    fn single(setting: UserSetting, field: UserSettingField) -> Self {
        Self {
            setting,
            update_mask: vec![field.path().to_string()],
        }
    }
}

/// Build the update for a locale selection.
#[must_use]
pub fn select_locale(current: &UserSetting, locale: Locale) -> PreferenceUpdate {
    PreferenceUpdate::single(current.with_locale(locale), UserSettingField::Locale)
}

/// Build the update for a color theme selection.
#[must_use]
pub fn select_color_theme(current: &UserSetting, color_theme: ColorTheme) -> PreferenceUpdate {
    PreferenceUpdate::single(
        current.with_color_theme(color_theme),
        UserSettingField::ColorTheme,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn current() -> UserSetting {
        UserSetting {
            user_id: 1,
            locale: Locale::Zh,
            color_theme: ColorTheme::Dark,
        }
    }

    #[test]
    fn option_tables_match_display_order() {
        let themes: Vec<_> = color_theme_options()
            .iter()
            .map(|option| (option.value, option.label))
            .collect();
        assert_eq!(
            themes,
            vec![
                (ColorTheme::System, "System"),
                (ColorTheme::Light, "Light"),
                (ColorTheme::Dark, "Dark"),
            ]
        );
        let locales: Vec<_> = locale_options()
            .iter()
            .map(|option| (option.value, option.label))
            .collect();
        assert_eq!(locales, vec![(Locale::En, "English"), (Locale::Zh, "中文")]);
    }

    #[test]
    fn chinese_locale_selects_endonym_entry() {
        let entries = locale_entries(&current());
        let selected: Vec<_> = entries.iter().filter(|entry| entry.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "中文");
        assert_eq!(selected[0].value, "LOCALE_ZH");
    }

    #[test]
    fn rendered_entries_are_the_ordered_pairs() {
        let pairs = |entries: Vec<SelectEntry>| -> Vec<_> {
            entries
                .into_iter()
                .map(|entry| (entry.value, entry.label))
                .collect()
        };
        assert_eq!(
            pairs(color_theme_entries(&current())),
            vec![
                ("COLOR_THEME_SYSTEM", "System"),
                ("COLOR_THEME_LIGHT", "Light"),
                ("COLOR_THEME_DARK", "Dark"),
            ]
        );
        assert_eq!(
            pairs(locale_entries(&current())),
            vec![("LOCALE_EN", "English"), ("LOCALE_ZH", "中文")]
        );
    }

    #[test]
    fn each_enum_value_selects_exactly_one_entry() {
        for color_theme in ColorTheme::all() {
            let setting = current().with_color_theme(color_theme);
            let selected: Vec<_> = color_theme_entries(&setting)
                .into_iter()
                .filter(|entry| entry.selected)
                .map(|entry| entry.value)
                .collect();
            assert_eq!(selected, vec![color_theme.as_str()]);
        }
        for locale in Locale::all() {
            let setting = current().with_locale(locale);
            let selected: Vec<_> = locale_entries(&setting)
                .into_iter()
                .filter(|entry| entry.selected)
                .map(|entry| entry.value)
                .collect();
            assert_eq!(selected, vec![locale.as_str()]);
        }
    }

    #[test]
    fn color_theme_update_keeps_locale() {
        let update = select_color_theme(&current(), ColorTheme::Light);
        assert_eq!(update.setting.color_theme, ColorTheme::Light);
        assert_eq!(update.setting.locale, Locale::Zh);
        assert_eq!(update.update_mask, vec!["color_theme".to_string()]);
    }

    #[test]
    fn locale_update_keeps_color_theme() {
        let update = select_locale(&current(), Locale::En);
        assert_eq!(update.setting.locale, Locale::En);
        assert_eq!(update.setting.color_theme, ColorTheme::Dark);
        assert_eq!(update.update_mask, vec!["locale".to_string()]);
    }
}
