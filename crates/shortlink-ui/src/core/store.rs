//! App-wide yewdux store and the user-setting store seam.
//!
//! # Design
//! - Keep the current user's settings in one slice; views read it through selectors.
//! - Writes go through [`UserSettingStore`] so the preference handlers stay testable
//!   without a browser.
//! - Handlers return the store's result untouched; callers decide whether to report it.

use crate::core::preference::{select_color_theme, select_locale};
use async_trait::async_trait;
use shortlink_api_models::{ColorTheme, FieldMask, Locale, ModelError, UserSetting};
use thiserror::Error;
use yewdux::store::Store;

/// Global application store for shared state.
#[derive(Clone, Debug, PartialEq, Eq, Store, Default)]
pub struct AppStore {
    /// Current user's settings.
    pub user: UserSlice,
}

/// Settings record of the signed-in user plus its load status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserSlice {
    /// Last record returned by the backend.
    pub setting: Option<UserSetting>,
    /// Initial fetch in flight.
    pub loading: bool,
    /// Most recent load failure.
    pub error: Option<String>,
}

/// Settings the UI should render; defaults until the backend answers.
#[must_use]
pub fn select_user_setting(slice: &UserSlice) -> UserSetting {
    slice.setting.unwrap_or_default()
}

/// Mark the initial fetch as started.
pub fn begin_user_load(slice: &mut UserSlice) {
    slice.loading = true;
    slice.error = None;
}

/// Replace the stored record with the backend's copy.
pub fn set_user_setting(slice: &mut UserSlice, setting: UserSetting) {
    slice.setting = Some(setting);
    slice.loading = false;
    slice.error = None;
}

/// Record a failed fetch. A previously loaded record is kept.
pub fn set_user_error(slice: &mut UserSlice, message: impl Into<String>) {
    slice.loading = false;
    slice.error = Some(message.into());
}

/// Fold an update response into the snapshot, copying only the fields in `mask`.
///
/// Responses to concurrent updates can arrive in any order, and each one still
/// carries the other fields as they were when the backend applied it. Taking
/// only the masked fields keeps a late response from reverting a newer value.
/// With no snapshot yet, the response is taken whole.
///
/// # Errors
///
/// Fails when `mask` is empty or names an unknown field; the snapshot is left
/// untouched in that case.
pub fn merge_user_setting(
    slice: &mut UserSlice,
    stored: &UserSetting,
    mask: &FieldMask,
) -> Result<UserSetting, ModelError> {
    let Some(current) = slice.setting.as_mut() else {
        mask.fields()?;
        set_user_setting(slice, *stored);
        return Ok(*stored);
    };
    current.apply_update(stored, mask)?;
    Ok(*current)
}

/// Failures surfaced by a [`UserSettingStore`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The update was rejected before it reached the backend.
    #[error("invalid user setting update: {source}")]
    Invalid {
        /// Validation failure.
        source: ModelError,
    },
    /// The backend call failed.
    #[error("user setting request failed: {detail}")]
    Backend {
        /// Store operation that failed.
        operation: &'static str,
        /// Rendered backend error.
        detail: String,
    },
}

/// Read/write access to the current user's settings.
#[async_trait(?Send)]
pub trait UserSettingStore {
    /// Current settings, read synchronously.
    fn current_user_setting(&self) -> UserSetting;

    /// Submit `updated`, applying only the fields named in `update_mask`.
    ///
    /// Returns the record as stored by the backend.
    async fn update_user_setting(
        &self,
        updated: UserSetting,
        update_mask: Vec<String>,
    ) -> Result<UserSetting, StoreError>;
}

/// Apply a locale selection through `store`.
///
/// # Errors
///
/// Propagates the store's failure unchanged.
pub async fn handle_select_locale<S>(store: &S, locale: Locale) -> Result<UserSetting, StoreError>
where
    S: UserSettingStore + ?Sized,
{
    let update = select_locale(&store.current_user_setting(), locale);
    store
        .update_user_setting(update.setting, update.update_mask)
        .await
}

/// Apply a color theme selection through `store`.
///
/// # Errors
///
/// Propagates the store's failure unchanged.
pub async fn handle_select_color_theme<S>(
    store: &S,
    color_theme: ColorTheme,
) -> Result<UserSetting, StoreError>
where
    S: UserSettingStore + ?Sized,
{
    let update = select_color_theme(&store.current_user_setting(), color_theme);
    store
        .update_user_setting(update.setting, update.update_mask)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use shortlink_api_models::UserSettingField;
    use std::cell::RefCell;

    /// In-memory store that applies masks the way the backend does.
    struct RecordingStore {
        stored: RefCell<UserSetting>,
        calls: RefCell<Vec<(UserSetting, Vec<String>)>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new(setting: UserSetting) -> Self {
            Self {
                stored: RefCell::new(setting),
                calls: RefCell::new(Vec::new()),
                fail: false,
            }
        }

        fn failing(setting: UserSetting) -> Self {
            Self {
                fail: true,
                ..Self::new(setting)
            }
        }
    }

    #[async_trait(?Send)]
    impl UserSettingStore for RecordingStore {
        fn current_user_setting(&self) -> UserSetting {
            *self.stored.borrow()
        }

        async fn update_user_setting(
            &self,
            updated: UserSetting,
            update_mask: Vec<String>,
        ) -> Result<UserSetting, StoreError> {
            self.calls.borrow_mut().push((updated, update_mask.clone()));
            if self.fail {
                return Err(StoreError::Backend {
                    operation: "update_user_setting",
                    detail: "status 500".to_string(),
                });
            }
            let mut stored = self.stored.borrow_mut();
            stored
                .apply_update(&updated, &FieldMask::from(update_mask))
                .map_err(|source| StoreError::Invalid { source })?;
            Ok(*stored)
        }
    }

    fn seeded() -> UserSetting {
        UserSetting {
            user_id: 11,
            locale: Locale::Zh,
            color_theme: ColorTheme::System,
        }
    }

    #[tokio::test]
    async fn selecting_light_issues_one_color_theme_update() {
        let store = RecordingStore::new(seeded());
        let stored = handle_select_color_theme(&store, ColorTheme::Light)
            .await
            .expect("update succeeds");

        let calls = store.calls.borrow();
        assert_eq!(calls.len(), 1);
        let (payload, mask) = &calls[0];
        assert_eq!(payload.color_theme, ColorTheme::Light);
        assert_eq!(payload.locale, Locale::Zh);
        assert_eq!(mask, &vec!["color_theme".to_string()]);
        assert_eq!(stored.color_theme, ColorTheme::Light);
    }

    #[tokio::test]
    async fn selecting_locale_never_touches_color_theme() {
        let store = RecordingStore::new(seeded());
        handle_select_locale(&store, Locale::En)
            .await
            .expect("update succeeds");

        let calls = store.calls.borrow();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.color_theme, ColorTheme::System);
        assert_eq!(calls[0].0.locale, Locale::En);
        assert_eq!(calls[0].1, vec!["locale".to_string()]);
    }

    #[tokio::test]
    async fn independent_updates_each_carry_a_single_field() {
        let store = RecordingStore::new(seeded());
        let (locale, theme) = tokio::join!(
            handle_select_locale(&store, Locale::En),
            handle_select_color_theme(&store, ColorTheme::Dark),
        );
        assert!(locale.is_ok());
        assert!(theme.is_ok());
        assert_eq!(store.calls.borrow().len(), 2);
        assert_eq!(
            store.current_user_setting(),
            UserSetting {
                user_id: 11,
                locale: Locale::En,
                color_theme: ColorTheme::Dark,
            }
        );
    }

    #[tokio::test]
    async fn store_failure_propagates_to_caller() {
        let store = RecordingStore::failing(seeded());
        let err = handle_select_locale(&store, Locale::En)
            .await
            .expect_err("backend failure surfaces");
        assert!(matches!(err, StoreError::Backend { .. }));
        assert_eq!(store.calls.borrow().len(), 1);
        assert_eq!(store.current_user_setting(), seeded());
    }

    #[test]
    fn out_of_order_responses_keep_both_fields() {
        let mut slice = UserSlice::default();
        set_user_setting(
            &mut slice,
            UserSetting {
                user_id: 11,
                locale: Locale::En,
                color_theme: ColorTheme::System,
            },
        );

        // The backend applied the locale update first, then the theme update,
        // but the theme response is delivered first.
        let theme_response = UserSetting {
            user_id: 11,
            locale: Locale::Zh,
            color_theme: ColorTheme::Dark,
        };
        let locale_response = UserSetting {
            user_id: 11,
            locale: Locale::Zh,
            color_theme: ColorTheme::System,
        };
        merge_user_setting(
            &mut slice,
            &theme_response,
            &FieldMask::of(&[UserSettingField::ColorTheme]),
        )
        .expect("theme mask is valid");
        let merged = merge_user_setting(
            &mut slice,
            &locale_response,
            &FieldMask::of(&[UserSettingField::Locale]),
        )
        .expect("locale mask is valid");

        let expected = UserSetting {
            user_id: 11,
            locale: Locale::Zh,
            color_theme: ColorTheme::Dark,
        };
        assert_eq!(merged, expected);
        assert_eq!(slice.setting, Some(expected));
    }

    #[test]
    fn merge_without_snapshot_takes_the_response() {
        let mut slice = UserSlice::default();
        begin_user_load(&mut slice);
        let merged = merge_user_setting(
            &mut slice,
            &seeded(),
            &FieldMask::of(&[UserSettingField::Locale]),
        )
        .expect("mask is valid");
        assert_eq!(merged, seeded());
        assert_eq!(slice.setting, Some(seeded()));
        assert!(!slice.loading);
    }

    #[test]
    fn merge_rejects_unknown_path_and_keeps_snapshot() {
        let mut slice = UserSlice::default();
        set_user_setting(&mut slice, seeded());
        let err = merge_user_setting(
            &mut slice,
            &UserSetting::default(),
            &FieldMask::from(vec!["avatar".to_string()]),
        )
        .expect_err("unknown path must fail");
        assert_eq!(slice.setting, Some(seeded()));

        let message = StoreError::Invalid { source: err }.to_string();
        assert!(message.contains("avatar"), "{message}");
    }

    #[test]
    fn reducers_track_load_lifecycle() {
        let mut slice = UserSlice::default();
        assert_eq!(select_user_setting(&slice), UserSetting::default());

        begin_user_load(&mut slice);
        assert!(slice.loading);

        set_user_setting(&mut slice, seeded());
        assert!(!slice.loading);
        assert_eq!(select_user_setting(&slice), seeded());

        set_user_error(&mut slice, "offline");
        assert_eq!(slice.error.as_deref(), Some("offline"));
        assert_eq!(slice.setting, Some(seeded()));
    }
}
