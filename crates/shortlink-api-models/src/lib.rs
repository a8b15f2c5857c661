#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::multiple_crate_versions)]
//! Shared HTTP DTOs for the Shortlink user-settings API.
//!
//! The wire encoding follows the backend's protobuf JSON mapping: camelCase
//! field names and fully-qualified enum value names (`LOCALE_EN`). Partial
//! updates travel as a full [`UserSetting`] plus a [`FieldMask`] naming the
//! fields that changed.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting user-setting payloads.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ModelError {
    /// An update was submitted without any field paths.
    #[error("update mask is required")]
    EmptyUpdateMask,
    /// A field path did not name a known user-setting field.
    #[error("unknown user setting field `{path}`")]
    UnknownField {
        /// Offending field path.
        path: String,
    },
    /// An enum wire value was not recognised.
    #[error("unknown {kind} value `{value}`")]
    UnknownValue {
        /// Enum being parsed.
        kind: &'static str,
        /// Raw value that failed to parse.
        value: String,
    },
}

/// Display language stored on the user's settings record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Locale {
    /// English.
    #[default]
    #[serde(rename = "LOCALE_EN")]
    En,
    /// Chinese (Simplified).
    #[serde(rename = "LOCALE_ZH")]
    Zh,
}

impl Locale {
    /// All locales in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::En, Self::Zh]
    }

    /// Wire name of the locale.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::En => "LOCALE_EN",
            Self::Zh => "LOCALE_ZH",
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|locale| locale.as_str() == value)
            .ok_or_else(|| ModelError::UnknownValue {
                kind: "locale",
                value: value.to_string(),
            })
    }
}

/// UI appearance mode stored on the user's settings record.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum ColorTheme {
    /// Follow the operating system preference.
    #[default]
    #[serde(rename = "COLOR_THEME_SYSTEM")]
    System,
    /// Always light.
    #[serde(rename = "COLOR_THEME_LIGHT")]
    Light,
    /// Always dark.
    #[serde(rename = "COLOR_THEME_DARK")]
    Dark,
}

impl ColorTheme {
    /// All color themes in display order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::System, Self::Light, Self::Dark]
    }

    /// Wire name of the color theme.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "COLOR_THEME_SYSTEM",
            Self::Light => "COLOR_THEME_LIGHT",
            Self::Dark => "COLOR_THEME_DARK",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColorTheme {
    type Err = ModelError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|theme| theme.as_str() == value)
            .ok_or_else(|| ModelError::UnknownValue {
                kind: "color_theme",
                value: value.to_string(),
            })
    }
}

/// Per-user preference record owned by the backend.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserSetting {
    /// Owning user identifier.
    pub user_id: i32,
    /// Selected display language.
    #[serde(default)]
    pub locale: Locale,
    /// Selected appearance mode.
    #[serde(default)]
    pub color_theme: ColorTheme,
}

impl UserSetting {
    /// Copy of this record with only the locale replaced.
    #[must_use]
    pub const fn with_locale(&self, locale: Locale) -> Self {
        Self { locale, ..*self }
    }

    /// Copy of this record with only the color theme replaced.
    #[must_use]
    pub const fn with_color_theme(&self, color_theme: ColorTheme) -> Self {
        Self {
            color_theme,
            ..*self
        }
    }

    /// Copy the fields named by `mask` from `incoming` into `self`.
    ///
    /// The mask is validated in full before anything is written, so a rejected
    /// update leaves the record untouched. `user_id` is never updatable.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyUpdateMask`] when the mask names no fields and
    /// [`ModelError::UnknownField`] when a path is not a user-setting field.
    pub fn apply_update(&mut self, incoming: &Self, mask: &FieldMask) -> Result<(), ModelError> {
        let fields = mask.fields()?;
        for field in fields {
            match field {
                UserSettingField::Locale => self.locale = incoming.locale,
                UserSettingField::ColorTheme => self.color_theme = incoming.color_theme,
            }
        }
        Ok(())
    }
}

/// Updatable fields of a [`UserSetting`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserSettingField {
    /// The `locale` field.
    Locale,
    /// The `color_theme` field.
    ColorTheme,
}

impl UserSettingField {
    /// Field-mask path for the field.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Locale => "locale",
            Self::ColorTheme => "color_theme",
        }
    }

    /// Resolve a field-mask path.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "locale" => Some(Self::Locale),
            "color_theme" => Some(Self::ColorTheme),
            _ => None,
        }
    }
}

/// Set of field paths included in a partial update.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct FieldMask {
    /// Snake-case field paths.
    #[serde(default)]
    pub paths: Vec<String>,
}

impl FieldMask {
    /// Build a mask naming the given fields.
    #[must_use]
    pub fn of(fields: &[UserSettingField]) -> Self {
        Self {
            paths: fields.iter().map(|field| field.path().to_string()).collect(),
        }
    }

    /// Resolve every path into a typed field.
    ///
    /// # Errors
    ///
    /// Fails when the mask is empty or names an unknown field.
    pub fn fields(&self) -> Result<Vec<UserSettingField>, ModelError> {
        if self.paths.is_empty() {
            return Err(ModelError::EmptyUpdateMask);
        }
        self.paths
            .iter()
            .map(|path| {
                UserSettingField::from_path(path)
                    .ok_or_else(|| ModelError::UnknownField { path: path.clone() })
            })
            .collect()
    }
}

impl From<Vec<String>> for FieldMask {
    fn from(paths: Vec<String>) -> Self {
        Self { paths }
    }
}

/// Request body for `PATCH /api/v2/users/{id}/setting`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSettingRequest {
    /// Full record carrying the new values.
    pub user_setting: UserSetting,
    /// Fields of `user_setting` the server should apply.
    pub update_mask: FieldMask,
}
