//! Settings feature slice.
//!
//! # Design
//! - Keep page layout in the view module.
//! - Keep each settings section self-contained; sections read the store and
//!   write through the [`UserSettingStore`](crate::core::store::UserSettingStore) seam.

pub(crate) mod preference_section;
pub(crate) mod view;
