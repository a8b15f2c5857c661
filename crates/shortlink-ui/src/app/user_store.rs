//! Backend-backed [`UserSettingStore`] over the app's yewdux store.
//!
//! # Design
//! - Reads come from the yewdux snapshot; writes go to the API and only the
//!   masked fields of the response are merged back into the snapshot.
//! - Concurrent updates are not serialized here; each carries its own mask, so
//!   responses may land in any order.

use crate::app::preferences::persist_cached_setting;
use crate::core::store::{
    AppStore, StoreError, UserSettingStore, merge_user_setting, select_user_setting,
};
use crate::services::api::ApiClient;
use async_trait::async_trait;
use shortlink_api_models::{FieldMask, UpdateUserSettingRequest, UserSetting};
use std::rc::Rc;
use yewdux::prelude::Dispatch;

/// Shared handle passed to views through context.
#[derive(Clone)]
pub(crate) struct AppUserStore {
    dispatch: Dispatch<AppStore>,
    client: Rc<ApiClient>,
}

impl AppUserStore {
    pub(crate) fn new(client: Rc<ApiClient>) -> Self {
        Self {
            dispatch: Dispatch::<AppStore>::new(),
            client,
        }
    }

    pub(crate) fn client(&self) -> Rc<ApiClient> {
        Rc::clone(&self.client)
    }
}

impl PartialEq for AppUserStore {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.client, &other.client)
    }
}

#[async_trait(?Send)]
impl UserSettingStore for AppUserStore {
    fn current_user_setting(&self) -> UserSetting {
        select_user_setting(&self.dispatch.get().user)
    }

    async fn update_user_setting(
        &self,
        updated: UserSetting,
        update_mask: Vec<String>,
    ) -> Result<UserSetting, StoreError> {
        let update_mask = FieldMask::from(update_mask);
        update_mask
            .fields()
            .map_err(|source| StoreError::Invalid { source })?;
        let request = UpdateUserSettingRequest {
            user_setting: updated,
            update_mask: update_mask.clone(),
        };
        let stored = self
            .client
            .update_user_setting(&request)
            .await
            .map_err(|err| StoreError::Backend {
                operation: "update_user_setting",
                detail: err.to_string(),
            })?;
        let mut merged = Ok(stored);
        self.dispatch.reduce_mut(|store| {
            merged = merge_user_setting(&mut store.user, &stored, &update_mask);
        });
        let merged = merged.map_err(|source| StoreError::Invalid { source })?;
        persist_cached_setting(&merged);
        Ok(stored)
    }
}
