//! HTTP client for the user-settings API.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shortlink_api_models::{UpdateUserSettingRequest, UserSetting};
use thiserror::Error;

/// Failures returned by [`ApiClient`] calls.
#[derive(Debug, Error)]
pub(crate) enum ApiError {
    /// The request never produced a response.
    #[error("api transport failure during {operation}")]
    Transport {
        /// Client operation that failed.
        operation: &'static str,
        /// Underlying fetch error.
        source: gloo_net::Error,
    },
    /// The server answered with a non-success status.
    #[error("api returned status {status} during {operation}: {message}")]
    Status {
        /// Client operation that failed.
        operation: &'static str,
        /// HTTP status code.
        status: u16,
        /// Response body, if any.
        message: String,
    },
    /// The response body did not match the expected shape.
    #[error("api response decode failure during {operation}")]
    Decode {
        /// Client operation that failed.
        operation: &'static str,
        /// Underlying decode error.
        source: gloo_net::Error,
    },
}

#[derive(Clone, Debug)]
pub(crate) struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    pub(crate) async fn fetch_current_user_setting(&self) -> Result<UserSetting, ApiError> {
        const OPERATION: &str = "fetch_current_user_setting";
        let resp = Request::get(&self.url("/api/v2/users/me/setting"))
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                operation: OPERATION,
                source,
            })?;
        decode(OPERATION, resp).await
    }

    pub(crate) async fn update_user_setting(
        &self,
        request: &UpdateUserSettingRequest,
    ) -> Result<UserSetting, ApiError> {
        const OPERATION: &str = "update_user_setting";
        let path = format!("/api/v2/users/{}/setting", request.user_setting.user_id);
        let resp = Request::patch(&self.url(&path))
            .json(request)
            .map_err(|source| ApiError::Transport {
                operation: OPERATION,
                source,
            })?
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                operation: OPERATION,
                source,
            })?;
        decode(OPERATION, resp).await
    }
}

async fn decode<T: DeserializeOwned>(
    operation: &'static str,
    resp: Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let message = resp.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            operation,
            status,
            message,
        });
    }
    resp.json::<T>()
        .await
        .map_err(|source| ApiError::Decode { operation, source })
}
