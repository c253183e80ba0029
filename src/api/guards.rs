use async_trait::async_trait;
use axum::extract::{FromRequestParts, State};
use axum::http::request::Parts;

use crate::api::errors::ApiError;
use crate::core::state::AppState;

pub(crate) const ADMIN_KEY_HEADER: &str = "x-admin-key";

/// Write operations on files and schedules are admin-only. The session layer
/// in front of this API exchanges the admin login for the shared key carried
/// in the `x-admin-key` header.
pub(crate) struct RequireAdmin;

#[async_trait]
impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let State(app_state) = State::<AppState>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::internal(e, "Failed to access application state"))?;

        let configured = &app_state.settings().admin().api_key;
        if configured.is_empty() {
            return Err(ApiError::Unauthorized("Admin access is not configured"));
        }

        let provided = parts
            .headers
            .get(ADMIN_KEY_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(ApiError::Unauthorized("Admin credentials required"))?;

        if provided != configured {
            return Err(ApiError::Unauthorized("Invalid admin credentials"));
        }

        Ok(RequireAdmin)
    }
}
