//! `AuthUser` extractor — reads the caller identity from the `x-user-id`
//! header set by the authenticating reverse proxy.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use uuid::Uuid;

use drivevault_core::error::AppError;

use crate::error::ApiError;

/// Extracted authenticated user identity available in handlers.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(pub Uuid);

impl AuthUser {
    /// Returns the caller's user ID.
    pub fn user_id(&self) -> Uuid {
        self.0
    }
}

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get("x-user-id")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::from(AppError::unauthorized("Missing x-user-id header")))?;

        let user_id = raw
            .parse::<Uuid>()
            .map_err(|_| ApiError::from(AppError::unauthorized("Invalid x-user-id header")))?;

        Ok(AuthUser(user_id))
    }
}
