use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use kernel::model::id::UserId;
use shared::error::AppError;

pub const USER_ID_HEADER: &str = "X-Sharer-User-Id";

/// The acting user, taken on trust from the `X-Sharer-User-Id` header the
/// calling layer supplies. No authentication happens here; the header only
/// identifies who the caller claims to act as.
pub struct ActingUser(UserId);

impl ActingUser {
    pub fn id(&self) -> UserId {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.parse().ok())
            .ok_or(AppError::InvalidUserIdHeader)?;
        Ok(Self(user_id))
    }
}
