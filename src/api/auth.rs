//! Acting-user extraction.
//!
//! Session issuance and token validation belong to the upstream identity
//! layer; by the time a request reaches this gateway that layer has
//! resolved the caller and injected their id as the `x-user-id` header.
//! [`AuthUser`] turns the header into an explicit [`UserId`] argument so
//! no handler or service reads identity from ambient state.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::ids::UserId;
use crate::error::GatewayError;

/// Name of the trusted identity header.
pub const USER_ID_HEADER: &str = "x-user-id";

/// The authenticated caller of the current request.
#[derive(Debug, Clone, Copy)]
pub struct AuthUser(
    /// Resolved caller id.
    pub UserId,
);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or(GatewayError::Unauthorized)?;
        let id: i64 = raw.parse().map_err(|_| GatewayError::Unauthorized)?;
        Ok(Self(UserId::new(id)))
    }
}
