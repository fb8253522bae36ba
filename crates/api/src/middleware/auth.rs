//! JWT-based authorization gate, expressed as an Axum extractor.
//!
//! Declaring [`AuthUser`] as a handler parameter makes the check run before
//! the handler body and short-circuit the request with 401 when the caller's
//! credential is missing or invalid.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use worklog_core::error::CoreError;
use worklog_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the request's access token.
///
/// The token is read from the `x-auth-token` header if present, otherwise
/// from `Authorization: Bearer <token>`. Legacy clients send the literal
/// strings `null`/`undefined` when they have no token; those are treated as
/// absent.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.sub`).
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = |name: &str| {
            parts
                .headers
                .get(name)
                .and_then(|v| v.to_str().ok())
        };

        let token = header("x-auth-token")
            .or_else(|| header("authorization").and_then(|h| h.strip_prefix("Bearer ")))
            .filter(|t| !t.is_empty() && *t != "null" && *t != "undefined")
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "No token, authorization denied".into(),
                ))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
        })
    }
}
