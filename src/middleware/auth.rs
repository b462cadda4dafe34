use std::collections::HashMap;

use axum::{
    extract::{Path, Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::app::AppState;
use crate::auth::{verify_jwt, Claims};
use crate::error::ApiError;

/// Identity decoded from a verified bearer token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthUser {
    pub username: String,
    pub is_admin: bool,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            username: claims.username,
            is_admin: claims.is_admin,
        }
    }
}

/// Verifies the bearer token when one is sent and stores the [`AuthUser`] in
/// the request extensions. A missing or invalid token is not an error here;
/// the request continues anonymously and the gates decide.
pub async fn authenticate_jwt(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    if let Some(token) = extract_bearer_token(request.headers()) {
        match verify_jwt(&state.config.security.jwt_secret, &token) {
            Ok(claims) => {
                let user = AuthUser::from(claims);
                tracing::debug!("Authenticated {} (admin: {})", user.username, user.is_admin);
                request.extensions_mut().insert(user);
            }
            Err(e) => tracing::warn!("Ignoring bearer token: {}", e),
        }
    }

    next.run(request).await
}

/// Token from `Authorization: Bearer <token>` (either case of the scheme).
pub fn extract_bearer_token(headers: &HeaderMap) -> Option<String> {
    let auth_str = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = auth_str
        .strip_prefix("Bearer ")
        .or_else(|| auth_str.strip_prefix("bearer "))?
        .trim();

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

pub fn require_logged_in(user: Option<&AuthUser>) -> Result<&AuthUser, ApiError> {
    user.ok_or_else(|| ApiError::unauthorized("Authentication required"))
}

pub fn require_admin(user: Option<&AuthUser>) -> Result<&AuthUser, ApiError> {
    match user {
        Some(user) if user.is_admin => Ok(user),
        _ => Err(ApiError::unauthorized("Admin access required")),
    }
}

pub fn require_admin_or_self<'a>(user: Option<&'a AuthUser>, username: &str) -> Result<&'a AuthUser, ApiError> {
    match user {
        Some(user) if user.is_admin || user.username == username => Ok(user),
        _ => Err(ApiError::unauthorized("Admin or account owner access required")),
    }
}

/// Gate: any authenticated user.
pub async fn ensure_logged_in(request: Request, next: Next) -> Result<Response, ApiError> {
    require_logged_in(request.extensions().get::<AuthUser>())?;
    Ok(next.run(request).await)
}

/// Gate: authenticated admin.
pub async fn ensure_admin(request: Request, next: Next) -> Result<Response, ApiError> {
    require_admin(request.extensions().get::<AuthUser>())?;
    Ok(next.run(request).await)
}

/// Gate: admin, or the user named by the route's `:username`.
pub async fn ensure_admin_or_correct_user(
    Path(params): Path<HashMap<String, String>>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let username = params.get("username").map(String::as_str).unwrap_or_default();
    require_admin_or_self(request.extensions().get::<AuthUser>(), username)?;
    Ok(next.run(request).await)
}
