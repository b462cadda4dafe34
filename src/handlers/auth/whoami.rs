// handlers/auth/whoami.rs - GET /auth/whoami

use axum::Extension;
use serde::Serialize;

use crate::middleware::{ApiResponse, ApiResult, AuthUser};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Whoami {
    pub username: String,
    pub is_admin: bool,
}

/// GET /auth/whoami => { user: { username, isAdmin } }
///
/// Runs behind `ensure_logged_in`, so the identity is always present.
pub async fn whoami_get(Extension(user): Extension<AuthUser>) -> ApiResult<Whoami> {
    Ok(ApiResponse::success(
        "user",
        Whoami {
            username: user.username,
            is_admin: user.is_admin,
        },
    ))
}
