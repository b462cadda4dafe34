// handlers/users.rs - /users routes, all behind the admin-or-self gate

use axum::extract::{Path, State};

use crate::app::AppState;
use crate::database::models::UserDetail;
use crate::database::users;
use crate::middleware::{ApiResponse, ApiResult};

use super::jobs::parse_job_id;

/// GET /users/:username => { user: { username, firstName, lastName, email, isAdmin, jobs } }
pub async fn get(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult<UserDetail> {
    let user = users::get(&state.pool, &username).await?;
    Ok(ApiResponse::success("user", user))
}

/// DELETE /users/:username => { deleted: username }
pub async fn remove(State(state): State<AppState>, Path(username): Path<String>) -> ApiResult<String> {
    users::remove(&state.pool, &username).await?;
    Ok(ApiResponse::success("deleted", username))
}

/// POST /users/:username/jobs/:id => { applied: jobId }
pub async fn apply(
    State(state): State<AppState>,
    Path((username, id)): Path<(String, String)>,
) -> ApiResult<i32> {
    let job_id = parse_job_id(&id)?;
    users::apply_to_job(&state.pool, &username, job_id).await?;
    Ok(ApiResponse::created("applied", job_id))
}
