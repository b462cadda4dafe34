// handlers/jobs.rs - /jobs routes

use axum::extract::{Path, State};

use crate::api::{ApiQuery, ValidJson};
use crate::app::AppState;
use crate::database::jobs;
use crate::database::models::{Job, JobUpdate, NewJob};
use crate::error::ApiError;
use crate::filter::JobFilter;
use crate::middleware::{ApiResponse, ApiResult};

/// Ids that are not integers can't name a job, so they read as missing.
pub(crate) fn parse_job_id(raw: &str) -> Result<i32, ApiError> {
    raw.parse::<i32>()
        .map_err(|_| ApiError::not_found(format!("No job with id: {}", raw)))
}

/// POST /jobs - { title, salary, equity, companyHandle } => { job }
pub async fn create(State(state): State<AppState>, ValidJson(new): ValidJson<NewJob>) -> ApiResult<Job> {
    let job = jobs::create(&state.pool, &new).await?;
    Ok(ApiResponse::created("job", job))
}

/// GET /jobs?title=&minSalary=&hasEquity= => { jobs: [...] }
pub async fn list(State(state): State<AppState>, ApiQuery(filter): ApiQuery<JobFilter>) -> ApiResult<Vec<Job>> {
    let jobs = jobs::find_all(&state.pool, &filter).await?;
    Ok(ApiResponse::success("jobs", jobs))
}

/// GET /jobs/:id => { job }
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<Job> {
    let job = jobs::get(&state.pool, parse_job_id(&id)?).await?;
    Ok(ApiResponse::success("job", job))
}

/// PATCH /jobs/:id - { title, salary, equity, companyHandle } => { job }
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    ValidJson(data): ValidJson<JobUpdate>,
) -> ApiResult<Job> {
    let job = jobs::update(&state.pool, parse_job_id(&id)?, &data).await?;
    Ok(ApiResponse::success("job", job))
}

/// DELETE /jobs/:id => { deleted: id }
pub async fn remove(State(state): State<AppState>, Path(id): Path<String>) -> ApiResult<i32> {
    let id = parse_job_id(&id)?;
    jobs::remove(&state.pool, id).await?;
    Ok(ApiResponse::success("deleted", id))
}
