// handlers/companies.rs - /companies routes
//
// Reads are public; writes sit behind the admin gate wired up in app.rs.

use axum::extract::{Path, State};

use crate::api::{ApiQuery, ValidJson};
use crate::app::AppState;
use crate::database::companies;
use crate::database::models::{Company, CompanyDetail, CompanyUpdate, NewCompany};
use crate::filter::CompanyFilter;
use crate::middleware::{ApiResponse, ApiResult};

/// POST /companies - { company } => { company }
pub async fn create(
    State(state): State<AppState>,
    ValidJson(new): ValidJson<NewCompany>,
) -> ApiResult<Company> {
    let company = companies::create(&state.pool, &new).await?;
    Ok(ApiResponse::created("company", company))
}

/// GET /companies?name=&minEmployees=&maxEmployees= => { companies: [...] }
pub async fn list(
    State(state): State<AppState>,
    ApiQuery(filter): ApiQuery<CompanyFilter>,
) -> ApiResult<Vec<Company>> {
    let companies = companies::find_all(&state.pool, &filter).await?;
    Ok(ApiResponse::success("companies", companies))
}

/// GET /companies/:handle => { company: { ..., jobs: [...] } }
pub async fn get(State(state): State<AppState>, Path(handle): Path<String>) -> ApiResult<CompanyDetail> {
    let company = companies::get(&state.pool, &handle).await?;
    Ok(ApiResponse::success("company", company))
}

/// PATCH /companies/:handle - { name, description, numEmployees, logoUrl } => { company }
pub async fn update(
    State(state): State<AppState>,
    Path(handle): Path<String>,
    ValidJson(data): ValidJson<CompanyUpdate>,
) -> ApiResult<Company> {
    let company = companies::update(&state.pool, &handle, &data).await?;
    Ok(ApiResponse::success("company", company))
}

/// DELETE /companies/:handle => { deleted: handle }
pub async fn remove(State(state): State<AppState>, Path(handle): Path<String>) -> ApiResult<String> {
    companies::remove(&state.pool, &handle).await?;
    Ok(ApiResponse::success("deleted", handle))
}
