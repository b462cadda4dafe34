//! Job repository: stateless queries over the `jobs` table.

use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{Job, JobUpdate, NewJob};
use crate::database::query_builder;
use crate::filter::job_filter::job_search_sql;
use crate::filter::{sql_for_partial_update, JobFilter, SqlResult};

const RETURNING: &str = "RETURNING id, title, salary, equity, company_handle";

fn not_found(id: i32) -> DatabaseError {
    DatabaseError::NotFound(format!("No job with id: {}", id))
}

/// Inserts a job. Salary/equity ranges and the company reference are enforced
/// by table constraints.
pub async fn create(pool: &PgPool, new: &NewJob) -> Result<Job, DatabaseError> {
    let job = sqlx::query_as::<_, Job>(&format!(
        "INSERT INTO jobs (title, salary, equity, company_handle)
         VALUES ($1, $2, $3, $4)
         {}",
        RETURNING
    ))
    .bind(&new.title)
    .bind(new.salary)
    .bind(new.equity)
    .bind(&new.company_handle)
    .fetch_one(pool)
    .await?;

    info!("Created job {} for {}", job.id, job.company_handle);
    Ok(job)
}

pub async fn find_all(pool: &PgPool, filter: &JobFilter) -> Result<Vec<Job>, DatabaseError> {
    let sql = job_search_sql(filter)?;
    query_builder::fetch_all(pool, &sql).await
}

pub async fn get(pool: &PgPool, id: i32) -> Result<Job, DatabaseError> {
    sqlx::query_as::<_, Job>("SELECT id, title, salary, equity, company_handle FROM jobs WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))
}

pub async fn update(pool: &PgPool, id: i32, data: &JobUpdate) -> Result<Job, DatabaseError> {
    let set = sql_for_partial_update(data.changes(), JobUpdate::COLUMNS)?;

    let mut params = set.values.clone();
    params.push(id.into());
    let sql = SqlResult {
        query: format!(
            "UPDATE jobs SET {} WHERE id = {} {}",
            set.set_clause(),
            set.next_placeholder(),
            RETURNING
        ),
        params,
    };

    let job = query_builder::fetch_optional::<Job>(pool, &sql)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!("Updated job {}", id);
    Ok(job)
}

pub async fn remove(pool: &PgPool, id: i32) -> Result<(), DatabaseError> {
    sqlx::query_scalar::<_, i32>("DELETE FROM jobs WHERE id = $1 RETURNING id")
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(id))?;

    info!("Removed job {}", id);
    Ok(())
}
