//! User repository. Accounts are provisioned elsewhere; this covers lookup,
//! removal and job applications.

use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{User, UserDetail};

fn not_found(username: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("No user: {}", username))
}

/// User with the ids of jobs they applied to, ordered by job id.
pub async fn get(pool: &PgPool, username: &str) -> Result<UserDetail, DatabaseError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT username, first_name, last_name, email, is_admin FROM users WHERE username = $1",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| not_found(username))?;

    let jobs = sqlx::query_scalar::<_, i32>(
        "SELECT job_id FROM applications WHERE username = $1 ORDER BY job_id",
    )
    .bind(username)
    .fetch_all(pool)
    .await?;

    Ok(UserDetail { user, jobs })
}

pub async fn remove(pool: &PgPool, username: &str) -> Result<(), DatabaseError> {
    sqlx::query_scalar::<_, String>("DELETE FROM users WHERE username = $1 RETURNING username")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(username))?;

    info!("Removed user {}", username);
    Ok(())
}

/// Records that `username` applied to `job_id`. Applying twice fails on the
/// table's primary key.
pub async fn apply_to_job(pool: &PgPool, username: &str, job_id: i32) -> Result<(), DatabaseError> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM jobs WHERE id = $1")
        .bind(job_id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No job: {}", job_id)))?;

    sqlx::query_scalar::<_, String>("SELECT username FROM users WHERE username = $1")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound(format!("No username: {}", username)))?;

    sqlx::query("INSERT INTO applications (username, job_id) VALUES ($1, $2)")
        .bind(username)
        .bind(job_id)
        .execute(pool)
        .await?;

    info!("User {} applied to job {}", username, job_id);
    Ok(())
}
