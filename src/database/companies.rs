//! Company repository: stateless queries over the `companies` table.

use sqlx::PgPool;
use tracing::info;

use crate::database::manager::DatabaseError;
use crate::database::models::{Company, CompanyDetail, CompanyJob, CompanyJobRow, CompanyUpdate, NewCompany};
use crate::database::query_builder;
use crate::filter::company_filter::company_search_sql;
use crate::filter::{sql_for_partial_update, CompanyFilter, SqlResult};

const RETURNING: &str = "RETURNING handle, name, description, num_employees, logo_url";
const PRIMARY_KEY: &str = "companies_pkey";

fn not_found(handle: &str) -> DatabaseError {
    DatabaseError::NotFound(format!("No company: {}", handle))
}

fn duplicate(handle: &str) -> DatabaseError {
    DatabaseError::BadRequest(format!("Duplicate company: {}", handle))
}

/// An insert that loses a race on the handle reads the same as the existence
/// check.
fn map_insert_error(err: sqlx::Error, handle: &str) -> DatabaseError {
    if let sqlx::Error::Database(db_err) = &err {
        if db_err.constraint() == Some(PRIMARY_KEY) {
            return duplicate(handle);
        }
    }
    err.into()
}

/// Inserts a company. The existence check and insert are separate statements;
/// a concurrent insert of the same handle still fails on the primary key.
pub async fn create(pool: &PgPool, new: &NewCompany) -> Result<Company, DatabaseError> {
    let existing = sqlx::query_scalar::<_, String>("SELECT handle FROM companies WHERE handle = $1")
        .bind(&new.handle)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Err(duplicate(&new.handle));
    }

    let company = sqlx::query_as::<_, Company>(&format!(
        "INSERT INTO companies (handle, name, description, num_employees, logo_url)
         VALUES ($1, $2, $3, $4, $5)
         {}",
        RETURNING
    ))
    .bind(&new.handle)
    .bind(&new.name)
    .bind(&new.description)
    .bind(new.num_employees)
    .bind(new.logo_url.as_deref())
    .fetch_one(pool)
    .await
    .map_err(|e| map_insert_error(e, &new.handle))?;

    info!("Created company {}", company.handle);
    Ok(company)
}

pub async fn find_all(pool: &PgPool, filter: &CompanyFilter) -> Result<Vec<Company>, DatabaseError> {
    let sql = company_search_sql(filter)?;
    query_builder::fetch_all(pool, &sql).await
}

/// Company with its jobs, ordered by job id.
pub async fn get(pool: &PgPool, handle: &str) -> Result<CompanyDetail, DatabaseError> {
    let rows = sqlx::query_as::<_, CompanyJobRow>(
        "SELECT c.handle, c.name, c.description, c.num_employees, c.logo_url,
                j.id, j.title, j.salary, j.equity
         FROM companies c
         LEFT JOIN jobs j ON c.handle = j.company_handle
         WHERE c.handle = $1
         ORDER BY j.id",
    )
    .bind(handle)
    .fetch_all(pool)
    .await?;

    let first = rows.first().ok_or_else(|| not_found(handle))?;
    let company = Company {
        handle: first.handle.clone(),
        name: first.name.clone(),
        description: first.description.clone(),
        num_employees: first.num_employees,
        logo_url: first.logo_url.clone(),
    };

    let jobs = rows
        .into_iter()
        .filter_map(|row| match (row.id, row.title) {
            (Some(id), Some(title)) => Some(CompanyJob {
                id,
                title,
                salary: row.salary,
                equity: row.equity,
            }),
            _ => None,
        })
        .collect();

    Ok(CompanyDetail { company, jobs })
}

pub async fn update(pool: &PgPool, handle: &str, data: &CompanyUpdate) -> Result<Company, DatabaseError> {
    let set = sql_for_partial_update(data.changes(), CompanyUpdate::COLUMNS)?;

    let mut params = set.values.clone();
    params.push(handle.into());
    let sql = SqlResult {
        query: format!(
            "UPDATE companies SET {} WHERE handle = {} {}",
            set.set_clause(),
            set.next_placeholder(),
            RETURNING
        ),
        params,
    };

    let company = query_builder::fetch_optional::<Company>(pool, &sql)
        .await?
        .ok_or_else(|| not_found(handle))?;

    info!("Updated company {}", handle);
    Ok(company)
}

pub async fn remove(pool: &PgPool, handle: &str) -> Result<(), DatabaseError> {
    sqlx::query_scalar::<_, String>("DELETE FROM companies WHERE handle = $1 RETURNING handle")
        .bind(handle)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| not_found(handle))?;

    info!("Removed company {}", handle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::manager::test_support::ConstraintViolation;
    use crate::database::manager::UNIQUE_VIOLATION;

    #[test]
    fn handle_conflict_reads_as_duplicate() {
        let err = ConstraintViolation::error(UNIQUE_VIOLATION, PRIMARY_KEY);
        match map_insert_error(err, "c1") {
            DatabaseError::BadRequest(msg) => assert_eq!(msg, "Duplicate company: c1"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn other_conflicts_pass_through() {
        let err = ConstraintViolation::error(UNIQUE_VIOLATION, "companies_name_key");
        let mapped = map_insert_error(err, "c1");
        assert_eq!(mapped.sql_state().as_deref(), Some(UNIQUE_VIOLATION));
    }
}
