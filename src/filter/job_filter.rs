use super::error::FilterError;
use super::types::{JobFilter, SqlParam, SqlResult};

const BASE_SELECT: &str = "SELECT id, title, salary, equity, company_handle FROM jobs";

/// Builds the job listing query. Predicates are emitted in the order
/// minSalary, title, hasEquity.
pub fn job_search_sql(filter: &JobFilter) -> Result<SqlResult, FilterError> {
    let mut clauses = Vec::new();
    let mut params = Vec::new();

    if let Some(min_salary) = filter.min_salary {
        if min_salary < 0 {
            return Err(FilterError::InvalidFilter(
                "minSalary must be greater than or equal to 0".to_string(),
            ));
        }
        params.push(SqlParam::Int(min_salary));
        clauses.push(format!("salary >= ${}", params.len()));
    }

    if let Some(title) = filter.title.as_deref().filter(|t| !t.is_empty()) {
        params.push(SqlParam::Text(format!("%{}%", title)));
        clauses.push(format!("title ILIKE ${}", params.len()));
    }

    // hasEquity=false means "don't care", not "no equity"
    if filter.has_equity == Some(true) {
        clauses.push("equity > 0".to_string());
    }

    let mut query = BASE_SELECT.to_string();
    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }
    query.push_str(" ORDER BY id");

    Ok(SqlResult { query, params })
}
