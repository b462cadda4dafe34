use super::error::FilterError;
use super::types::{CompanyFilter, SqlParam, SqlResult};

const BASE_SELECT: &str = "SELECT handle, name, description, num_employees, logo_url FROM companies";

/// Builds the company listing query. Predicates are emitted in the order
/// name, minEmployees, maxEmployees regardless of how the filter was written.
pub fn company_search_sql(filter: &CompanyFilter) -> Result<SqlResult, FilterError> {
    if let (Some(min), Some(max)) = (filter.min_employees, filter.max_employees) {
        if min > max {
            return Err(FilterError::InvalidFilter(
                "minEmployees cannot be greater than maxEmployees".to_string(),
            ));
        }
    }

    let mut clauses = Vec::new();
    let mut params = Vec::new();

    if let Some(name) = filter.name.as_deref().filter(|n| !n.is_empty()) {
        params.push(SqlParam::Text(format!("%{}%", name)));
        clauses.push(format!("name ILIKE ${}", params.len()));
    }

    if let Some(min) = filter.min_employees {
        params.push(SqlParam::Int(min));
        clauses.push(format!("num_employees >= ${}", params.len()));
    }

    if let Some(max) = filter.max_employees {
        params.push(SqlParam::Int(max));
        clauses.push(format!("num_employees <= ${}", params.len()));
    }

    let mut query = BASE_SELECT.to_string();
    if !clauses.is_empty() {
        query.push_str(" WHERE ");
        query.push_str(&clauses.join(" AND "));
    }
    query.push_str(" ORDER BY name");

    Ok(SqlResult { query, params })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_filters_lists_everything() {
        let sql = company_search_sql(&CompanyFilter::default()).unwrap();
        assert_eq!(sql.query, format!("{} ORDER BY name", BASE_SELECT));
        assert!(sql.params.is_empty());
    }

    #[test]
    fn all_filters() {
        let filter = CompanyFilter {
            name: Some("net".to_string()),
            min_employees: Some(3),
            max_employees: Some(6),
        };
        let sql = company_search_sql(&filter).unwrap();
        assert!(sql.query.ends_with(
            " WHERE name ILIKE $1 AND num_employees >= $2 AND num_employees <= $3 ORDER BY name"
        ));
        assert_eq!(
            sql.params,
            vec![SqlParam::Text("%net%".to_string()), SqlParam::Int(3), SqlParam::Int(6)]
        );
    }

    #[test]
    fn placeholders_follow_present_filters() {
        let filter = CompanyFilter {
            max_employees: Some(2),
            ..Default::default()
        };
        let sql = company_search_sql(&filter).unwrap();
        assert!(sql.query.contains("WHERE num_employees <= $1 ORDER BY name"));
        assert_eq!(sql.params, vec![SqlParam::Int(2)]);
    }

    #[test]
    fn empty_name_is_ignored() {
        let filter = CompanyFilter {
            name: Some(String::new()),
            ..Default::default()
        };
        let sql = company_search_sql(&filter).unwrap();
        assert!(!sql.query.contains("WHERE"));
    }

    #[test]
    fn min_greater_than_max_is_rejected() {
        let filter = CompanyFilter {
            min_employees: Some(5),
            max_employees: Some(1),
            ..Default::default()
        };
        assert!(matches!(
            company_search_sql(&filter),
            Err(FilterError::InvalidFilter(_))
        ));
    }

    #[test]
    fn equal_bounds_are_allowed() {
        let filter = CompanyFilter {
            min_employees: Some(2),
            max_employees: Some(2),
            ..Default::default()
        };
        assert!(company_search_sql(&filter).is_ok());
    }
}
