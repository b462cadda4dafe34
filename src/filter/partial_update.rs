use super::error::FilterError;
use super::types::SqlParam;

/// SET clause for a partial update: `"col"=$1, "other"=$2` plus the bound values.
#[derive(Debug, Clone, PartialEq)]
pub struct PartialUpdate {
    pub set_cols: Vec<String>,
    pub values: Vec<SqlParam>,
}

impl PartialUpdate {
    pub fn set_clause(&self) -> String {
        self.set_cols.join(", ")
    }

    /// Placeholder for the first parameter after the SET values, used for the
    /// row key in `WHERE`.
    pub fn next_placeholder(&self) -> String {
        format!("${}", self.values.len() + 1)
    }
}

/// Maps sparse `(field, value)` pairs to a parameterized SET clause.
///
/// `js_to_sql` translates API field names to column names; fields missing from
/// it are used as-is. Column names are quoted but not otherwise checked, so
/// `data` keys must come from a typed DTO and never from client input.
pub fn sql_for_partial_update<K: AsRef<str>>(
    data: Vec<(K, SqlParam)>,
    js_to_sql: &[(&str, &str)],
) -> Result<PartialUpdate, FilterError> {
    if data.is_empty() {
        return Err(FilterError::NoData);
    }

    let mut set_cols = Vec::with_capacity(data.len());
    let mut values = Vec::with_capacity(data.len());

    for (idx, (field, value)) in data.into_iter().enumerate() {
        let field = field.as_ref();
        let column = js_to_sql
            .iter()
            .find(|(js, _)| *js == field)
            .map(|(_, sql)| *sql)
            .unwrap_or(field);
        set_cols.push(format!("\"{}\"=${}", column, idx + 1));
        values.push(value);
    }

    Ok(PartialUpdate { set_cols, values })
}

#[cfg(test)]
mod tests {
    use super::*;

    const USER_COLUMNS: &[(&str, &str)] = &[
        ("firstName", "first_name"),
        ("lastName", "last_name"),
        ("isAdmin", "is_admin"),
    ];

    #[test]
    fn builds_set_clause_in_input_order() {
        let data = vec![
            ("firstName", SqlParam::from("First")),
            ("lastName", SqlParam::from("Last")),
            ("email", SqlParam::from("email")),
            ("isAdmin", SqlParam::from(false)),
        ];

        let result = sql_for_partial_update(data, USER_COLUMNS).unwrap();

        assert_eq!(
            result.set_clause(),
            r#""first_name"=$1, "last_name"=$2, "email"=$3, "is_admin"=$4"#
        );
        assert_eq!(
            result.values,
            vec![
                SqlParam::from("First"),
                SqlParam::from("Last"),
                SqlParam::from("email"),
                SqlParam::Bool(false),
            ]
        );
        assert_eq!(result.next_placeholder(), "$5");
    }

    #[test]
    fn unmapped_fields_keep_their_name() {
        let data = vec![("title", SqlParam::from("New")), ("salary", SqlParam::from(10))];
        let result = sql_for_partial_update(data, &[]).unwrap();
        assert_eq!(result.set_cols, vec![r#""title"=$1"#, r#""salary"=$2"#]);
        assert_eq!(result.values.len(), result.set_cols.len());
    }

    #[test]
    fn empty_data_is_rejected() {
        let empty: Vec<(&str, SqlParam)> = vec![];
        assert_eq!(
            sql_for_partial_update(empty, USER_COLUMNS),
            Err(FilterError::NoData)
        );

        let empty: Vec<(String, SqlParam)> = vec![];
        assert_eq!(sql_for_partial_update(empty, &[]), Err(FilterError::NoData));
    }
}
