use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::api::{FieldErrors, Validate};
use crate::error::ApiError;
use crate::filter::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    /// Serialized as a decimal string, e.g. `"0.3"`.
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

/// Body of `POST /jobs`. `equity` accepts a JSON number or a decimal string.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewJob {
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: String,
}

impl Validate for NewJob {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors
            .check(!self.title.trim().is_empty(), "title", "title is required")
            .check(self.salary.map_or(true, |s| s >= 0), "salary", "salary must be >= 0")
            .check(self.equity.map_or(true, valid_equity), "equity", "equity must be between 0 and 1")
            .check(!self.company_handle.trim().is_empty(), "companyHandle", "companyHandle is required");
        errors.into_result()
    }
}

/// Body of `PATCH /jobs/:id`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct JobUpdate {
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
    pub company_handle: Option<String>,
}

impl JobUpdate {
    pub const COLUMNS: &'static [(&'static str, &'static str)] = &[("companyHandle", "company_handle")];

    pub fn changes(&self) -> Vec<(&'static str, SqlParam)> {
        let mut changes = Vec::new();
        if let Some(title) = &self.title {
            changes.push(("title", SqlParam::from(title.as_str())));
        }
        if let Some(salary) = self.salary {
            changes.push(("salary", SqlParam::from(salary)));
        }
        if let Some(equity) = self.equity {
            changes.push(("equity", SqlParam::from(equity)));
        }
        if let Some(company_handle) = &self.company_handle {
            changes.push(("companyHandle", SqlParam::from(company_handle.as_str())));
        }
        changes
    }
}

impl Validate for JobUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors
            .check(self.title.as_deref().map_or(true, |t| !t.trim().is_empty()), "title", "title cannot be empty")
            .check(self.salary.map_or(true, |s| s >= 0), "salary", "salary must be >= 0")
            .check(self.equity.map_or(true, valid_equity), "equity", "equity must be between 0 and 1");
        errors.into_result()
    }
}

fn valid_equity(equity: Decimal) -> bool {
    equity >= Decimal::ZERO && equity <= Decimal::ONE
}
