use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::api::{FieldErrors, Validate};
use crate::error::ApiError;
use crate::filter::SqlParam;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

/// Company with the jobs that reference it, as returned by `GET /companies/:handle`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetail {
    #[serde(flatten)]
    pub company: Company,
    pub jobs: Vec<CompanyJob>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyJob {
    pub id: i32,
    pub title: String,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

/// One row of `companies LEFT JOIN jobs`; job columns are NULL when the
/// company has no jobs.
#[derive(Debug, Clone, FromRow)]
pub struct CompanyJobRow {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
    pub id: Option<i32>,
    pub title: Option<String>,
    pub salary: Option<i32>,
    pub equity: Option<Decimal>,
}

/// Body of `POST /companies`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NewCompany {
    pub handle: String,
    pub name: String,
    pub description: String,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl Validate for NewCompany {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors
            .check(!self.handle.trim().is_empty(), "handle", "handle is required")
            .check(self.handle.len() <= MAX_HANDLE_LEN, "handle", "handle must be at most 25 characters")
            .check(self.handle == self.handle.to_lowercase(), "handle", "handle must be lowercase")
            .check(!self.name.trim().is_empty(), "name", "name is required")
            .check(self.num_employees.map_or(true, |n| n >= 0), "numEmployees", "numEmployees must be >= 0")
            .check(self.logo_url.as_deref().map_or(true, is_url), "logoUrl", "logoUrl must be a URL");
        errors.into_result()
    }
}

/// Body of `PATCH /companies/:handle`. The handle itself cannot change.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CompanyUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub num_employees: Option<i32>,
    pub logo_url: Option<String>,
}

impl CompanyUpdate {
    /// API field name -> column name, for fields whose names differ.
    pub const COLUMNS: &'static [(&'static str, &'static str)] =
        &[("numEmployees", "num_employees"), ("logoUrl", "logo_url")];

    /// Supplied fields in declaration order.
    pub fn changes(&self) -> Vec<(&'static str, SqlParam)> {
        let mut changes = Vec::new();
        if let Some(name) = &self.name {
            changes.push(("name", SqlParam::from(name.as_str())));
        }
        if let Some(description) = &self.description {
            changes.push(("description", SqlParam::from(description.as_str())));
        }
        if let Some(num_employees) = self.num_employees {
            changes.push(("numEmployees", SqlParam::from(num_employees)));
        }
        if let Some(logo_url) = &self.logo_url {
            changes.push(("logoUrl", SqlParam::from(logo_url.as_str())));
        }
        changes
    }
}

impl Validate for CompanyUpdate {
    fn validate(&self) -> Result<(), ApiError> {
        let mut errors = FieldErrors::new();
        errors
            .check(self.name.as_deref().map_or(true, |n| !n.trim().is_empty()), "name", "name cannot be empty")
            .check(self.num_employees.map_or(true, |n| n >= 0), "numEmployees", "numEmployees must be >= 0")
            .check(self.logo_url.as_deref().map_or(true, is_url), "logoUrl", "logoUrl must be a URL");
        errors.into_result()
    }
}

const MAX_HANDLE_LEN: usize = 25;

fn is_url(value: &str) -> bool {
    url::Url::parse(value).is_ok()
}
