use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FilterError {
    #[error("No data")]
    NoData,

    #[error("{0}")]
    InvalidFilter(String),
}
