pub mod company_filter;
pub mod error;
pub mod job_filter;
pub mod partial_update;
pub mod types;

pub use error::FilterError;
pub use partial_update::{sql_for_partial_update, PartialUpdate};
pub use types::*;
