pub mod validate;

pub use validate::{ApiQuery, FieldErrors, ValidJson, Validate};
