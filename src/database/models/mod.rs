pub mod company;
pub mod job;
pub mod user;

pub use company::{Company, CompanyDetail, CompanyJob, CompanyJobRow, CompanyUpdate, NewCompany};
pub use job::{Job, JobUpdate, NewJob};
pub use user::{User, UserDetail};
