// handlers/mod.rs - route handlers grouped by resource
//
// Access policy per route lives in app.rs:
// - public:         GET /, /health, GET /companies*, GET /jobs*
// - logged in:      /auth/whoami
// - admin:          POST/PATCH/DELETE on /companies and /jobs
// - admin or self:  /users/:username*

pub mod auth;
pub mod companies;
pub mod jobs;
pub mod system;
pub mod users;
