#![allow(dead_code)]

use std::sync::OnceLock;

use anyhow::{Context, Result};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::PgPool;
use tokio::sync::{Mutex, MutexGuard};
use tower::ServiceExt;

use jobly_api::auth::create_token;
use jobly_api::config::AppConfig;
use jobly_api::database::manager;
use jobly_api::{app, AppState};

static DB_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

pub fn test_config() -> AppConfig {
    AppConfig::test()
}

/// Router over a pool that never connects unless a handler reaches the
/// database. Enough for gate and validation tests.
pub fn lazy_app() -> Router {
    let config = test_config();
    let pool = manager::connect_lazy(&config.database).expect("valid test database url");
    app(AppState::new(pool, config))
}

pub fn admin_token() -> String {
    create_token(&test_config().security, "admin", true).expect("token")
}

pub fn u1_token() -> String {
    create_token(&test_config().security, "u1", false).expect("token")
}

pub fn u2_token() -> String {
    create_token(&test_config().security, "u2", false).expect("token")
}

/// Sends one request through the router and returns status plus JSON body
/// (non-JSON bodies come back as a string value).
pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Result<(StatusCode, Value)> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&body)?))?,
        None => builder.body(Body::empty())?,
    };

    let response = app.clone().oneshot(request).await?;
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };

    Ok((status, value))
}

/// Seeded database shared by one test at a time.
pub struct TestDb {
    pub pool: PgPool,
    pub app: Router,
    _guard: MutexGuard<'static, ()>,
}

/// Connects to `TEST_DATABASE_URL`, migrates, and reseeds the fixtures.
///
/// Database tests are `#[ignore]`d; run them with
/// `TEST_DATABASE_URL=postgres://... cargo test -- --ignored`.
pub async fn test_db() -> Result<TestDb> {
    let url = std::env::var("TEST_DATABASE_URL")
        .context("TEST_DATABASE_URL must point at a disposable Postgres database")?;

    let guard = DB_LOCK.get_or_init(|| Mutex::new(())).lock().await;

    let mut config = test_config();
    config.database.url = url;
    let pool = manager::connect(&config.database)
        .await
        .context("failed to connect to TEST_DATABASE_URL")?;
    manager::migrate(&pool).await?;
    seed(&pool).await?;

    let app = app(AppState::new(pool.clone(), config));
    Ok(TestDb {
        pool,
        app,
        _guard: guard,
    })
}

/// Companies c1..c3 (1..3 employees), jobs job1..job3 with ids 1..3
/// (equity 0.1, 0 and NULL), user u1 who applied to job 1.
async fn seed(pool: &PgPool) -> Result<()> {
    sqlx::query("TRUNCATE applications, jobs, companies, users RESTART IDENTITY CASCADE")
        .execute(pool)
        .await?;

    sqlx::query(
        "INSERT INTO companies (handle, name, num_employees, description, logo_url)
         VALUES ('c1', 'C1', 1, 'Desc1', 'http://c1.img'),
                ('c2', 'C2', 2, 'Desc2', 'http://c2.img'),
                ('c3', 'C3', 3, 'Desc3', 'http://c3.img')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO jobs (title, salary, equity, company_handle)
         VALUES ('job1', 100, 0.1, 'c1'),
                ('job2', 200, 0, 'c2'),
                ('job3', 300, NULL, 'c3')",
    )
    .execute(pool)
    .await?;

    sqlx::query(
        "INSERT INTO users (username, first_name, last_name, email, is_admin)
         VALUES ('u1', 'U1F', 'U1L', 'user1@user.com', FALSE),
                ('u2', 'U2F', 'U2L', 'user2@user.com', FALSE)",
    )
    .execute(pool)
    .await?;

    sqlx::query("INSERT INTO applications (username, job_id) VALUES ('u1', 1)")
        .execute(pool)
        .await?;

    Ok(())
}
