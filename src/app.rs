use std::sync::Arc;

use axum::{
    handler::Handler,
    middleware::{from_fn, from_fn_with_state},
    routing::{get, post},
    Router,
};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::handlers::{auth, companies, jobs, system, users};
use crate::middleware::{authenticate_jwt, ensure_admin, ensure_admin_or_correct_user, ensure_logged_in};

/// Shared per-process state: the pool and the configuration loaded at startup.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(pool: PgPool, config: AppConfig) -> Self {
        Self {
            pool,
            config: Arc::new(config),
        }
    }
}

pub fn app(state: AppState) -> Router {
    let mut router = Router::new()
        // Public
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(auth_routes())
        .merge(company_routes())
        .merge(job_routes())
        .merge(user_routes())
        // Every request passes through token verification; gates run per handler
        .layer(from_fn_with_state(state.clone(), authenticate_jwt));

    if state.config.security.enable_cors {
        router = router.layer(CorsLayer::permissive());
    }
    if state.config.api.enable_request_logging {
        router = router.layer(TraceLayer::new_for_http());
    }

    router.with_state(state)
}

fn auth_routes() -> Router<AppState> {
    Router::new().route("/auth/whoami", get(auth::whoami_get.layer(from_fn(ensure_logged_in))))
}

fn company_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/companies",
            get(companies::list).post(companies::create.layer(from_fn(ensure_admin))),
        )
        .route(
            "/companies/:handle",
            get(companies::get)
                .patch(companies::update.layer(from_fn(ensure_admin)))
                .delete(companies::remove.layer(from_fn(ensure_admin))),
        )
}

fn job_routes() -> Router<AppState> {
    Router::new()
        .route("/jobs", get(jobs::list).post(jobs::create.layer(from_fn(ensure_admin))))
        .route(
            "/jobs/:id",
            get(jobs::get)
                .patch(jobs::update.layer(from_fn(ensure_admin)))
                .delete(jobs::remove.layer(from_fn(ensure_admin))),
        )
}

fn user_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/users/:username",
            get(users::get.layer(from_fn(ensure_admin_or_correct_user)))
                .delete(users::remove.layer(from_fn(ensure_admin_or_correct_user))),
        )
        .route(
            "/users/:username/jobs/:id",
            post(users::apply.layer(from_fn(ensure_admin_or_correct_user))),
        )
}
