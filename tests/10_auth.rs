// Token verification and the route gates. None of these reach the database:
// a rejected gate answers before the handler runs.

mod common;

use anyhow::Result;
use axum::http::{Method, StatusCode};
use serde_json::json;

use common::{admin_token, lazy_app, send, u1_token, u2_token};
use jobly_api::auth::{generate_jwt, Claims};

#[tokio::test]
async fn whoami_requires_token() -> Result<()> {
    let app = lazy_app();
    let (status, body) = send(&app, Method::GET, "/auth/whoami", None, None).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn whoami_returns_identity() -> Result<()> {
    let app = lazy_app();

    let (status, body) = send(&app, Method::GET, "/auth/whoami", Some(&u1_token()), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user": { "username": "u1", "isAdmin": false } }));

    let (status, body) = send(&app, Method::GET, "/auth/whoami", Some(&admin_token()), None).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["isAdmin"], true);
    Ok(())
}

#[tokio::test]
async fn invalid_tokens_are_anonymous() -> Result<()> {
    let app = lazy_app();

    let (status, _) = send(&app, Method::GET, "/auth/whoami", Some("not-a-jwt"), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let forged = generate_jwt("some-other-secret", &Claims::new("admin", true, 1))?;
    let (status, _) = send(&app, Method::GET, "/auth/whoami", Some(&forged), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn admin_gate_rejects_anon_and_non_admin() -> Result<()> {
    let app = lazy_app();
    let body = json!({ "handle": "new", "name": "New", "description": "DescNew" });

    let (status, _) = send(&app, Method::POST, "/companies", None, Some(body.clone())).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/companies", Some(&u1_token()), Some(body)).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, "/jobs/1", Some(&u1_token()), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::PATCH, "/companies/c1", None, Some(json!({ "name": "x" }))).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn admin_passes_gate() -> Result<()> {
    let app = lazy_app();

    // Past the gate the body is validated before any query runs.
    let (status, body) = send(
        &app,
        Method::POST,
        "/companies",
        Some(&admin_token()),
        Some(json!({ "handle": "new" })),
    )
    .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "INVALID_JSON");
    Ok(())
}

#[tokio::test]
async fn user_routes_require_admin_or_self() -> Result<()> {
    let app = lazy_app();

    let (status, _) = send(&app, Method::GET, "/users/u1", None, None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::GET, "/users/u1", Some(&u2_token()), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::DELETE, "/users/u1", Some(&u2_token()), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = send(&app, Method::POST, "/users/u1/jobs/1", Some(&u2_token()), None).await?;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn root_is_public() -> Result<()> {
    let app = lazy_app();
    let (status, body) = send(&app, Method::GET, "/", None, None).await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Jobly API");
    Ok(())
}
