#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use tower::ServiceExt;

/// App over a fresh in-memory database. One pooled connection, otherwise every
/// checkout would see its own empty :memory: db.
pub async fn spawn_app() -> (Router, SqlitePool) {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory sqlite");
    expense_planner::db::run_migrations(&pool)
        .await
        .expect("migrations");
    let app = expense_planner::routes::router().with_state(pool.clone());
    (app, pool)
}

/// Drive one request through the router. Returns status, parsed JSON body
/// (Null when the body is not JSON) and the session cookie if one was set.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
    cookie: Option<&str>,
) -> (StatusCode, Value, Option<String>) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(c) = cookie {
        builder = builder.header(header::COOKIE, c);
    }
    let req = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let res = app.clone().oneshot(req).await.unwrap();
    let status = res.status();
    let set_cookie = res
        .headers()
        .get(header::SET_COOKIE)
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(';').next())
        .map(str::to_string);
    let bytes = res.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json, set_cookie)
}

/// Sign up a user and hand back the session cookie for follow-up requests.
pub async fn signup(app: &Router, name: &str, email: &str) -> String {
    let (status, body, cookie) = request(
        app,
        "POST",
        "/api/signup",
        Some(json!({ "name": name, "email": email, "password": "hunter42" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK, "signup failed: {body}");
    cookie.expect("signup should set a session cookie")
}
