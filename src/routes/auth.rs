use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, State};
use axum::http::request::Parts;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar};
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::models::user::User;
use crate::services::{auth_service, session_service};

pub const SESSION_COOKIE: &str = "session";

/// Session guard. Extracting this on a handler rejects the request with a 401
/// before the handler body runs when no live session cookie is present.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: i64,
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    SqlitePool: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pool = SqlitePool::from_ref(state);
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(SESSION_COOKIE)
            .map(|c| c.value().to_string())
            .ok_or(ApiError::Unauthorized("Please login first."))?;
        match session_service::lookup(&pool, &token).await? {
            Some(user) => Ok(AuthUser {
                id: user.id,
                name: user.name,
            }),
            None => Err(ApiError::Unauthorized("Please login first.")),
        }
    }
}

fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .path("/")
        .http_only(true)
        .build()
}

#[derive(Debug, Deserialize)]
pub struct SignupReq {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn signup(
    State(pool): State<SqlitePool>,
    jar: CookieJar,
    Json(req): Json<SignupReq>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let user = auth_service::register_user(&pool, &req.name, &req.email, &req.password).await?;
    let token = session_service::create(&pool, user.id).await?;
    tracing::info!(email = %user.email, "account created");
    Ok((
        jar.add(session_cookie(token)),
        Json(json!({ "message": "Account created.", "name": user.name })),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginReq {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(pool): State<SqlitePool>,
    jar: CookieJar,
    Json(req): Json<LoginReq>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let user = auth_service::verify_user(&pool, &req.email, &req.password)
        .await?
        .ok_or(ApiError::Unauthorized("Invalid login details."))?;
    let token = session_service::create(&pool, user.id).await?;
    Ok((
        jar.add(session_cookie(token)),
        Json(json!({ "message": "Welcome back!", "name": user.name })),
    ))
}

pub async fn logout(
    State(pool): State<SqlitePool>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    if let Some(cookie) = jar.get(SESSION_COOKIE) {
        session_service::delete(&pool, cookie.value()).await?;
    }
    Ok((
        jar.remove(Cookie::build(SESSION_COOKIE).path("/")),
        Json(json!({ "message": "Logged out." })),
    ))
}

pub async fn me(State(pool): State<SqlitePool>, user: AuthUser) -> Result<Json<User>, ApiError> {
    let user = auth_service::get_user(&pool, user.id).await?;
    Ok(Json(user))
}
