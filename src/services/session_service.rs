use crate::db;
use crate::errors::ApiError;
use crate::models::session::SessionUser;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Open a session for a user and return the opaque token the cookie carries.
pub async fn create(pool: &SqlitePool, user_id: i64) -> Result<String, ApiError> {
    let token = Uuid::new_v4().to_string();
    sqlx::query("INSERT INTO sessions (token, user_id, created_at) VALUES (?, ?, ?)")
        .bind(&token)
        .bind(user_id)
        .bind(db::now_iso())
        .execute(pool)
        .await?;
    Ok(token)
}

/// Resolve a token to the user it belongs to, if the session is still live.
pub async fn lookup(pool: &SqlitePool, token: &str) -> Result<Option<SessionUser>, ApiError> {
    let user = sqlx::query_as::<_, SessionUser>(
        "SELECT u.id, u.name FROM sessions s JOIN users u ON u.id = s.user_id WHERE s.token = ?",
    )
    .bind(token)
    .fetch_optional(pool)
    .await?;
    Ok(user)
}

/// Drop a session. Unknown tokens are a no-op so logout is unconditional.
pub async fn delete(pool: &SqlitePool, token: &str) -> Result<(), ApiError> {
    sqlx::query("DELETE FROM sessions WHERE token = ?")
        .bind(token)
        .execute(pool)
        .await?;
    Ok(())
}
