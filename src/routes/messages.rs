use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::ApiError;
use crate::models::message::Message;
use crate::routes::auth::AuthUser;

const BOARD_LIMIT: i64 = 40;

#[derive(Debug, Deserialize)]
pub struct SendMessageReq {
    #[serde(default)]
    pub text: String,
}

pub async fn send_message(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Json(req): Json<SendMessageReq>,
) -> Result<Json<Value>, ApiError> {
    let text = req.text.trim();
    if text.is_empty() {
        return Err(ApiError::validation("Message is empty."));
    }

    sqlx::query("INSERT INTO messages (user_id, username, text, created_at) VALUES (?, ?, ?, ?)")
        .bind(user.id)
        .bind(&user.name)
        .bind(text)
        .bind(db::now_iso())
        .execute(&pool)
        .await?;

    Ok(Json(json!({ "message": "Message sent." })))
}

/// The board is shared: every logged-in user sees the same last 40 messages,
/// oldest first so the newest lands at the bottom of the chat view.
pub async fn list_messages(
    State(pool): State<SqlitePool>,
    _user: AuthUser,
) -> Result<Json<Vec<Message>>, ApiError> {
    let mut rows = sqlx::query_as::<_, Message>(
        "SELECT id, username, text, created_at FROM messages ORDER BY id DESC LIMIT ?",
    )
    .bind(BOARD_LIMIT)
    .fetch_all(&pool)
    .await?;
    rows.reverse();
    Ok(Json(rows))
}
