use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::ApiError;
use crate::models::note::Note;
use crate::routes::auth::AuthUser;

#[derive(Debug, Deserialize)]
pub struct AddNoteReq {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

pub async fn add_note(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Json(req): Json<AddNoteReq>,
) -> Result<Json<Value>, ApiError> {
    let title = req.title.trim();
    let content = req.content.trim();

    if title.is_empty() || content.is_empty() {
        return Err(ApiError::validation("Note needs title and content."));
    }

    sqlx::query("INSERT INTO notes (user_id, title, content, created_at) VALUES (?, ?, ?, ?)")
        .bind(user.id)
        .bind(title)
        .bind(content)
        .bind(db::now_iso())
        .execute(&pool)
        .await?;

    Ok(Json(json!({ "message": "Note added." })))
}

pub async fn list_notes(
    State(pool): State<SqlitePool>,
    user: AuthUser,
) -> Result<Json<Vec<Note>>, ApiError> {
    let rows = sqlx::query_as::<_, Note>(
        "SELECT id, title, content, created_at FROM notes WHERE user_id = ? ORDER BY id DESC",
    )
    .bind(user.id)
    .fetch_all(&pool)
    .await?;
    Ok(Json(rows))
}
