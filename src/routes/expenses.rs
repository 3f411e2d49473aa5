use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::ApiError;
use crate::models::expense::Expense;
use crate::routes::auth::AuthUser;
use crate::routes::Amount;

#[derive(Debug, Deserialize)]
pub struct AddExpenseReq {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub image_url: String,
    pub spent_on: Option<String>,
    pub amount: Option<Amount>,
}

pub async fn add_expense(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Json(req): Json<AddExpenseReq>,
) -> Result<Json<Value>, ApiError> {
    let title = req.title.trim();
    let category = match req.category.trim() {
        "" => "General",
        c => c,
    };
    let note = req.note.trim();
    let image_url = req.image_url.trim();
    let spent_on = req
        .spent_on
        .filter(|s| !s.is_empty())
        .unwrap_or_else(db::today_iso);
    let amount = req.amount.map(|a| a.value()).unwrap_or(0.0);

    if title.is_empty() || amount <= 0.0 {
        return Err(ApiError::validation(
            "Expense needs a title and positive amount.",
        ));
    }

    sqlx::query(
        "INSERT INTO expenses (user_id, title, category, amount, note, image_url, spent_on, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?)",
    )
    .bind(user.id)
    .bind(title)
    .bind(category)
    .bind(amount)
    .bind(note)
    .bind(image_url)
    .bind(&spent_on)
    .bind(db::now_iso())
    .execute(&pool)
    .await?;

    Ok(Json(json!({ "message": "Expense saved." })))
}

pub async fn list_expenses(
    State(pool): State<SqlitePool>,
    user: AuthUser,
) -> Result<Json<Vec<Expense>>, ApiError> {
    let rows = sqlx::query_as::<_, Expense>(
        "SELECT id, title, category, amount, note, image_url, spent_on, created_at \
         FROM expenses WHERE user_id = ? ORDER BY spent_on DESC, id DESC",
    )
    .bind(user.id)
    .fetch_all(&pool)
    .await?;
    Ok(Json(rows))
}
