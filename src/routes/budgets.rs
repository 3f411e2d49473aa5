use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use sqlx::SqlitePool;

use crate::db;
use crate::errors::ApiError;
use crate::models::budget::Budget;
use crate::routes::auth::AuthUser;
use crate::routes::Amount;

#[derive(Debug, Deserialize)]
pub struct AddBudgetReq {
    #[serde(default)]
    pub category: String,
    pub amount: Option<Amount>,
    pub period: Option<String>,
}

pub async fn add_budget(
    State(pool): State<SqlitePool>,
    user: AuthUser,
    Json(req): Json<AddBudgetReq>,
) -> Result<Json<Value>, ApiError> {
    let category = req.category.trim();
    let period = req.period.unwrap_or_else(|| "Monthly".to_string());
    let amount = req.amount.map(|a| a.value()).unwrap_or(0.0);

    if category.is_empty() || amount <= 0.0 {
        return Err(ApiError::validation(
            "Budget needs a category and positive amount.",
        ));
    }

    sqlx::query(
        "INSERT INTO budgets (user_id, category, amount, period, created_at) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(user.id)
    .bind(category)
    .bind(amount)
    .bind(&period)
    .bind(db::now_iso())
    .execute(&pool)
    .await?;

    Ok(Json(json!({ "message": "Budget added." })))
}

pub async fn list_budgets(
    State(pool): State<SqlitePool>,
    user: AuthUser,
) -> Result<Json<Vec<Budget>>, ApiError> {
    let rows = sqlx::query_as::<_, Budget>(
        "SELECT id, category, amount, period, created_at FROM budgets WHERE user_id = ? ORDER BY id DESC",
    )
    .bind(user.id)
    .fetch_all(&pool)
    .await?;
    Ok(Json(rows))
}
