use axum::extract::State;
use axum::Json;
use serde::Serialize;
use sqlx::SqlitePool;

use crate::errors::ApiError;
use crate::routes::auth::AuthUser;

#[derive(Debug, Serialize)]
pub struct Summary {
    pub budget_total: f64,
    pub expense_total: f64,
    pub remaining: f64,
    pub transaction_count: i64,
    pub username: String,
}

fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Three independent aggregates over the caller's rows; each defaults to zero
/// when the user has no data yet.
pub async fn summary(
    State(pool): State<SqlitePool>,
    user: AuthUser,
) -> Result<Json<Summary>, ApiError> {
    let budget_total: f64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM budgets WHERE user_id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await?;
    let expense_total: f64 =
        sqlx::query_scalar("SELECT COALESCE(SUM(amount), 0.0) FROM expenses WHERE user_id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await?;
    let transaction_count: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM expenses WHERE user_id = ?")
            .bind(user.id)
            .fetch_one(&pool)
            .await?;

    Ok(Json(Summary {
        budget_total: round2(budget_total),
        expense_total: round2(expense_total),
        remaining: round2(budget_total - expense_total),
        transaction_count,
        username: user.name,
    }))
}
