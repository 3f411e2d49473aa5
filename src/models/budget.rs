use serde::Serialize;
use sqlx::FromRow;

/// A spending ceiling for one category and period.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Budget {
    pub id: i64,
    pub category: String,
    pub amount: f64,
    pub period: String,
    pub created_at: String,
}
