use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Expense {
    pub id: i64,
    pub title: String,
    pub category: String,
    pub amount: f64,
    pub note: String,
    pub image_url: String,
    pub spent_on: String,
    pub created_at: String,
}
