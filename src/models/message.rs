use serde::Serialize;
use sqlx::FromRow;

/// Board message. The author's name is denormalized at insert time so the
/// board keeps showing it as it was when the message was sent.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Message {
    pub id: i64,
    pub username: String,
    pub text: String,
    pub created_at: String,
}
