use sqlx::FromRow;

/// Identity resolved from a session token: what the guard hands to handlers.
#[derive(Debug, Clone, FromRow)]
pub struct SessionUser {
    pub id: i64,
    pub name: String,
}
