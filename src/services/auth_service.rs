use crate::errors::ApiError;
use crate::models::user::User;
use bcrypt::{hash, verify, DEFAULT_COST};
use sqlx::SqlitePool;

/// Create a user account. Input is normalized here (trimmed name, lowercased
/// email) so uniqueness checks and logins agree on the same key.
pub async fn register_user(
    pool: &SqlitePool,
    name: &str,
    email: &str,
    password: &str,
) -> Result<User, ApiError> {
    let name = name.trim();
    let email = email.trim().to_lowercase();

    if name.is_empty() || email.is_empty() || !email.contains('@') || password.len() < 6 {
        return Err(ApiError::validation(
            "Use a name, valid email, and password with 6+ chars.",
        ));
    }

    let password_hash = hash(password, DEFAULT_COST)?;
    // Uniqueness is enforced by the INSERT itself; a SELECT-then-INSERT check
    // would let two concurrent signups both pass the check.
    let id = sqlx::query_scalar::<_, i64>(
        "INSERT INTO users (name, email, password_hash) VALUES (?, ?, ?) RETURNING id",
    )
    .bind(name)
    .bind(&email)
    .bind(&password_hash)
    .fetch_one(pool)
    .await
    .map_err(|e| {
        if e.as_database_error()
            .is_some_and(|d| d.is_unique_violation())
        {
            ApiError::validation("Email already registered.")
        } else {
            ApiError::from(e)
        }
    })?;

    Ok(User {
        id,
        name: name.to_string(),
        email,
        password_hash,
        bio: String::new(),
    })
}

/// Check credentials. Returns None for an unknown email or a hash mismatch;
/// the caller decides how to report that (always a 401, never which half failed).
pub async fn verify_user(
    pool: &SqlitePool,
    email: &str,
    password: &str,
) -> Result<Option<User>, ApiError> {
    let email = email.trim().to_lowercase();
    let user_opt = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, bio FROM users WHERE email = ?",
    )
    .bind(&email)
    .fetch_optional(pool)
    .await?;

    if let Some(user) = user_opt {
        if verify(password, &user.password_hash)? {
            return Ok(Some(user));
        }
    }
    Ok(None)
}

/// Fetch the caller's stored identity fields.
pub async fn get_user(pool: &SqlitePool, user_id: i64) -> Result<User, ApiError> {
    let user = sqlx::query_as::<_, User>(
        "SELECT id, name, email, password_hash, bio FROM users WHERE id = ?",
    )
    .bind(user_id)
    .fetch_one(pool)
    .await?;
    Ok(user)
}
