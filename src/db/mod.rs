use anyhow::Result;
use sqlx::SqlitePool;
use std::fs;

/// Connect to the sqlite database, creating the db file first when needed.
pub async fn connect(database_url: &str) -> Result<SqlitePool> {
    let url = normalize_sqlite_url(database_url);
    if let Some(path) = db_file_path(&url) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).ok();
        }
        if !path.exists() {
            fs::File::create(&path).ok();
        }
    }
    let pool = SqlitePool::connect(&url).await?;
    Ok(pool)
}

/// Apply every .sql file under migrations/ in name order. All statements are
/// CREATE TABLE IF NOT EXISTS, so re-running on startup is a no-op.
pub async fn run_migrations(pool: &SqlitePool) -> Result<()> {
    let mut entries: Vec<_> = fs::read_dir("migrations")?.filter_map(|e| e.ok()).collect();
    entries.sort_by_key(|e| e.path());
    for e in entries {
        let p = e.path();
        if p.extension().and_then(|s| s.to_str()) == Some("sql") {
            let sql = fs::read_to_string(&p)?;
            for stmt in sql.split(';').map(str::trim).filter(|s| !s.is_empty()) {
                sqlx::query(stmt).execute(pool).await?;
            }
        }
    }
    Ok(())
}

/// Current UTC instant as an ISO-8601 string, the format all created_at columns use.
pub fn now_iso() -> String {
    chrono::Utc::now()
        .naive_utc()
        .format("%Y-%m-%dT%H:%M:%S%.6f")
        .to_string()
}

/// Current UTC date as YYYY-MM-DD, the default for spent_on.
pub fn today_iso() -> String {
    chrono::Utc::now().date_naive().to_string()
}

fn normalize_sqlite_url(input: &str) -> String {
    // Accept forms: sqlite:foo.db (fix), sqlite://foo.db (ok), file:foo.db (convert), bare path
    if input.starts_with("sqlite://") || input.starts_with("sqlite::memory:") {
        return input.to_string();
    }
    if input.starts_with("sqlite:") {
        let rest = input.trim_start_matches("sqlite:");
        return format!("sqlite://{}", rest.trim_start_matches('/'));
    }
    if input.starts_with("file:") {
        return format!("sqlite://{}", input.trim_start_matches("file:"));
    }
    format!("sqlite://{}", input)
}

fn db_file_path(url: &str) -> Option<std::path::PathBuf> {
    if let Some(rest) = url.strip_prefix("sqlite://") {
        if rest == ":memory:" {
            return None;
        }
        return Some(std::path::PathBuf::from(rest));
    }
    None
}
