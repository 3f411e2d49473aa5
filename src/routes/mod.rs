use axum::response::{Html, IntoResponse};
use axum::routing::{get, post};
use axum::Router;
use serde::Deserialize;
use sqlx::SqlitePool;
use tower_http::services::ServeDir;

pub mod auth;
pub mod budgets;
pub mod expenses;
pub mod messages;
pub mod notes;
pub mod summary;

async fn root_page() -> impl IntoResponse {
    Html(include_str!("../../static/app.html"))
}

/// Money field as submitted by the frontend: number or numeric string
/// (form inputs arrive as strings). Anything unparseable counts as zero and
/// fails the positivity check downstream.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Num(f64),
    Text(String),
}

impl Amount {
    pub fn value(&self) -> f64 {
        match self {
            Amount::Num(n) => *n,
            Amount::Text(s) => s.trim().parse().unwrap_or(0.0),
        }
    }
}

pub fn router() -> Router<SqlitePool> {
    Router::new()
        .route("/", get(root_page))
        .nest_service("/static", ServeDir::new("static"))
        .route("/healthz", get(|| async { "ok" }))
        .route("/api/signup", post(auth::signup))
        .route("/api/login", post(auth::login))
        .route("/api/logout", post(auth::logout))
        .route("/api/me", get(auth::me))
        .route(
            "/api/budgets",
            post(budgets::add_budget).get(budgets::list_budgets),
        )
        .route(
            "/api/expenses",
            post(expenses::add_expense).get(expenses::list_expenses),
        )
        .route("/api/notes", post(notes::add_note).get(notes::list_notes))
        .route(
            "/api/messages",
            post(messages::send_message).get(messages::list_messages),
        )
        .route("/api/summary", get(summary::summary))
}
