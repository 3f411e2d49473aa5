mod common;

use axum::http::StatusCode;
use common::{request, signup, spawn_app};
use serde_json::json;

#[tokio::test]
async fn coffee_expense_round_trip_with_default_category() {
    let (app, _pool) = spawn_app().await;
    let cookie = signup(&app, "Sam", "sam@campus.edu").await;

    let (status, body, _) = request(
        &app,
        "POST",
        "/api/expenses",
        Some(json!({ "title": "Coffee", "amount": 3.5, "spent_on": "2024-01-01" })),
        Some(&cookie),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Expense saved.");

    let (status, list, _) = request(&app, "GET", "/api/expenses", None, Some(&cookie)).await;
    assert_eq!(status, StatusCode::OK);
    let rows = list.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["title"], "Coffee");
    assert_eq!(rows[0]["amount"].as_f64(), Some(3.5));
    assert_eq!(rows[0]["category"], "General");
    assert_eq!(rows[0]["note"], "");
    assert_eq!(rows[0]["image_url"], "");
    assert_eq!(rows[0]["spent_on"], "2024-01-01");
}

#[tokio::test]
async fn spent_on_defaults_to_today() {
    let (app, _pool) = spawn_app().await;
    let cookie = signup(&app, "Sam", "sam@campus.edu").await;

    let (status, _, _) = request(
        &app,
        "POST",
        "/api/expenses",
        Some(json!({ "title": "Bus ticket", "amount": 2.0 })),
        Some(&cookie),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, list, _) = request(&app, "GET", "/api/expenses", None, Some(&cookie)).await;
    assert_eq!(list[0]["spent_on"], expense_planner::db::today_iso());
}

#[tokio::test]
async fn rejects_missing_title_or_nonpositive_amount() {
    let (app, _pool) = spawn_app().await;
    let cookie = signup(&app, "Sam", "sam@campus.edu").await;

    for bad in [
        json!({ "title": "", "amount": 5.0 }),
        json!({ "title": "Lunch", "amount": 0 }),
        json!({ "title": "Lunch", "amount": -3.0 }),
        json!({ "amount": 5.0 }),
    ] {
        let (status, body, _) =
            request(&app, "POST", "/api/expenses", Some(bad), Some(&cookie)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Expense needs a title and positive amount.");
    }

    let (_, list, _) = request(&app, "GET", "/api/expenses", None, Some(&cookie)).await;
    assert_eq!(list.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn listing_orders_by_spend_date_then_recency() {
    let (app, _pool) = spawn_app().await;
    let cookie = signup(&app, "Sam", "sam@campus.edu").await;

    for (title, spent_on) in [
        ("Groceries", "2024-01-02"),
        ("Cinema", "2024-01-01"),
        ("Textbook", "2024-01-02"),
    ] {
        let (status, _, _) = request(
            &app,
            "POST",
            "/api/expenses",
            Some(json!({ "title": title, "amount": 10.0, "spent_on": spent_on })),
            Some(&cookie),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, list, _) = request(&app, "GET", "/api/expenses", None, Some(&cookie)).await;
    let titles: Vec<_> = list
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["title"].as_str().unwrap().to_string())
        .collect();
    // same date: the later insert wins; older date last
    assert_eq!(titles, vec!["Textbook", "Groceries", "Cinema"]);
}

#[tokio::test]
async fn expenses_are_private_to_their_owner() {
    let (app, _pool) = spawn_app().await;
    let alice = signup(&app, "Alice", "alice@campus.edu").await;
    let bob = signup(&app, "Bob", "bob@campus.edu").await;

    let (status, _, _) = request(
        &app,
        "POST",
        "/api/expenses",
        Some(json!({ "title": "Coffee", "amount": 3.5 })),
        Some(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, bobs, _) = request(&app, "GET", "/api/expenses", None, Some(&bob)).await;
    assert_eq!(bobs.as_array().unwrap().len(), 0);
}
