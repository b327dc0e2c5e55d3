//! Integration tests for category endpoints.

mod helpers;

use std::sync::Arc;

use http::StatusCode;

use trivia_database::store::MemoryQuestionStore;

#[tokio::test]
async fn test_list_categories() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/categories").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(
        response.body["categories"],
        serde_json::json!({
            "1": "Science",
            "2": "Art",
            "3": "Geography",
            "4": "History",
            "5": "Entertainment",
            "6": "Sports",
        })
    );
}

#[tokio::test]
async fn test_no_categories_is_not_found() {
    let app = helpers::TestApp::with_store(Arc::new(MemoryQuestionStore::new(Vec::new())));

    app.get("/categories")
        .await
        .assert_error(StatusCode::NOT_FOUND, "Resource Not Found");
    app.get("/questions")
        .await
        .assert_error(StatusCode::NOT_FOUND, "Resource Not Found");
}

#[tokio::test]
async fn test_questions_by_category() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/categories/1/questions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![1, 2, 3]);
    assert_eq!(response.body["total_questions"], 3);
    assert_eq!(response.body["current_category"], "Science");
}

#[tokio::test]
async fn test_empty_category_is_ok() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/categories/6/questions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_questions"], 0);
    assert_eq!(response.body["current_category"], "Sports");
}

#[tokio::test]
async fn test_unknown_category_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.get("/categories/1000/questions")
        .await
        .assert_error(StatusCode::NOT_FOUND, "Resource Not Found");
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/health").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["store"], "memory");
}
