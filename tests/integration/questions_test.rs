//! Integration tests for question listing, search, creation, and deletion.

mod helpers;

use http::StatusCode;
use serde_json::json;

use trivia_core::types::QuestionId;

#[tokio::test]
async fn test_list_first_page() {
    let app = helpers::TestApp::new().await;

    let response = app.get("/questions").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["total_questions"], 12);
    assert_eq!(response.question_ids(), (1..=10).collect::<Vec<_>>());
    assert_eq!(response.body["categories"]["1"], "Science");
    assert_eq!(response.body["categories"].as_object().map(|c| c.len()), Some(6));

    let first = &response.body["questions"][0];
    assert_eq!(first["answer"], "The Liver");
    assert_eq!(first["category"], 1);
    assert_eq!(first["difficulty"], 4);
}

#[tokio::test]
async fn test_list_second_page() {
    let app = helpers::TestApp::new().await;
    let response = app.get("/questions?page=2").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![11, 12]);
}

#[tokio::test]
async fn test_list_page_beyond_end_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.get("/questions?page=1000")
        .await
        .assert_error(StatusCode::NOT_FOUND, "Resource Not Found");
}

#[tokio::test]
async fn test_list_invalid_page_is_bad_request() {
    let app = helpers::TestApp::new().await;
    app.get("/questions?page=0")
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
    app.get("/questions?page=abc")
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn test_delete_question() {
    let app = helpers::TestApp::new().await;

    let response = app.request("DELETE", "/questions/4", None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["deleted"], 4);
    assert_eq!(response.body["total_questions"], 11);
    assert!(!response.question_ids().contains(&4));
    assert!(app.store.find_by_id(QuestionId(4)).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_missing_question_is_unprocessable() {
    let app = helpers::TestApp::new().await;

    app.request("DELETE", "/questions/1000", None)
        .await
        .assert_error(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    assert_eq!(app.request("DELETE", "/questions/2", None).await.status, StatusCode::OK);
    app.request("DELETE", "/questions/2", None)
        .await
        .assert_error(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");
}

#[tokio::test]
async fn test_delete_non_numeric_id_is_not_found() {
    let app = helpers::TestApp::new().await;
    app.request("DELETE", "/questions/abc", None)
        .await
        .assert_error(StatusCode::NOT_FOUND, "Resource Not Found");
}

#[tokio::test]
async fn test_create_question() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post(
            "/questions?page=2",
            json!({
                "question": "Which planet is known as the Red Planet?",
                "answer": "Mars",
                "category": "1",
                "difficulty": 1,
            }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["created"], 13);
    assert_eq!(response.body["total_questions"], 13);
    assert_eq!(response.question_ids(), vec![11, 12, 13]);

    let stored = app.store.find_by_id(QuestionId(13)).await.unwrap().unwrap();
    assert_eq!(stored.answer, "Mars");
}

#[tokio::test]
async fn test_create_question_with_string_fields() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post(
            "/questions",
            json!({ "question": "Q?", "answer": "A", "category": "3", "difficulty": "3" }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["created"], 13);

    let stored = app.store.find_by_id(QuestionId(13)).await.unwrap().unwrap();
    assert_eq!(stored.category.get(), 3);
    assert_eq!(stored.difficulty, 3);
}

#[tokio::test]
async fn test_create_with_missing_field_is_unprocessable() {
    let app = helpers::TestApp::new().await;

    app.post(
        "/questions",
        json!({ "question": "No answer?", "category": 1, "difficulty": 1 }),
    )
    .await
    .assert_error(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    app.post(
        "/questions",
        json!({ "question": "Bad category?", "answer": "x", "category": 99, "difficulty": 1 }),
    )
    .await
    .assert_error(StatusCode::UNPROCESSABLE_ENTITY, "Unprocessable");

    assert_eq!(app.store.list_all().await.unwrap().len(), 12);
}

#[tokio::test]
async fn test_create_with_malformed_body_is_bad_request() {
    let app = helpers::TestApp::new().await;
    app.request("POST", "/questions", None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn test_search_single_match() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post("/questions/search", json!({ "searchTerm": "author" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_questions"], 1);
    assert_eq!(response.question_ids(), vec![10]);
}

#[tokio::test]
async fn test_search_is_case_insensitive() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post("/questions/search", json!({ "searchTerm": "TITLE" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.question_ids(), vec![11]);
}

#[tokio::test]
async fn test_search_without_matches() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post("/questions/search", json!({ "searchTerm": "xyzzy" }))
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total_questions"], 0);
    assert!(response.question_ids().is_empty());
}

#[tokio::test]
async fn test_search_without_term_is_bad_request() {
    let app = helpers::TestApp::new().await;

    app.post("/questions/search", json!({ "term": "author" }))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
    app.request("POST", "/questions/search", None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
}
