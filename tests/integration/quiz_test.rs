//! Integration tests for quiz play.

mod helpers;

use std::collections::HashSet;

use http::StatusCode;
use serde_json::json;

#[tokio::test]
async fn test_quiz_question_from_category() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post(
            "/quizzes",
            json!({ "previous_questions": [], "quiz_category": { "type": "Entertainment", "id": "5" } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["question"]["category"], 5);
    let id = response.body["question"]["id"].as_i64().unwrap();
    assert!((9..=12).contains(&id));
}

#[tokio::test]
async fn test_quiz_exhausts_category_without_repeats() {
    let app = helpers::TestApp::new().await;
    let mut previous: Vec<i64> = Vec::new();

    for _ in 0..4 {
        let response = app
            .post(
                "/quizzes",
                json!({ "previous_questions": previous, "quiz_category": { "id": 5 } }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        let id = response.body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id));
        previous.push(id);
    }

    let done = app
        .post(
            "/quizzes",
            json!({ "previous_questions": previous, "quiz_category": { "id": 5 } }),
        )
        .await;
    assert_eq!(done.status, StatusCode::OK);
    assert!(done.body["question"].is_null());

    let seen: HashSet<i64> = previous.into_iter().collect();
    assert_eq!(seen, (9..=12).collect());
}

#[tokio::test]
async fn test_quiz_all_categories() {
    let app = helpers::TestApp::new().await;
    let mut previous: Vec<i64> = Vec::new();

    loop {
        let response = app
            .post(
                "/quizzes",
                json!({ "previous_questions": previous, "quiz_category": { "type": "click", "id": 0 } }),
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        match response.body["question"]["id"].as_i64() {
            Some(id) => previous.push(id),
            None => break,
        }
    }

    previous.sort_unstable();
    assert_eq!(previous, (1..=12).collect::<Vec<_>>());
}

#[tokio::test]
async fn test_quiz_missing_fields_is_bad_request() {
    let app = helpers::TestApp::new().await;

    app.post("/quizzes", json!({ "quiz_category": { "id": 1 } }))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
    app.post("/quizzes", json!({ "previous_questions": [] }))
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
    app.request("POST", "/quizzes", None)
        .await
        .assert_error(StatusCode::BAD_REQUEST, "Bad Request");
}

#[tokio::test]
async fn test_quiz_unknown_category_is_exhausted() {
    let app = helpers::TestApp::new().await;

    let response = app
        .post(
            "/quizzes",
            json!({ "previous_questions": [], "quiz_category": { "id": 42 } }),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["question"].is_null());
}
