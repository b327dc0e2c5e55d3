//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use trivia_api::{AppState, build_app};
use trivia_core::config::AppConfig;
use trivia_core::types::CategoryId;
use trivia_database::store::{MemoryQuestionStore, QuestionStore};
use trivia_entity::question::CreateQuestion;
use trivia_service::SeededRandom;

/// Twelve questions: ids 1 to 12 in this order. Category 1 holds three,
/// category 5 holds four, category 6 is empty.
pub const QUESTIONS: [(&str, &str, i64, i32); 12] = [
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("What 1985 film sent Marty McFly back to 1955?", "Back to the Future", 5, 2),
];

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// The store behind the router, for direct checks
    pub store: Arc<dyn QuestionStore>,
}

impl TestApp {
    /// Create a test application over a seeded in-memory store
    pub async fn new() -> Self {
        let store = MemoryQuestionStore::with_default_categories();
        for (question, answer, category, difficulty) in QUESTIONS {
            store
                .insert(&CreateQuestion {
                    question: question.to_string(),
                    answer: answer.to_string(),
                    category: CategoryId(category),
                    difficulty,
                })
                .await
                .expect("Failed to seed question");
        }
        Self::with_store(Arc::new(store))
    }

    /// Create a test application over the given store
    pub fn with_store(store: Arc<dyn QuestionStore>) -> Self {
        let state = AppState::new(
            AppConfig::default(),
            Arc::clone(&store),
            Arc::new(SeededRandom::new(7)),
        );

        Self {
            router: build_app(state),
            store,
        }
    }

    /// Send a JSON request through the router
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// GET shortcut
    pub async fn get(&self, path: &str) -> TestResponse {
        self.request("GET", path, None).await
    }

    /// POST shortcut
    pub async fn post(&self, path: &str, body: Value) -> TestResponse {
        self.request("POST", path, Some(body)).await
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Assert the standard error envelope
    pub fn assert_error(&self, status: StatusCode, message: &str) {
        assert_eq!(self.status, status, "body: {}", self.body);
        assert_eq!(self.body["success"], false);
        assert_eq!(self.body["error"], status.as_u16());
        assert_eq!(self.body["message"], message);
    }

    /// Question ids in the `questions` array
    pub fn question_ids(&self) -> Vec<i64> {
        self.body["questions"]
            .as_array()
            .map(|qs| qs.iter().filter_map(|q| q["id"].as_i64()).collect())
            .unwrap_or_default()
    }
}
