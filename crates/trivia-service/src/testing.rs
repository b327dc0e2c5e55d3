//! Fixtures shared by the service unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use trivia_core::error::AppError;
use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_database::store::{MemoryQuestionStore, QuestionStore};
use trivia_entity::category::Category;
use trivia_entity::question::{CreateQuestion, Question};

use crate::random::RandomSource;

const SAMPLE: [(&str, &str, i64, i32); 12] = [
    ("What movie earned Tom Hanks his third straight Oscar nomination, in 1996?", "Apollo 13", 5, 4),
    ("What actor did author Anne Rice first denounce, then praise in the role of her beloved Lestat?", "Tom Cruise", 5, 4),
    ("What was the title of the 1990 fantasy directed by Tim Burton about a young man with multi-bladed appendages?", "Edward Scissorhands", 5, 3),
    ("What 1985 film sent Marty McFly back to 1955?", "Back to the Future", 5, 2),
    ("What is the heaviest organ in the human body?", "The Liver", 1, 4),
    ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
    ("Hematology is a branch of medicine involving the study of what?", "Blood", 1, 4),
    ("La Giaconda is better known as what?", "Mona Lisa", 2, 3),
    ("Which Dutch graphic artist, initials M C, was a creator of optical illusions?", "Escher", 2, 1),
    ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
    ("The Taj Mahal is located in which Indian city?", "Agra", 3, 2),
    ("Whose autobiography is entitled 'I Know Why the Caged Bird Sings'?", "Maya Angelou", 4, 2),
];

/// Twelve questions as a fresh store numbers them: ids 1 to 12, three in
/// category 1, four in category 5, none in category 6.
pub fn sample_questions() -> Vec<Question> {
    SAMPLE
        .iter()
        .zip(1i64..)
        .map(|(&(question, answer, category, difficulty), id)| Question {
            id: QuestionId(id),
            question: question.to_string(),
            answer: answer.to_string(),
            category: CategoryId(category),
            difficulty,
        })
        .collect()
}

/// A memory store holding the default categories and [`sample_questions`].
pub async fn seeded_store() -> (Arc<dyn QuestionStore>, Vec<Question>) {
    let store = MemoryQuestionStore::with_default_categories();
    let questions = sample_questions();
    for q in &questions {
        let id = store
            .insert(&CreateQuestion {
                question: q.question.clone(),
                answer: q.answer.clone(),
                category: q.category,
                difficulty: q.difficulty,
            })
            .await
            .expect("seed question");
        assert_eq!(id, q.id);
    }
    (Arc::new(store), questions)
}

/// Random source replaying scripted indices (wrapped into range).
#[derive(Debug)]
pub struct FixedRandom {
    script: Mutex<VecDeque<usize>>,
}

impl FixedRandom {
    pub fn new(script: Vec<usize>) -> Self {
        Self {
            script: Mutex::new(script.into()),
        }
    }
}

impl RandomSource for FixedRandom {
    fn index(&self, len: usize) -> usize {
        let mut script = self.script.lock().unwrap();
        let next = script.pop_front().unwrap_or(0);
        script.push_back(next);
        next % len
    }
}

/// Store whose every operation fails as if the database were down.
#[derive(Debug, Default)]
pub struct FailingStore;

fn down<T>() -> AppResult<T> {
    Err(AppError::database("connection refused"))
}

#[async_trait]
impl QuestionStore for FailingStore {
    fn backend(&self) -> &str {
        "failing"
    }

    async fn health_check(&self) -> AppResult<bool> {
        down()
    }

    async fn list_all(&self) -> AppResult<Vec<Question>> {
        down()
    }

    async fn list_by_category(&self, _category_id: CategoryId) -> AppResult<Vec<Question>> {
        down()
    }

    async fn search(&self, _term: &str) -> AppResult<Vec<Question>> {
        down()
    }

    async fn get_categories(&self) -> AppResult<Vec<Category>> {
        down()
    }

    async fn get_category(&self, _category_id: CategoryId) -> AppResult<Category> {
        down()
    }

    async fn find_by_id(&self, _id: QuestionId) -> AppResult<Option<Question>> {
        down()
    }

    async fn insert(&self, _question: &CreateQuestion) -> AppResult<QuestionId> {
        down()
    }

    async fn delete_by_id(&self, _id: QuestionId) -> AppResult<()> {
        down()
    }
}
