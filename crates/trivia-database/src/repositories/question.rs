//! Question repository implementation.

use sqlx::PgPool;

use trivia_core::error::{AppError, ErrorKind};
use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::question::{CreateQuestion, Question};

const COLUMNS: &str = "id, question, answer, category, difficulty";

/// Repository for question queries and mutations.
#[derive(Debug, Clone)]
pub struct QuestionRepository {
    pool: PgPool,
}

impl QuestionRepository {
    /// Create a new question repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every question ordered by ID.
    pub async fn find_all(&self) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list questions", e))
    }

    /// List the questions of one category ordered by ID.
    pub async fn find_by_category(&self, category_id: CategoryId) -> AppResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id ASC"
        ))
        .bind(category_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list category questions", e)
        })
    }

    /// Case-insensitive substring search on the question text.
    ///
    /// `%`, `_` and `\` in the term match literally.
    pub async fn search(&self, term: &str) -> AppResult<Vec<Question>> {
        if term.is_empty() {
            return Ok(Vec::new());
        }

        sqlx::query_as::<_, Question>(&format!(
            "SELECT {COLUMNS} FROM questions WHERE question ILIKE $1 ESCAPE '\\' ORDER BY id ASC"
        ))
        .bind(format!("%{}%", escape_like(term)))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to search questions", e))
    }

    /// Find a question by ID.
    pub async fn find_by_id(&self, id: QuestionId) -> AppResult<Option<Question>> {
        sqlx::query_as::<_, Question>(&format!("SELECT {COLUMNS} FROM questions WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find question", e))
    }

    /// Insert a question and return the stored row.
    pub async fn create(&self, data: &CreateQuestion) -> AppResult<Question> {
        sqlx::query_as::<_, Question>(&format!(
            "INSERT INTO questions (question, answer, category, difficulty) \
             VALUES ($1, $2, $3, $4) RETURNING {COLUMNS}"
        ))
        .bind(&data.question)
        .bind(&data.answer)
        .bind(data.category)
        .bind(data.difficulty)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::validation(format!("Category {} does not exist", data.category))
            }
            sqlx::Error::Database(ref db_err) if db_err.is_check_violation() => {
                AppError::validation("Question and answer must not be empty")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create question", e),
        })
    }

    /// Delete a question. Returns `true` if a row was removed.
    pub async fn delete(&self, id: QuestionId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete question", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}

/// Escape `LIKE` metacharacters so the term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}
