//! Random selection without repetition.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use trivia_core::result::AppResult;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_database::store::QuestionStore;
use trivia_entity::question::Question;

use crate::random::RandomSource;

/// Outcome of a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPick {
    /// A question not served before in this session.
    Question(Question),
    /// Every eligible question has been served.
    Exhausted,
}

impl QuizPick {
    /// Convert into an optional question, `None` meaning exhausted.
    pub fn into_question(self) -> Option<Question> {
        match self {
            Self::Question(q) => Some(q),
            Self::Exhausted => None,
        }
    }
}

/// Picks the next quiz question.
///
/// Keeps no state between calls: the caller supplies the identifiers it has
/// already served and adds the returned one before the next call.
#[derive(Debug, Clone)]
pub struct QuizSelector {
    store: Arc<dyn QuestionStore>,
    random: Arc<dyn RandomSource>,
}

impl QuizSelector {
    /// Creates a selector over a store and a random source.
    pub fn new(store: Arc<dyn QuestionStore>, random: Arc<dyn RandomSource>) -> Self {
        Self { store, random }
    }

    /// Questions in scope (all, or one category) minus the excluded ones.
    pub async fn eligible(
        &self,
        category: Option<CategoryId>,
        excluded: &HashSet<QuestionId>,
    ) -> AppResult<Vec<Question>> {
        let pool = match category {
            Some(category_id) => self.store.list_by_category(category_id).await?,
            None => self.store.list_all().await?,
        };

        Ok(pool
            .into_iter()
            .filter(|q| !excluded.contains(&q.id))
            .collect())
    }

    /// Pick one eligible question uniformly at random, or report exhaustion.
    pub async fn next(
        &self,
        category: Option<CategoryId>,
        excluded: &HashSet<QuestionId>,
    ) -> AppResult<QuizPick> {
        let eligible = self.eligible(category, excluded).await?;
        debug!(
            category = ?category,
            excluded = excluded.len(),
            eligible = eligible.len(),
            "Selecting quiz question"
        );
        Ok(pick(eligible, self.random.as_ref()))
    }
}

/// Choose one element of `eligible` using `random`.
pub fn pick(mut eligible: Vec<Question>, random: &dyn RandomSource) -> QuizPick {
    if eligible.is_empty() {
        return QuizPick::Exhausted;
    }
    let index = random.index(eligible.len());
    QuizPick::Question(eligible.swap_remove(index))
}
