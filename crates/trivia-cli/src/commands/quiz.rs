//! Terminal quiz command.

use clap::{Args, Subcommand};

use trivia_core::error::AppError;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_service::quiz::{QuizCategory, QuizRequest};
use trivia_service::{QuizSelector, QuizService, random};

use super::QuestionRow;
use crate::output::{self, OutputFormat};

/// Arguments for quiz commands
#[derive(Debug, Args)]
pub struct QuizArgs {
    /// Quiz subcommand
    #[command(subcommand)]
    pub command: QuizCommand,
}

/// Quiz subcommands
#[derive(Debug, Subcommand)]
pub enum QuizCommand {
    /// Draw the next question
    Next {
        /// Category ID, 0 for all categories
        #[arg(short, long, default_value_t = 0)]
        category: i64,
        /// Question IDs already served (comma separated)
        #[arg(short, long, value_delimiter = ',')]
        exclude: Vec<i64>,
        /// Random seed for a reproducible pick
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Execute quiz commands
pub async fn execute(
    args: &QuizArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let store = super::open_store(&config).await?;

    match &args.command {
        QuizCommand::Next {
            category,
            exclude,
            seed,
        } => {
            let rng = random::from_seed(seed.or(config.quiz.seed));
            let service = QuizService::new(QuizSelector::new(store, rng));

            let previous: Vec<QuestionId> = exclude.iter().copied().map(QuestionId).collect();

            let result = service
                .next_question(QuizRequest {
                    previous_questions: Some(previous),
                    quiz_category: Some(QuizCategory {
                        id: CategoryId(*category),
                        kind: None,
                    }),
                })
                .await?;

            match result.question {
                Some(q) => output::print_list(&[QuestionRow::from(&q)], format),
                None => output::print_warning("No questions left in this category."),
            }
        }
    }

    Ok(())
}
