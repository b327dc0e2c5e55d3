//! Question management CLI commands.

use clap::{Args, Subcommand};
use dialoguer::{Confirm, Input};

use trivia_core::error::AppError;
use trivia_core::types::{CategoryId, QuestionId};
use trivia_entity::question::CreateQuestion;
use trivia_service::QuestionService;
use trivia_service::question::SearchRequest;

use super::QuestionRow;
use crate::output::{self, OutputFormat};

/// Arguments for question commands
#[derive(Debug, Args)]
pub struct QuestionArgs {
    /// Question subcommand
    #[command(subcommand)]
    pub command: QuestionCommand,
}

/// Question subcommands
#[derive(Debug, Subcommand)]
pub enum QuestionCommand {
    /// List one page of questions
    List {
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: i64,
    },
    /// Search question text
    Search {
        /// Substring to look for
        term: String,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: i64,
    },
    /// Add a question; missing fields are prompted for
    Add {
        /// Question text
        #[arg(short, long)]
        question: Option<String>,
        /// Answer text
        #[arg(short, long)]
        answer: Option<String>,
        /// Category ID
        #[arg(short, long)]
        category: Option<i64>,
        /// Difficulty (1-5)
        #[arg(short, long)]
        difficulty: Option<i32>,
    },
    /// Delete a question
    Delete {
        /// Question ID
        id: i64,
        /// Skip confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Execute question commands
pub async fn execute(
    args: &QuestionArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let service = QuestionService::new(super::open_store(&config).await?);

    match &args.command {
        QuestionCommand::List { page } => {
            let listing = service.list_questions(*page).await?;
            let rows: Vec<QuestionRow> = listing.questions.iter().map(QuestionRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_kv("Total", &listing.total_questions.to_string());
            }
        }
        QuestionCommand::Search { term, page } => {
            let request = SearchRequest {
                search_term: Some(term.clone()),
            };
            let result = service.search(request, *page).await?;
            let rows: Vec<QuestionRow> = result.questions.iter().map(QuestionRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_kv("Matches", &result.total_questions.to_string());
            }
        }
        QuestionCommand::Add {
            question,
            answer,
            category,
            difficulty,
        } => {
            let data = CreateQuestion {
                question: prompt_or(question.clone(), "Question")?,
                answer: prompt_or(answer.clone(), "Answer")?,
                category: CategoryId(prompt_or(*category, "Category ID")?),
                difficulty: prompt_or(*difficulty, "Difficulty")?,
            };
            let created = service.create_question(&data, 1).await?;
            output::print_success(&format!("Question {} created.", created.created));
        }
        QuestionCommand::Delete { id, yes } => {
            if !yes {
                let confirm = Confirm::new()
                    .with_prompt(format!("Delete question {id}?"))
                    .default(false)
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?;

                if !confirm {
                    println!("Cancelled.");
                    return Ok(());
                }
            }

            let deleted = service.delete_question(QuestionId(*id), 1).await?;
            output::print_success(&format!(
                "Question {} deleted, {} remaining.",
                deleted.deleted, deleted.total_questions
            ));
        }
    }

    Ok(())
}

fn prompt_or<T>(value: Option<T>, prompt: &str) -> Result<T, AppError>
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: ToString,
{
    match value {
        Some(v) => Ok(v),
        None => Input::<T>::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}
