//! Category CLI commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use trivia_core::error::AppError;
use trivia_core::types::CategoryId;
use trivia_service::CategoryService;

use super::QuestionRow;
use crate::output::{self, OutputFormat};

/// Arguments for category commands
#[derive(Debug, Args)]
pub struct CategoryArgs {
    /// Category subcommand
    #[command(subcommand)]
    pub command: CategoryCommand,
}

/// Category subcommands
#[derive(Debug, Subcommand)]
pub enum CategoryCommand {
    /// List all categories
    List,
    /// List the questions of one category
    Questions {
        /// Category ID
        id: i64,
        /// Page number
        #[arg(short, long, default_value_t = 1)]
        page: i64,
    },
}

/// Category display row for table output
#[derive(Debug, Serialize, Tabled)]
struct CategoryRow {
    /// Category ID
    id: i64,
    /// Label
    #[serde(rename = "type")]
    #[tabled(rename = "type")]
    kind: String,
}

/// Execute category commands
pub async fn execute(
    args: &CategoryArgs,
    config_path: &str,
    format: OutputFormat,
) -> Result<(), AppError> {
    let config = super::load_config(config_path).await?;
    let service = CategoryService::new(super::open_store(&config).await?);

    match &args.command {
        CategoryCommand::List => {
            let listing = service.get_categories().await?;
            let rows: Vec<CategoryRow> = listing
                .categories
                .into_iter()
                .map(|(id, kind)| CategoryRow { id: id.get(), kind })
                .collect();
            output::print_list(&rows, format);
        }
        CategoryCommand::Questions { id, page } => {
            let result = service.questions_by_category(CategoryId(*id), *page).await?;
            let rows: Vec<QuestionRow> = result.questions.iter().map(QuestionRow::from).collect();
            output::print_list(&rows, format);
            if format == OutputFormat::Table {
                output::print_kv("Category", &result.current_category);
                output::print_kv("Total", &result.total_questions.to_string());
            }
        }
    }

    Ok(())
}
