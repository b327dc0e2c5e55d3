//! CLI command definitions and dispatch.

pub mod categories;
pub mod migrate;
pub mod questions;
pub mod quiz;
pub mod serve;

use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use trivia_core::config::AppConfig;
use trivia_core::error::AppError;
use trivia_database::store::QuestionStore;
use trivia_entity::question::Question;

use crate::output::OutputFormat;

/// Trivia: question bank and quiz server
#[derive(Debug, Parser)]
#[command(name = "trivia", version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Category queries
    Categories(categories::CategoryArgs),
    /// Question management
    Questions(questions::QuestionArgs),
    /// Play the quiz from the terminal
    Quiz(quiz::QuizArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, &self.config).await,
            Commands::Migrate(args) => migrate::execute(args, &self.config).await,
            Commands::Categories(args) => {
                categories::execute(args, &self.config, self.format).await
            }
            Commands::Questions(args) => questions::execute(args, &self.config, self.format).await,
            Commands::Quiz(args) => quiz::execute(args, &self.config, self.format).await,
        }
    }
}

/// Helper: load configuration from file
pub async fn load_config(config_path: &str) -> Result<AppConfig, AppError> {
    AppConfig::load(config_path)
}

/// Helper: open the configured question store
pub async fn open_store(config: &AppConfig) -> Result<Arc<dyn QuestionStore>, AppError> {
    trivia_api::build_store(config).await
}

/// Question display row for table output
#[derive(Debug, Serialize, Tabled)]
pub struct QuestionRow {
    /// Question ID
    pub id: i64,
    /// Category ID
    pub category: i64,
    /// Difficulty
    pub difficulty: i32,
    /// Question text
    pub question: String,
    /// Answer
    pub answer: String,
}

impl From<&Question> for QuestionRow {
    fn from(q: &Question) -> Self {
        Self {
            id: q.id.get(),
            category: q.category.get(),
            difficulty: q.difficulty,
            question: q.question.clone(),
            answer: q.answer.clone(),
        }
    }
}
