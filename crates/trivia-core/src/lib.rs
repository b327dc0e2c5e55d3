//! # trivia-core
//!
//! Core crate for the trivia service. Contains configuration schemas,
//! typed identifiers, the pagination engine, and the unified error system.
//!
//! This crate has **no** internal dependencies on other trivia crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::{AppError, ErrorKind};
pub use result::AppResult;
