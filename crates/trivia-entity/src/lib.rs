//! # trivia-entity
//!
//! Domain entity models. Every struct in this crate represents a database
//! table row or the data needed to create one. Table rows derive
//! `sqlx::FromRow`.

pub mod category;
pub mod question;

pub use category::{Category, CategoryMap};
pub use question::{CreateQuestion, Question};
