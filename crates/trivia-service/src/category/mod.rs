//! Category listing and per-category question queries.

pub mod service;

pub use service::{CategoryListing, CategoryQuestions, CategoryService};
