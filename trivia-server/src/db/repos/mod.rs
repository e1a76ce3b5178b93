//! Repository implementations for database access
//!
//! Each repository borrows the pool and follows these patterns:
//! - Single queries where possible (COUNT(*) OVER() for totals, no N+1)
//! - Transactions for multi-step writes
//! - Missing rows surface as DbError::NotFound, not sqlx::Error

pub mod categories;
pub mod questions;

pub use categories::{Category, CategoryRepo};
pub use questions::{Question, QuestionRepo};

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },
}
