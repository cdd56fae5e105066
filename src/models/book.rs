//! Book (catalog entry) model and related types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// Book model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub book_id: i32,
    pub title: String,
    pub author_id: i32,
    pub pub_id: i32,
    pub category_id: i32,
    pub lang_id: i32,
    pub value: Decimal,
    pub total_copies: i32,
    pub available_copies: i32,
}

/// Add book request.
///
/// Author, publisher, category and language are given by name and resolved
/// (or created) inside the database routine.
#[derive(Debug, Deserialize, ToSchema)]
pub struct NewBook {
    pub title: String,
    pub author_name: String,
    pub publisher_name: String,
    pub category_name: String,
    pub language_name: String,
    pub value: Decimal,
    pub total_copies: i32,
    pub available_copies: i32,
}

/// Reprice request; the book is addressed by its exact title
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateBookValue {
    pub title: String,
    pub value: Decimal,
}

/// Book search query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct BookSearchQuery {
    /// Substring matched against titles, case-insensitively
    pub title: Option<String>,
}
