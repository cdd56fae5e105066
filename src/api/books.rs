//! Book (catalog) endpoints

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, DbContext},
    models::book::{Book, BookSearchQuery, NewBook, UpdateBookValue},
};

use super::MessageResponse;

/// Add book response
#[derive(Serialize, ToSchema)]
pub struct BookAdded {
    /// Status message
    pub message: String,
    /// ID of the newly registered book
    pub new_book_id: i32,
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "Full catalog ordered by ID", body = Vec<Book>),
        (status = 500, description = "Failed to fetch books")
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .list_books()
        .await
        .db_context("Failed to fetch books")?;

    Ok(Json(books))
}

/// Search books by title
#[utoipa::path(
    get,
    path = "/books/search",
    tag = "books",
    params(BookSearchQuery),
    responses(
        (status = 200, description = "Books whose title contains the needle", body = Vec<Book>),
        (status = 500, description = "Failed to search books")
    )
)]
pub async fn search_books(
    State(state): State<crate::AppState>,
    Query(query): Query<BookSearchQuery>,
) -> AppResult<Json<Vec<Book>>> {
    let books = state
        .services
        .catalog
        .search_books(query.title.as_deref())
        .await
        .db_context("Failed to search books")?;

    Ok(Json(books))
}

/// Register a new book in the catalog
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = NewBook,
    responses(
        (status = 200, description = "Book registered", body = BookAdded),
        (status = 500, description = "Failed to add book")
    )
)]
pub async fn add_book(
    State(state): State<crate::AppState>,
    Json(book): Json<NewBook>,
) -> AppResult<Json<BookAdded>> {
    let new_book_id = state
        .services
        .catalog
        .add_book(&book)
        .await
        .db_context("Failed to add book")?;

    Ok(Json(BookAdded {
        message: "Book added successfully".to_string(),
        new_book_id,
    }))
}

/// Update a book's replacement value
#[utoipa::path(
    put,
    path = "/books/value",
    tag = "books",
    request_body = UpdateBookValue,
    responses(
        (status = 200, description = "Price updated", body = MessageResponse),
        (status = 500, description = "Failed to update price")
    )
)]
pub async fn update_book_value(
    State(state): State<crate::AppState>,
    Json(update): Json<UpdateBookValue>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .catalog
        .update_book_value(&update.title, update.value)
        .await
        .db_context("Failed to update price")?;

    Ok(Json(MessageResponse {
        message: "Book price updated successfully".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = i32, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = MessageResponse),
        (status = 500, description = "Failed to delete book")
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .catalog
        .delete_book(id)
        .await
        .db_context("Failed to delete book")?;

    Ok(Json(MessageResponse {
        message: "Book deleted".to_string(),
    }))
}
