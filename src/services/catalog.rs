//! Catalog management service

use rust_decimal::Decimal;

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List the whole catalog
    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// Search books by title substring
    pub async fn search_books(&self, title: Option<&str>) -> AppResult<Vec<Book>> {
        self.repository.books.search_by_title(title).await
    }

    /// Register a new book, returning its ID
    pub async fn add_book(&self, book: &NewBook) -> AppResult<i32> {
        self.repository.books.add(book).await
    }

    /// Update a book's replacement value
    pub async fn update_book_value(&self, title: &str, value: Decimal) -> AppResult<()> {
        self.repository.books.update_value(title, value).await
    }

    /// Delete a book by ID
    pub async fn delete_book(&self, book_id: i32) -> AppResult<()> {
        self.repository.books.delete(book_id).await
    }
}
