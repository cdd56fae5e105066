//! Books repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::book::{Book, NewBook},
};

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List the whole catalog ordered by ID
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT book_id, title, author_id, pub_id, category_id,
                   lang_id, value, total_copies, available_copies
            FROM books
            ORDER BY book_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Search books by title substring, case-insensitively. An absent needle
    /// matches every title.
    pub async fn search_by_title(&self, title: Option<&str>) -> AppResult<Vec<Book>> {
        let books = sqlx::query_as::<_, Book>(
            r#"
            SELECT book_id, title, author_id, pub_id, category_id,
                   lang_id, value, total_copies, available_copies
            FROM books
            WHERE LOWER(title) LIKE '%' || LOWER($1) || '%'
            ORDER BY book_id
            "#,
        )
        .bind(title.unwrap_or(""))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    /// Register a new book through `add_new_book`, which resolves author,
    /// publisher, category and language by name. Returns the new book ID.
    pub async fn add(&self, book: &NewBook) -> AppResult<i32> {
        let book_id =
            sqlx::query_scalar::<_, i32>("SELECT add_new_book($1, $2, $3, $4, $5, $6, $7, $8)")
                .bind(&book.title)
                .bind(&book.author_name)
                .bind(&book.publisher_name)
                .bind(&book.category_name)
                .bind(&book.language_name)
                .bind(book.value)
                .bind(book.total_copies)
                .bind(book.available_copies)
                .fetch_one(&self.pool)
                .await?;

        Ok(book_id)
    }

    /// Reprice a book through `update_book_value`; the book is addressed by
    /// its exact title.
    pub async fn update_value(&self, title: &str, value: Decimal) -> AppResult<()> {
        sqlx::query("SELECT update_book_value($1, $2)")
            .bind(title)
            .bind(value)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// Delete a book by ID
    pub async fn delete(&self, book_id: i32) -> AppResult<()> {
        sqlx::query("DELETE FROM books WHERE book_id = $1")
            .bind(book_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
