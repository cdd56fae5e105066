//! Reports repository for database operations

use sqlx::{Pool, Postgres};

use crate::error::AppResult;

#[derive(Clone)]
pub struct ReportsRepository {
    pool: Pool<Postgres>,
}

impl ReportsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Run the yearly most-borrowed report. Each returned row is one
    /// human-readable line, ranked by borrow count.
    pub async fn most_borrowed_by_year(&self, year: i32) -> AppResult<Vec<String>> {
        let lines = sqlx::query_scalar::<_, String>("SELECT most_borrowed_by_year($1)")
            .bind(year)
            .fetch_all(&self.pool)
            .await?;

        Ok(lines)
    }
}
