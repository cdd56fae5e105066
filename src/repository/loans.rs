//! Loans repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::loan::{ActiveLoan, Loan, OverdueLoan, PlaceLoan},
};

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List every loan line with its order
    pub async fn list_all(&self) -> AppResult<Vec<Loan>> {
        let loans = sqlx::query_as::<_, Loan>(
            r#"
            SELECT o.order_id, o.cust_id, o.order_date, o.due_date,
                   d.book_id, d.quantity, d.unit_price, d.total,
                   d.return_date, d.fine, d.fine_status
            FROM orders o
            JOIN order_details d ON o.order_id = d.order_id
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// List loans that have not been returned yet
    pub async fn list_active(&self) -> AppResult<Vec<ActiveLoan>> {
        let loans = sqlx::query_as::<_, ActiveLoan>(
            r#"
            SELECT o.order_id, o.cust_id, o.order_date, o.due_date,
                   d.book_id, d.quantity, d.return_date
            FROM orders o
            JOIN order_details d ON o.order_id = d.order_id
            WHERE d.return_date IS NULL
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// List loans past their due date and still out
    pub async fn list_overdue(&self) -> AppResult<Vec<OverdueLoan>> {
        let loans = sqlx::query_as::<_, OverdueLoan>(
            r#"
            SELECT o.order_id, o.cust_id, d.book_id, o.due_date,
                   d.return_date, d.fine, d.fine_status
            FROM orders o
            JOIN order_details d ON o.order_id = d.order_id
            WHERE d.return_date IS NULL
              AND o.due_date < now()
            ORDER BY o.order_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }

    /// Place a loan through `place_new_order`, which matches (or registers)
    /// the borrower by email, checks availability and books the copies out.
    /// Returns the new order ID.
    pub async fn place(&self, loan: &PlaceLoan) -> AppResult<i32> {
        let order_id = sqlx::query_scalar::<_, i32>("SELECT place_new_order($1, $2, $3, $4, $5)")
            .bind(&loan.first_name)
            .bind(&loan.last_name)
            .bind(&loan.email)
            .bind(&loan.book_title)
            .bind(loan.quantity)
            .fetch_one(&self.pool)
            .await?;

        Ok(order_id)
    }

    /// Stamp the return date on an order's lines. The fine trigger settles
    /// the fine and puts the copies back on the shelf.
    pub async fn mark_returned(&self, order_id: i32) -> AppResult<()> {
        sqlx::query("UPDATE order_details SET return_date = now() WHERE order_id = $1")
            .bind(order_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
