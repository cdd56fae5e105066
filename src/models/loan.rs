//! Loan (order) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Loan row joined from an order and its order line
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Loan {
    pub order_id: i32,
    pub cust_id: i32,
    pub order_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub book_id: i32,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
    pub return_date: Option<DateTime<Utc>>,
    pub fine: Option<Decimal>,
    pub fine_status: Option<String>,
}

/// Active loan row (not returned yet)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ActiveLoan {
    pub order_id: i32,
    pub cust_id: i32,
    pub order_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub book_id: i32,
    pub quantity: i32,
    pub return_date: Option<DateTime<Utc>>,
}

/// Overdue loan row (past due and not returned)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct OverdueLoan {
    pub order_id: i32,
    pub cust_id: i32,
    pub book_id: i32,
    pub due_date: DateTime<Utc>,
    pub return_date: Option<DateTime<Utc>>,
    pub fine: Option<Decimal>,
    pub fine_status: Option<String>,
}

/// Place loan request.
///
/// The borrower is matched (or registered on the fly) by email; the book is
/// matched by title.
#[derive(Debug, Deserialize, ToSchema)]
pub struct PlaceLoan {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub book_title: String,
    pub quantity: i32,
}
