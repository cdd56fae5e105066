//! Loan management endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, DbContext},
    models::loan::{ActiveLoan, Loan, OverdueLoan, PlaceLoan},
};

use super::MessageResponse;

/// Place loan response
#[derive(Serialize, ToSchema)]
pub struct OrderPlaced {
    /// Status message
    pub message: String,
    /// ID of the new order
    pub order_id: i32,
}

/// List all loans
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    responses(
        (status = 200, description = "Every loan line, returned or not", body = Vec<Loan>),
        (status = 500, description = "Failed to fetch loans")
    )
)]
pub async fn list_loans(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Loan>>> {
    let loans = state
        .services
        .loans
        .list_loans()
        .await
        .db_context("Failed to fetch loans")?;

    Ok(Json(loans))
}

/// List active loans
#[utoipa::path(
    get,
    path = "/loans/active",
    tag = "loans",
    responses(
        (status = 200, description = "Loans not returned yet", body = Vec<ActiveLoan>),
        (status = 500, description = "Failed to fetch active loans")
    )
)]
pub async fn list_active_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<ActiveLoan>>> {
    let loans = state
        .services
        .loans
        .list_active_loans()
        .await
        .db_context("Failed to fetch active loans")?;

    Ok(Json(loans))
}

/// List overdue loans
#[utoipa::path(
    get,
    path = "/loans/overdue",
    tag = "loans",
    responses(
        (status = 200, description = "Loans past their due date and still out", body = Vec<OverdueLoan>),
        (status = 500, description = "Failed to fetch overdue loans")
    )
)]
pub async fn list_overdue_loans(
    State(state): State<crate::AppState>,
) -> AppResult<Json<Vec<OverdueLoan>>> {
    let loans = state
        .services
        .loans
        .list_overdue_loans()
        .await
        .db_context("Failed to fetch overdue loans")?;

    Ok(Json(loans))
}

/// Place a new loan (borrow a book)
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    request_body = PlaceLoan,
    responses(
        (status = 200, description = "Loan placed", body = OrderPlaced),
        (status = 500, description = "Failed to place loan")
    )
)]
pub async fn place_loan(
    State(state): State<crate::AppState>,
    Json(loan): Json<PlaceLoan>,
) -> AppResult<Json<OrderPlaced>> {
    let order_id = state
        .services
        .loans
        .place_loan(&loan)
        .await
        .db_context("Failed to place loan")?;

    Ok(Json(OrderPlaced {
        message: "Loan placed successfully".to_string(),
        order_id,
    }))
}

/// Return the books of an order
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    params(
        ("id" = i32, Path, description = "Order ID")
    ),
    responses(
        (status = 200, description = "Books returned", body = MessageResponse),
        (status = 500, description = "Failed to return book")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    Path(order_id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    state
        .services
        .loans
        .return_loan(order_id)
        .await
        .db_context("Failed to return book")?;

    Ok(Json(MessageResponse {
        message: "Book returned successfully".to_string(),
    }))
}
