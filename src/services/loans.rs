//! Loan management service

use crate::{
    error::AppResult,
    models::loan::{ActiveLoan, Loan, OverdueLoan, PlaceLoan},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List every loan, returned or not
    pub async fn list_loans(&self) -> AppResult<Vec<Loan>> {
        self.repository.loans.list_all().await
    }

    /// List loans still out
    pub async fn list_active_loans(&self) -> AppResult<Vec<ActiveLoan>> {
        self.repository.loans.list_active().await
    }

    /// List loans past their due date
    pub async fn list_overdue_loans(&self) -> AppResult<Vec<OverdueLoan>> {
        self.repository.loans.list_overdue().await
    }

    /// Place a new loan, returning the new order ID
    pub async fn place_loan(&self, loan: &PlaceLoan) -> AppResult<i32> {
        self.repository.loans.place(loan).await
    }

    /// Return the books of an order
    pub async fn return_loan(&self, order_id: i32) -> AppResult<()> {
        self.repository.loans.mark_returned(order_id).await
    }
}
