//! Data models for Bibliotek

pub mod book;
pub mod customer;
pub mod loan;

// Re-export commonly used types
pub use book::{Book, BookSearchQuery, NewBook, UpdateBookValue};
pub use customer::{Customer, RegisterMember, UpdateMember};
pub use loan::{ActiveLoan, Loan, OverdueLoan, PlaceLoan};
