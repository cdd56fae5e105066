//! Bibliotek Library Loans Management
//!
//! A Rust REST JSON API for a library loans system: book catalog, member
//! registry, loan orders and borrowing reports. The business rules
//! (ID generation, customer upsert, order placement, fine computation)
//! live in PostgreSQL routines; this layer binds parameters and forwards
//! results.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
