//! API handlers for Bibliotek REST endpoints

pub mod books;
pub mod health;
pub mod loans;
pub mod members;
pub mod openapi;
pub mod reports;

use axum::{
    routing::{delete, get, post, put},
    Router,
};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use utoipa::ToSchema;

use crate::AppState;

/// Plain acknowledgement body
#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    /// Status message
    pub message: String,
}

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        // Health check
        .route("/health", get(health::health_check))
        .route("/ready", get(health::readiness_check))
        // Books (catalog)
        .route("/books", get(books::list_books))
        .route("/books", post(books::add_book))
        .route("/books/search", get(books::search_books))
        .route("/books/value", put(books::update_book_value))
        .route("/books/:id", delete(books::delete_book))
        // Members
        .route("/member", get(members::list_members))
        .route("/member", post(members::register_member))
        .route("/member/:id", put(members::update_member))
        // Loans
        .route("/loans", get(loans::list_loans))
        .route("/loans", post(loans::place_loan))
        .route("/loans/active", get(loans::list_active_loans))
        .route("/loans/overdue", get(loans::list_overdue_loans))
        .route("/loans/:id/return", post(loans::return_loan))
        // Reports
        .route("/reports/most-borrowed/:year", get(reports::most_borrowed))
        .with_state(state);

    // OpenAPI documentation
    let openapi = openapi::create_openapi_router();

    Router::new()
        .nest("/api", api)
        .merge(openapi)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CompressionLayer::new()),
        )
}
