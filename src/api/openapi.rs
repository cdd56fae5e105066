//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{books, health, loans, members, reports};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Bibliotek API",
        version = "1.0.0",
        description = "Library Loans Management REST API",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "/api", description = "API root")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Books
        books::list_books,
        books::search_books,
        books::add_book,
        books::update_book_value,
        books::delete_book,
        // Members
        members::list_members,
        members::register_member,
        members::update_member,
        // Loans
        loans::list_loans,
        loans::list_active_loans,
        loans::list_overdue_loans,
        loans::place_loan,
        loans::return_loan,
        // Reports
        reports::most_borrowed,
    ),
    components(
        schemas(
            // Books
            crate::models::book::Book,
            crate::models::book::NewBook,
            crate::models::book::UpdateBookValue,
            crate::models::book::BookSearchQuery,
            books::BookAdded,
            // Members
            crate::models::customer::Customer,
            crate::models::customer::RegisterMember,
            crate::models::customer::UpdateMember,
            members::MemberRegistered,
            members::MemberUpdated,
            // Loans
            crate::models::loan::Loan,
            crate::models::loan::ActiveLoan,
            crate::models::loan::OverdueLoan,
            crate::models::loan::PlaceLoan,
            loans::OrderPlaced,
            // Reports
            reports::BorrowingReport,
            // Health
            health::HealthResponse,
            // Shared
            crate::api::MessageResponse,
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "books", description = "Catalog management"),
        (name = "members", description = "Member management"),
        (name = "loans", description = "Loan management"),
        (name = "reports", description = "Borrowing reports")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
