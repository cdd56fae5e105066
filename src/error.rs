//! Error types for Bibliotek server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// Database failure carrying the fixed message its route answers with
    #[error("{message}")]
    Database {
        message: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error("{0}")]
    Validation(String),
}

impl From<sqlx::Error> for AppError {
    fn from(source: sqlx::Error) -> Self {
        AppError::Database {
            message: "Database error",
            source,
        }
    }
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Database { message, source } => {
                tracing::error!("Database error: {:?}", source);
                (StatusCode::INTERNAL_SERVER_ERROR, message.to_string())
            }
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, msg),
        };

        (status, Json(ErrorResponse { error })).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

/// Attach a route-specific public message to database failures.
///
/// Only the message of a [`AppError::Database`] is replaced; the driver
/// error stays attached for logging and every other variant passes through
/// untouched.
pub trait DbContext<T> {
    fn db_context(self, message: &'static str) -> AppResult<T>;
}

impl<T> DbContext<T> for AppResult<T> {
    fn db_context(self, message: &'static str) -> AppResult<T> {
        self.map_err(|err| match err {
            AppError::Database { source, .. } => AppError::Database { message, source },
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn database_failures_answer_with_the_attached_message() {
        let result: AppResult<()> = Err(sqlx::Error::PoolTimedOut.into());
        let err = result.db_context("Failed to fetch books").unwrap_err();

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "Failed to fetch books");
    }

    #[tokio::test]
    async fn validation_errors_answer_with_bad_request() {
        let response = AppError::Validation("Year must be a number".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["error"], "Year must be a number");
    }

    #[test]
    fn db_context_leaves_other_variants_alone() {
        let result: AppResult<()> = Err(AppError::Validation("bad".to_string()));
        match result.db_context("Failed to fetch books").unwrap_err() {
            AppError::Validation(msg) => assert_eq!(msg, "bad"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
