//! Reporting endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult, DbContext};

/// Yearly borrowing report
#[derive(Serialize, ToSchema)]
pub struct BorrowingReport {
    /// Year the report covers
    pub year: i32,
    /// Status message
    pub message: String,
    /// Report lines, ranked by borrow count
    pub result: Vec<String>,
}

/// Most borrowed books of a year
#[utoipa::path(
    get,
    path = "/reports/most-borrowed/{year}",
    tag = "reports",
    params(
        ("year" = i32, Path, description = "Calendar year, e.g. 2024")
    ),
    responses(
        (status = 200, description = "Ranked report lines", body = BorrowingReport),
        (status = 400, description = "Year must be a number"),
        (status = 500, description = "Failed to run report")
    )
)]
pub async fn most_borrowed(
    State(state): State<crate::AppState>,
    Path(year): Path<String>,
) -> AppResult<Json<BorrowingReport>> {
    // The year is taken as a raw segment so a bad value answers 400 before
    // any database work happens.
    let year: i32 = year
        .parse()
        .map_err(|_| AppError::Validation("Year must be a number".to_string()))?;

    let result = state
        .services
        .reports
        .most_borrowed_by_year(year)
        .await
        .db_context("Failed to run report")?;

    Ok(Json(BorrowingReport {
        year,
        message: "Report generated successfully".to_string(),
        result,
    }))
}
