//! Member (patron) endpoints

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::{AppResult, DbContext},
    models::customer::{Customer, RegisterMember, UpdateMember},
};

/// Member registration response
#[derive(Serialize, ToSchema)]
pub struct MemberRegistered {
    /// Status message
    pub message: String,
    /// ID of the new member
    pub new_customer_id: i32,
}

/// Member update response
#[derive(Serialize, ToSchema)]
pub struct MemberUpdated {
    /// Status message
    pub message: String,
    /// ID of the updated member
    pub updated_id: i32,
}

/// List all members
#[utoipa::path(
    get,
    path = "/member",
    tag = "members",
    responses(
        (status = 200, description = "All members ordered by ID", body = Vec<Customer>),
        (status = 500, description = "Failed to fetch members")
    )
)]
pub async fn list_members(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Customer>>> {
    let members = state
        .services
        .members
        .list_members()
        .await
        .db_context("Failed to fetch members")?;

    Ok(Json(members))
}

/// Register a new member
#[utoipa::path(
    post,
    path = "/member",
    tag = "members",
    request_body = RegisterMember,
    responses(
        (status = 200, description = "Member registered", body = MemberRegistered),
        (status = 500, description = "Failed to add member")
    )
)]
pub async fn register_member(
    State(state): State<crate::AppState>,
    Json(member): Json<RegisterMember>,
) -> AppResult<Json<MemberRegistered>> {
    let new_customer_id = state
        .services
        .members
        .register_member(&member)
        .await
        .db_context("Failed to add member")?;

    Ok(Json(MemberRegistered {
        message: "Member registered successfully!".to_string(),
        new_customer_id,
    }))
}

/// Update a member's contact details
#[utoipa::path(
    put,
    path = "/member/{id}",
    tag = "members",
    params(
        ("id" = i32, Path, description = "Customer ID")
    ),
    request_body = UpdateMember,
    responses(
        (status = 200, description = "Member updated", body = MemberUpdated),
        (status = 500, description = "Failed to update member")
    )
)]
pub async fn update_member(
    State(state): State<crate::AppState>,
    Path(id): Path<i32>,
    Json(update): Json<UpdateMember>,
) -> AppResult<Json<MemberUpdated>> {
    let updated_id = state
        .services
        .members
        .update_member(id, &update)
        .await
        .db_context("Failed to update member")?;

    Ok(Json(MemberUpdated {
        message: "Member updated successfully!".to_string(),
        updated_id,
    }))
}
