//! Customer (library member) model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Customer model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub cust_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
    pub join_date: NaiveDate,
}

/// Member registration request
#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterMember {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub zip: Option<String>,
}

/// Member contact update request; absent fields keep their stored value
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateMember {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}
