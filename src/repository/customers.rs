//! Customers repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::AppResult,
    models::customer::{Customer, RegisterMember, UpdateMember},
};

#[derive(Clone)]
pub struct CustomersRepository {
    pool: Pool<Postgres>,
}

impl CustomersRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all members ordered by ID
    pub async fn list(&self) -> AppResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT cust_id, first_name, last_name, email, phone,
                   address, city, province, zip, join_date
            FROM customers
            ORDER BY cust_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    /// Register a new member through `upsert_customer` (a NULL ID inserts).
    /// Returns the new customer ID.
    pub async fn register(&self, member: &RegisterMember) -> AppResult<i32> {
        let cust_id = sqlx::query_scalar::<_, i32>(
            "SELECT upsert_customer(NULL, $1, $2, $3, $4, $5, $6, $7, $8)",
        )
        .bind(&member.first_name)
        .bind(&member.last_name)
        .bind(&member.email)
        .bind(&member.phone)
        .bind(&member.address)
        .bind(&member.city)
        .bind(&member.province)
        .bind(&member.zip)
        .fetch_one(&self.pool)
        .await?;

        Ok(cust_id)
    }

    /// Update a member's contact details through `upsert_customer`; NULL
    /// arguments keep the stored values. Returns the updated customer ID.
    pub async fn update_contact(&self, cust_id: i32, update: &UpdateMember) -> AppResult<i32> {
        let updated_id = sqlx::query_scalar::<_, i32>(
            "SELECT upsert_customer($1, NULL, NULL, $2, $3, $4, NULL, NULL, NULL)",
        )
        .bind(cust_id)
        .bind(&update.email)
        .bind(&update.phone)
        .bind(&update.address)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated_id)
    }
}
