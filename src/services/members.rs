//! Member management service

use crate::{
    error::AppResult,
    models::customer::{Customer, RegisterMember, UpdateMember},
    repository::Repository,
};

#[derive(Clone)]
pub struct MembersService {
    repository: Repository,
}

impl MembersService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// List all members
    pub async fn list_members(&self) -> AppResult<Vec<Customer>> {
        self.repository.customers.list().await
    }

    /// Register a new member, returning the new customer ID
    pub async fn register_member(&self, member: &RegisterMember) -> AppResult<i32> {
        self.repository.customers.register(member).await
    }

    /// Update a member's contact details, returning the updated customer ID
    pub async fn update_member(&self, cust_id: i32, update: &UpdateMember) -> AppResult<i32> {
        self.repository.customers.update_contact(cust_id, update).await
    }
}
