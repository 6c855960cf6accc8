use async_trait::async_trait;

use crate::contract::model::{ContactInsert, ContactUpdate, MobileContact};

/// Public API trait for the mobile_contacts module that other modules can use
#[async_trait]
pub trait MobileContactsApi: Send + Sync {
    /// Store a new contact after uniqueness validation
    async fn insert_contact(&self, insert: ContactInsert) -> anyhow::Result<MobileContact>;

    /// Replace the contact stored under `id` wholesale
    async fn update_contact(
        &self,
        id: u64,
        update: ContactUpdate,
    ) -> anyhow::Result<MobileContact>;

    /// Delete a contact by id
    async fn delete_contact_by_id(&self, id: u64) -> anyhow::Result<()>;

    /// Delete a contact by phone number
    async fn delete_contact_by_phone_number(&self, phone_number: &str) -> anyhow::Result<()>;

    /// Get a contact by id
    async fn get_contact_by_id(&self, id: u64) -> anyhow::Result<MobileContact>;

    /// Get a contact by phone number
    async fn get_contact_by_phone_number(
        &self,
        phone_number: &str,
    ) -> anyhow::Result<MobileContact>;

    /// List every stored contact
    async fn list_contacts(&self) -> anyhow::Result<Vec<MobileContact>>;
}
