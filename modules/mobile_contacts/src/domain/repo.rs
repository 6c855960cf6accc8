use async_trait::async_trait;

use crate::contract::model::MobileContact;

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
///
/// The port promises nothing about ordering, concurrency, or atomicity
/// across calls. The service's check-then-act sequences therefore race when
/// an implementation is shared by concurrent callers.
#[async_trait]
pub trait ContactsRepository: Send + Sync {
    /// Store a new contact, returning the stored form.
    async fn insert(&self, contact: MobileContact) -> anyhow::Result<MobileContact>;

    /// Replace the contact stored under `id` wholesale with `contact`,
    /// returning the stored form. `id` is the storage key even when
    /// `contact.id` differs from it.
    async fn update(&self, id: u64, contact: MobileContact) -> anyhow::Result<MobileContact>;

    /// Remove the contact stored under `id`.
    async fn delete_by_id(&self, id: u64) -> anyhow::Result<()>;

    /// Remove the contact owning `phone_number`.
    async fn delete_by_phone_number(&self, phone_number: &str) -> anyhow::Result<()>;

    /// Load a contact by id.
    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<MobileContact>>;

    /// Load a contact by phone number.
    async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> anyhow::Result<Option<MobileContact>>;

    /// Every stored contact, unfiltered.
    async fn list_all(&self) -> anyhow::Result<Vec<MobileContact>>;

    /// Check uniqueness by phone number.
    async fn phone_number_exists(&self, phone_number: &str) -> anyhow::Result<bool>;

    /// Check uniqueness by user id.
    async fn user_id_exists(&self, id: u64) -> anyhow::Result<bool>;
}
