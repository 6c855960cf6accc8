use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::contract::model::{ContactInsert, ContactUpdate, MobileContact};
use crate::domain::error::DomainError;
use crate::domain::repo::ContactsRepository;

/// Domain service with the uniqueness and existence rules for contacts.
/// Depends only on the repository port, not on infra types.
#[derive(Clone)]
pub struct Service {
    repo: Arc<dyn ContactsRepository>,
}

impl Service {
    /// Create a service with its persistence collaborator.
    pub fn new(repo: Arc<dyn ContactsRepository>) -> Self {
        Self { repo }
    }

    #[instrument(
        name = "mobile_contacts.service.insert_contact",
        skip(self, insert),
        fields(contact_id = insert.id, phone_number = %insert.phone_number)
    )]
    pub async fn insert_contact(
        &self,
        insert: ContactInsert,
    ) -> Result<MobileContact, DomainError> {
        info!("Inserting new mobile contact");

        let candidate = MobileContact::from(insert);

        // Phone number is checked first; it decides which conflict is
        // reported when both keys collide.
        if self
            .repo
            .phone_number_exists(&candidate.phone_number)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::phone_number_conflict(candidate));
        }

        if self
            .repo
            .user_id_exists(candidate.id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::user_id_conflict(candidate));
        }

        let stored = self
            .repo
            .insert(candidate)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully inserted contact with id={}", stored.id);
        Ok(stored)
    }

    #[instrument(
        name = "mobile_contacts.service.update_contact",
        skip(self, update),
        fields(contact_id = id)
    )]
    pub async fn update_contact(
        &self,
        id: u64,
        update: ContactUpdate,
    ) -> Result<MobileContact, DomainError> {
        info!("Updating mobile contact");

        let candidate = MobileContact::from(update);

        // Existence is decided by the caller-supplied target id.
        if !self
            .repo
            .user_id_exists(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::not_found_by_id(id));
        }

        let old = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::not_found_by_id(id))?;

        // A phone number owned by a different record is rejected;
        // re-submitting the record's own number is allowed.
        if self
            .repo
            .phone_number_exists(&candidate.phone_number)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            && old.phone_number != candidate.phone_number
        {
            return Err(DomainError::phone_number_conflict(candidate));
        }

        if self
            .repo
            .user_id_exists(candidate.id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            && old.id != candidate.id
        {
            return Err(DomainError::user_id_conflict(candidate));
        }

        // The target `id` stays the storage key even when the candidate
        // carries a different embedded id.
        let stored = self
            .repo
            .update(id, candidate)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully updated contact with id={}", id);
        Ok(stored)
    }

    #[instrument(
        name = "mobile_contacts.service.delete_contact_by_id",
        skip(self),
        fields(contact_id = id)
    )]
    pub async fn delete_contact_by_id(&self, id: u64) -> Result<(), DomainError> {
        info!("Deleting mobile contact by id");

        if !self
            .repo
            .user_id_exists(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::not_found_by_id(id));
        }

        self.repo
            .delete_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully deleted contact with id={}", id);
        Ok(())
    }

    #[instrument(
        name = "mobile_contacts.service.delete_contact_by_phone_number",
        skip(self),
        fields(phone_number = %phone_number)
    )]
    pub async fn delete_contact_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<(), DomainError> {
        info!("Deleting mobile contact by phone number");

        if !self
            .repo
            .phone_number_exists(phone_number)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
        {
            return Err(DomainError::not_found_by_phone_number(phone_number));
        }

        self.repo
            .delete_by_phone_number(phone_number)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        info!("Successfully deleted contact");
        Ok(())
    }

    #[instrument(
        name = "mobile_contacts.service.get_contact_by_id",
        skip(self),
        fields(contact_id = id)
    )]
    pub async fn get_contact_by_id(&self, id: u64) -> Result<MobileContact, DomainError> {
        debug!("Getting contact by id");

        let contact = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::not_found_by_id(id))?;

        debug!("Successfully retrieved contact");
        Ok(contact)
    }

    #[instrument(
        name = "mobile_contacts.service.get_contact_by_phone_number",
        skip(self),
        fields(phone_number = %phone_number)
    )]
    pub async fn get_contact_by_phone_number(
        &self,
        phone_number: &str,
    ) -> Result<MobileContact, DomainError> {
        debug!("Getting contact by phone number");

        let contact = self
            .repo
            .find_by_phone_number(phone_number)
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?
            .ok_or_else(|| DomainError::not_found_by_phone_number(phone_number))?;

        debug!("Successfully retrieved contact");
        Ok(contact)
    }

    #[instrument(name = "mobile_contacts.service.list_contacts", skip(self))]
    pub async fn list_contacts(&self) -> Result<Vec<MobileContact>, DomainError> {
        debug!("Listing all contacts");

        let contacts = self
            .repo
            .list_all()
            .await
            .map_err(|e| DomainError::storage(e.to_string()))?;

        debug!("Successfully listed {} contacts", contacts.len());
        Ok(contacts)
    }
}
