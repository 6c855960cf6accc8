use std::sync::Arc;

use async_trait::async_trait;

use crate::contract::{
    client::MobileContactsApi,
    error::MobileContactsError,
    model::{ContactInsert, ContactUpdate, MobileContact},
};
use crate::domain::{error::DomainError, service::Service};

/// Local implementation of the MobileContactsApi trait that delegates to the
/// domain service
pub struct MobileContactsLocalClient {
    service: Arc<Service>,
}

impl MobileContactsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl MobileContactsApi for MobileContactsLocalClient {
    async fn insert_contact(&self, insert: ContactInsert) -> anyhow::Result<MobileContact> {
        self.service
            .insert_contact(insert)
            .await
            .map_err(map_domain_error)
    }

    async fn update_contact(
        &self,
        id: u64,
        update: ContactUpdate,
    ) -> anyhow::Result<MobileContact> {
        self.service
            .update_contact(id, update)
            .await
            .map_err(map_domain_error)
    }

    async fn delete_contact_by_id(&self, id: u64) -> anyhow::Result<()> {
        self.service
            .delete_contact_by_id(id)
            .await
            .map_err(map_domain_error)
    }

    async fn delete_contact_by_phone_number(&self, phone_number: &str) -> anyhow::Result<()> {
        self.service
            .delete_contact_by_phone_number(phone_number)
            .await
            .map_err(map_domain_error)
    }

    async fn get_contact_by_id(&self, id: u64) -> anyhow::Result<MobileContact> {
        self.service
            .get_contact_by_id(id)
            .await
            .map_err(map_domain_error)
    }

    async fn get_contact_by_phone_number(
        &self,
        phone_number: &str,
    ) -> anyhow::Result<MobileContact> {
        self.service
            .get_contact_by_phone_number(phone_number)
            .await
            .map_err(map_domain_error)
    }

    async fn list_contacts(&self) -> anyhow::Result<Vec<MobileContact>> {
        self.service.list_contacts().await.map_err(map_domain_error)
    }
}

/// Map domain errors to contract errors wrapped in anyhow
fn map_domain_error(domain_error: DomainError) -> anyhow::Error {
    let contract_error = match domain_error {
        DomainError::ContactNotFound { key } => MobileContactsError::not_found(key),
        DomainError::PhoneNumberConflict { candidate } => {
            MobileContactsError::phone_number_conflict(candidate.phone_number)
        }
        DomainError::UserIdConflict { candidate } => {
            MobileContactsError::user_id_conflict(candidate.id)
        }
        DomainError::Storage { .. } => MobileContactsError::internal(),
    };

    anyhow::Error::new(contract_error)
}
