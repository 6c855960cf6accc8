//! In-memory repository implementation of the domain port.
//!
//! Backed by a `BTreeMap` behind a `parking_lot::RwLock`. The map key is the
//! storage key; `update` stores the record under the caller-supplied key as
//! given, without reconciling it against the record's embedded id. Each port
//! call takes the lock on its own, so the service's check-then-act sequences
//! remain non-atomic across calls.

use std::collections::BTreeMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use crate::contract::model::MobileContact;
use crate::domain::repo::ContactsRepository;

/// Map-backed repository impl, suitable for tests and embedding.
#[derive(Default)]
pub struct InMemoryContactsRepository {
    contacts: RwLock<BTreeMap<u64, MobileContact>>,
}

impl InMemoryContactsRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContactsRepository for InMemoryContactsRepository {
    async fn insert(&self, contact: MobileContact) -> anyhow::Result<MobileContact> {
        let mut contacts = self.contacts.write();
        contacts.insert(contact.id, contact.clone());
        Ok(contact)
    }

    async fn update(&self, id: u64, contact: MobileContact) -> anyhow::Result<MobileContact> {
        let mut contacts = self.contacts.write();
        contacts.insert(id, contact.clone());
        Ok(contact)
    }

    async fn delete_by_id(&self, id: u64) -> anyhow::Result<()> {
        self.contacts.write().remove(&id);
        Ok(())
    }

    async fn delete_by_phone_number(&self, phone_number: &str) -> anyhow::Result<()> {
        let mut contacts = self.contacts.write();
        contacts.retain(|_, contact| contact.phone_number != phone_number);
        Ok(())
    }

    async fn find_by_id(&self, id: u64) -> anyhow::Result<Option<MobileContact>> {
        Ok(self.contacts.read().get(&id).cloned())
    }

    async fn find_by_phone_number(
        &self,
        phone_number: &str,
    ) -> anyhow::Result<Option<MobileContact>> {
        Ok(self
            .contacts
            .read()
            .values()
            .find(|contact| contact.phone_number == phone_number)
            .cloned())
    }

    async fn list_all(&self) -> anyhow::Result<Vec<MobileContact>> {
        Ok(self.contacts.read().values().cloned().collect())
    }

    async fn phone_number_exists(&self, phone_number: &str) -> anyhow::Result<bool> {
        Ok(self
            .contacts
            .read()
            .values()
            .any(|contact| contact.phone_number == phone_number))
    }

    async fn user_id_exists(&self, id: u64) -> anyhow::Result<bool> {
        Ok(self.contacts.read().contains_key(&id))
    }
}
