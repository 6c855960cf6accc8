use thiserror::Error;

use crate::contract::model::ContactKey;

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone)]
pub enum MobileContactsError {
    #[error("Contact not found: {key}")]
    NotFound { key: ContactKey },

    #[error("Contact with phone number '{phone_number}' already exists")]
    PhoneNumberConflict { phone_number: String },

    #[error("Contact with user id {id} already exists")]
    UserIdConflict { id: u64 },

    #[error("Internal error")]
    Internal,
}

impl MobileContactsError {
    pub fn not_found(key: ContactKey) -> Self {
        Self::NotFound { key }
    }

    pub fn phone_number_conflict(phone_number: String) -> Self {
        Self::PhoneNumberConflict { phone_number }
    }

    pub fn user_id_conflict(id: u64) -> Self {
        Self::UserIdConflict { id }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}
