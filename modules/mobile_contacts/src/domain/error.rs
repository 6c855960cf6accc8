use thiserror::Error;

use crate::contract::model::{ContactKey, MobileContact};

/// Domain-specific errors using thiserror
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Contact not found: {key}")]
    ContactNotFound { key: ContactKey },

    #[error("Contact with phone number '{}' already exists", .candidate.phone_number)]
    PhoneNumberConflict { candidate: MobileContact },

    #[error("Contact with user id {} already exists", .candidate.id)]
    UserIdConflict { candidate: MobileContact },

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl DomainError {
    pub fn not_found_by_id(id: u64) -> Self {
        Self::ContactNotFound {
            key: ContactKey::Id(id),
        }
    }

    pub fn not_found_by_phone_number(phone_number: impl Into<String>) -> Self {
        Self::ContactNotFound {
            key: ContactKey::PhoneNumber(phone_number.into()),
        }
    }

    /// The rejected candidate travels with the error so callers can report
    /// exactly what was refused.
    pub fn phone_number_conflict(candidate: MobileContact) -> Self {
        Self::PhoneNumberConflict { candidate }
    }

    pub fn user_id_conflict(candidate: MobileContact) -> Self {
        Self::UserIdConflict { candidate }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}
