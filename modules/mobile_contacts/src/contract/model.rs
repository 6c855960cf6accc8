use std::fmt;

/// Pure contact model for inter-module communication (no serde).
///
/// `id` and `phone_number` are each unique across the whole store; the
/// domain service enforces both on insert and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileContact {
    pub id: u64,
    pub phone_number: String,
    pub user_details: UserDetails,
}

/// Identifying details embedded in a contact.
///
/// Value object, always built fresh from the incoming data and never
/// persisted on its own. In practice its `id` equals the owning contact's.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetails {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

/// Lookup key for a contact: the numeric id or the phone number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContactKey {
    Id(u64),
    PhoneNumber(String),
}

impl fmt::Display for ContactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContactKey::Id(id) => write!(f, "id {}", id),
            ContactKey::PhoneNumber(phone_number) => {
                write!(f, "phone number '{}'", phone_number)
            }
        }
    }
}

/// Data for creating a new contact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactInsert {
    pub id: u64,
    pub phone_number: String,
    pub user_details: UserDetailsInsert,
}

/// User details carried by a [`ContactInsert`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsInsert {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

/// Full-replacement data for an existing contact (not a partial patch)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactUpdate {
    pub id: u64,
    pub phone_number: String,
    pub user_details: UserDetailsUpdate,
}

/// User details carried by a [`ContactUpdate`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDetailsUpdate {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
}

// Conversions from the incoming DTOs to the domain record. Pure mappings,
// no defaulting and no hidden state.

impl From<ContactInsert> for MobileContact {
    fn from(insert: ContactInsert) -> Self {
        Self {
            id: insert.id,
            phone_number: insert.phone_number,
            user_details: insert.user_details.into(),
        }
    }
}

impl From<UserDetailsInsert> for UserDetails {
    fn from(details: UserDetailsInsert) -> Self {
        Self {
            id: details.id,
            first_name: details.first_name,
            last_name: details.last_name,
        }
    }
}

impl From<ContactUpdate> for MobileContact {
    fn from(update: ContactUpdate) -> Self {
        Self {
            id: update.id,
            phone_number: update.phone_number,
            user_details: update.user_details.into(),
        }
    }
}

impl From<UserDetailsUpdate> for UserDetails {
    fn from(details: UserDetailsUpdate) -> Self {
        Self {
            id: details.id,
            first_name: details.first_name,
            last_name: details.last_name,
        }
    }
}
