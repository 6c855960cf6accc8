//! Mobile contact directory module.
//!
//! Validates and orchestrates CRUD on mobile contact records, enforcing
//! phone-number and user-id uniqueness before delegating persistence to the
//! repository port. The uniqueness checks and the mutation that follows them
//! are separate port calls with no atomicity between them: a repository
//! shared across concurrent callers can admit duplicates in the window
//! between check and write. Closing that window means pushing uniqueness
//! enforcement into the storage layer itself (a single conditional write);
//! the service does not do this.

// === PUBLIC CONTRACT ===
// Only the contract module is stable API for other modules
pub mod contract;

// Re-export the public contract components
pub use contract::{client, error, model};

// === INTERNAL MODULES ===
// Exposed for comprehensive testing only; external consumers should stick
// to the `contract` module.
#[doc(hidden)]
pub mod domain;
#[doc(hidden)]
pub mod gateways;
#[doc(hidden)]
pub mod infra;
