//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: `UserId`, `UserIdentity` (storage identity with an explicit guest
//!   variant), account records and auth sessions
//! - `repository`: `AccountRepository` trait for the global account list

mod model;
mod repository;

pub use model::{
    ACCOUNTS_KEY, AccountRecord, AuthSession, AuthUser, GUEST_KEY, STORAGE_PREFIX, UserId,
    UserIdentity,
};
pub use repository::AccountRepository;
