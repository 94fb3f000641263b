//! Account repository trait.

use super::model::AccountRecord;
use crate::error::Result;

/// Repository for the global account list.
///
/// The list is read and written as a whole, mirroring how it is stored under
/// a single key.
pub trait AccountRepository: Send + Sync {
    /// Loads every registered account. A missing list is empty.
    fn list_accounts(&self) -> Result<Vec<AccountRecord>>;

    /// Replaces the stored account list.
    fn save_accounts(&self, accounts: &[AccountRecord]) -> Result<()>;

    /// Finds an account by exact email.
    fn find_by_email(&self, email: &str) -> Result<Option<AccountRecord>> {
        Ok(self
            .list_accounts()?
            .into_iter()
            .find(|account| account.email == email))
    }
}
