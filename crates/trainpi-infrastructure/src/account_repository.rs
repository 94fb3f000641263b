//! Account repository backed by a key-value store.

use std::sync::Arc;

use trainpi_core::Result;
use trainpi_core::storage::KeyValueStore;
use trainpi_core::user::{ACCOUNTS_KEY, AccountRecord, AccountRepository};

/// Keeps the whole account list as one JSON array under [`ACCOUNTS_KEY`].
#[derive(Clone)]
pub struct KvAccountRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl KvAccountRepository {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }
}

impl AccountRepository for KvAccountRepository {
    fn list_accounts(&self) -> Result<Vec<AccountRecord>> {
        match self.kv.get_item(ACCOUNTS_KEY)? {
            Some(raw) if !raw.trim().is_empty() => Ok(serde_json::from_str(&raw)?),
            _ => Ok(Vec::new()),
        }
    }

    fn save_accounts(&self, accounts: &[AccountRecord]) -> Result<()> {
        let json = serde_json::to_string(accounts)?;
        self.kv.set_item(ACCOUNTS_KEY, &json)?;
        tracing::debug!("Saved {} accounts", accounts.len());
        Ok(())
    }
}
