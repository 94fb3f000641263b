//! Key-value store abstraction.
//!
//! Snapshots and the account list are JSON strings stored under string keys,
//! the same shape as browser local storage. Implementations live in the
//! infrastructure crate.

use crate::error::Result;

/// A synchronous string key-value store.
///
/// Writes are last-write-wins; implementations are not expected to coordinate
/// read-modify-write cycles between callers.
pub trait KeyValueStore: Send + Sync {
    /// Returns the raw value for `key`, or `None` if it was never set.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}
