//! Attendance exceptions.

use chrono::Utc;
use trainpi_core::config::LatencyConfig;
use trainpi_core::snapshot::{ExceptionRecord, UserDataStore, clear_exception};
use trainpi_core::user::UserIdentity;

use crate::latency::simulate;

pub struct ExceptionService {
    store: UserDataStore,
    latency: LatencyConfig,
}

impl ExceptionService {
    pub fn new(store: UserDataStore, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    pub async fn get_exceptions(&self, identity: &UserIdentity) -> Vec<ExceptionRecord> {
        simulate(self.latency.api()).await;
        self.store.read_user_data(identity).exceptions
    }

    /// Marks an exception as cleared. Unknown ids change nothing.
    pub async fn clear_exception(&self, identity: &UserIdentity, id: u64) -> Vec<ExceptionRecord> {
        simulate(self.latency.api()).await;
        let mut data = self.store.read_user_data(identity);
        clear_exception(&mut data, id, Utc::now());
        self.store.write_user_data(identity, data).exceptions
    }
}
