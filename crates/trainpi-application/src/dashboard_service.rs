//! Dashboard snapshot and progress reporting.

use trainpi_core::config::LatencyConfig;
use trainpi_core::snapshot::{ProgressPayload, StoredUserData, UserDataStore, apply_progress};
use trainpi_core::user::UserIdentity;

use crate::latency::simulate;

pub struct DashboardService {
    store: UserDataStore,
    latency: LatencyConfig,
}

impl DashboardService {
    pub fn new(store: UserDataStore, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    /// The synchronized snapshot the dashboard renders.
    pub fn snapshot(&self, identity: &UserIdentity) -> StoredUserData {
        self.store.read_user_data(identity)
    }

    /// Records progress and returns the stored result.
    ///
    /// Lesson progress updates lesson counters directly; a saved plan still
    /// owns the plan-derived stats after sync.
    pub async fn update_progress(
        &self,
        identity: &UserIdentity,
        payload: &ProgressPayload,
    ) -> StoredUserData {
        simulate(self.latency.api()).await;
        let mut data = self.store.read_user_data(identity);
        apply_progress(&mut data, payload);
        self.store.write_user_data(identity, data)
    }
}
