//! Lessons stored in a learner's snapshot.

use trainpi_core::Result;
use trainpi_core::config::LatencyConfig;
use trainpi_core::snapshot::{LessonRecord, UserDataStore, find_lesson, upsert_lesson};
use trainpi_core::user::UserIdentity;

use crate::latency::simulate;

pub struct LessonService {
    store: UserDataStore,
    latency: LatencyConfig,
}

impl LessonService {
    pub fn new(store: UserDataStore, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    pub async fn list_lessons(&self, identity: &UserIdentity) -> Vec<LessonRecord> {
        simulate(self.latency.api()).await;
        self.store.read_user_data(identity).lessons
    }

    /// Fails with `NotFound` for an unknown id.
    pub async fn get_lesson(&self, identity: &UserIdentity, lesson_id: u64) -> Result<LessonRecord> {
        simulate(self.latency.api()).await;
        let data = self.store.read_user_data(identity);
        find_lesson(&data, lesson_id).cloned()
    }

    pub async fn upsert_lesson(&self, identity: &UserIdentity, lesson: LessonRecord) {
        simulate(self.latency.api()).await;
        let mut data = self.store.read_user_data(identity);
        tracing::debug!("Upserting lesson {} for {:?}", lesson.id, identity);
        upsert_lesson(&mut data, lesson);
        self.store.write_user_data(identity, data);
    }
}
