//! Snapshot store: reads and writes a user's document through a
//! [`KeyValueStore`], always passing it through the metrics reducer.

use std::sync::Arc;

use super::model::{StoredUserData, UserProfileSnapshot};
use super::seed::STAT_CAREER_PATH;
use super::sync::{merge_stats, sync_plan_metrics};
use crate::plan::{CourseStatus, LearningPlan};
use crate::storage::KeyValueStore;
use crate::user::UserIdentity;

/// Per-user snapshot persistence.
///
/// Reads never fail and writes never fail: storage and parse errors are
/// logged and the caller gets a synchronized document either way.
#[derive(Clone)]
pub struct UserDataStore {
    kv: Arc<dyn KeyValueStore>,
}

impl UserDataStore {
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    /// Loads the snapshot for `identity`.
    ///
    /// Missing, blank or malformed content is treated as an empty document.
    pub fn read_user_data(&self, identity: &UserIdentity) -> StoredUserData {
        let key = identity.storage_key();
        let raw = match self.kv.get_item(&key) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!("Failed to read user data for {}: {}", key, e);
                None
            }
        };

        let parsed = match raw.as_deref().map(str::trim) {
            None | Some("") => StoredUserData::default(),
            Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse stored user data for {}: {}", key, e);
                StoredUserData::default()
            }),
        };
        sync_plan_metrics(parsed)
    }

    /// Synchronizes `data` and persists it for `identity`.
    ///
    /// Returns the synchronized document even if it could not be stored.
    pub fn write_user_data(&self, identity: &UserIdentity, data: StoredUserData) -> StoredUserData {
        let synced = sync_plan_metrics(data);
        let key = identity.storage_key();

        match serde_json::to_string(&synced) {
            Ok(json) => {
                if let Err(e) = self.kv.set_item(&key, &json) {
                    tracing::warn!("Failed to persist user data for {}: {}", key, e);
                } else {
                    tracing::debug!("Persisted user data for {} ({} bytes)", key, json.len());
                }
            }
            Err(e) => tracing::warn!("Failed to serialize user data for {}: {}", key, e),
        }
        synced
    }

    /// Stores `plan` as the user's plan.
    ///
    /// Profile fields come from `profile` when given, else from the stored
    /// profile, else empty; the profile career path falls back to the plan's.
    pub fn save_plan_snapshot(
        &self,
        identity: &UserIdentity,
        plan: LearningPlan,
        profile: Option<UserProfileSnapshot>,
    ) -> StoredUserData {
        let snapshot = self.read_user_data(identity);
        let prior = snapshot.profile.clone().unwrap_or_default();
        let overrides = profile.unwrap_or_default();

        let profile = UserProfileSnapshot {
            interests: Some(overrides.interests.or(prior.interests).unwrap_or_default()),
            skills: Some(overrides.skills.or(prior.skills).unwrap_or_default()),
            career_path: Some(
                overrides
                    .career_path
                    .unwrap_or_else(|| plan.career_path.clone()),
            ),
            strengths: Some(overrides.strengths.or(prior.strengths).unwrap_or_default()),
        };

        let mut stats = merge_stats(&snapshot.stats);
        stats.insert(STAT_CAREER_PATH.into(), plan.career_path.clone().into());

        tracing::info!("Saving {} plan for {:?}", plan.career_path, identity);
        self.write_user_data(
            identity,
            StoredUserData {
                courses: plan.courses.clone(),
                plan: Some(plan),
                profile: Some(profile),
                stats,
                ..snapshot
            },
        )
    }

    /// Sets the status of one course in the stored plan.
    ///
    /// Without a stored plan the current snapshot is returned and nothing is
    /// written. Unknown course ids change nothing.
    pub fn update_course_status(
        &self,
        identity: &UserIdentity,
        course_id: &str,
        status: CourseStatus,
    ) -> StoredUserData {
        let snapshot = self.read_user_data(identity);
        let Some(plan) = snapshot.plan.as_ref() else {
            return snapshot;
        };

        let plan = plan.with_course_status(course_id, status);
        self.write_user_data(
            identity,
            StoredUserData {
                courses: plan.courses.clone(),
                plan: Some(plan),
                ..snapshot
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::*;
    use crate::error::{Result, TrainpiError};
    use crate::plan::build_learning_plan;
    use crate::snapshot::seed::STAT_COURSES_COMPLETED;

    #[derive(Default)]
    struct MockKv {
        items: Mutex<HashMap<String, String>>,
        writes: Mutex<usize>,
    }

    impl KeyValueStore for MockKv {
        fn get_item(&self, key: &str) -> Result<Option<String>> {
            Ok(self.items.lock().unwrap().get(key).cloned())
        }

        fn set_item(&self, key: &str, value: &str) -> Result<()> {
            *self.writes.lock().unwrap() += 1;
            self.items
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    fn store_with_mock() -> (UserDataStore, Arc<MockKv>) {
        let kv = Arc::new(MockKv::default());
        (UserDataStore::new(kv.clone()), kv)
    }

    fn sample_plan() -> LearningPlan {
        build_learning_plan("Data Scientist", &["Data"], &["Python"])
    }

    #[test]
    fn test_snapshots_are_isolated_per_identity() {
        let (store, kv) = store_with_mock();
        let alice = UserIdentity::user(1_u64);

        store.save_plan_snapshot(&alice, sample_plan(), None);

        assert!(store.read_user_data(&alice).plan.is_some());
        assert!(store.read_user_data(&UserIdentity::Guest).plan.is_none());
        assert!(kv.items.lock().unwrap().contains_key("trainpi-user-1"));
    }

    #[test]
    fn test_save_plan_merges_profile() {
        let (store, _kv) = store_with_mock();
        let identity = UserIdentity::Guest;
        store.save_plan_snapshot(
            &identity,
            sample_plan(),
            Some(UserProfileSnapshot {
                interests: Some(vec!["Data".to_string()]),
                skills: Some(vec!["Python".to_string()]),
                career_path: None,
                strengths: Some(vec!["Python".to_string()]),
            }),
        );

        let saved = store.save_plan_snapshot(
            &identity,
            sample_plan(),
            Some(UserProfileSnapshot {
                skills: Some(vec!["SQL".to_string()]),
                ..Default::default()
            }),
        );

        let profile = saved.profile.unwrap();
        assert_eq!(profile.interests, Some(vec!["Data".to_string()]));
        assert_eq!(profile.skills, Some(vec!["SQL".to_string()]));
        assert_eq!(profile.strengths, Some(vec!["Python".to_string()]));
        assert_eq!(profile.career_path.as_deref(), Some("Data Scientist"));
        assert_eq!(saved.courses, saved.plan.unwrap().courses);
    }

    #[test]
    fn test_update_course_status_without_plan_does_not_write() {
        let (store, kv) = store_with_mock();
        let snapshot = store.update_course_status(
            &UserIdentity::Guest,
            "anything",
            CourseStatus::Completed,
        );

        assert!(snapshot.plan.is_none());
        assert_eq!(*kv.writes.lock().unwrap(), 0);
    }

    #[test]
    fn test_update_course_status_counts_completion() {
        let (store, _kv) = store_with_mock();
        let identity = UserIdentity::Guest;
        let before = store.save_plan_snapshot(&identity, sample_plan(), None);
        let target = before
            .courses
            .iter()
            .find(|c| c.status != CourseStatus::Completed)
            .map(|c| c.id.clone())
            .unwrap();

        store.update_course_status(&identity, &target, CourseStatus::Completed);
        let after = store.read_user_data(&identity);

        assert_eq!(
            after.stat_number(STAT_COURSES_COMPLETED),
            before.stat_number(STAT_COURSES_COMPLETED) + 1.0
        );
        let unchanged = before.courses.iter().filter(|c| c.id != target);
        for course in unchanged {
            assert_eq!(after.plan.as_ref().unwrap().course(&course.id), Some(course));
        }
    }

    struct FailingKv;

    impl KeyValueStore for FailingKv {
        fn get_item(&self, _key: &str) -> Result<Option<String>> {
            Err(TrainpiError::io("disk unavailable"))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<()> {
            Err(TrainpiError::io("disk full"))
        }
    }

    #[test]
    fn test_storage_failures_are_swallowed() {
        let store = UserDataStore::new(Arc::new(FailingKv));
        let read = store.read_user_data(&UserIdentity::Guest);
        assert!(read.plan.is_none());

        let written = store.save_plan_snapshot(&UserIdentity::Guest, sample_plan(), None);
        assert!(written.plan.is_some());
        assert_eq!(written.stat_text(STAT_CAREER_PATH), Some("Data Scientist"));
    }
}
