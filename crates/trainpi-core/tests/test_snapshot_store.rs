use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use trainpi_core::Result;
use trainpi_core::career::{CAREER_BLUEPRINTS, MIN_SCORE, build_career_matches, score_blueprint};
use trainpi_core::plan::{CourseStatus, build_learning_plan};
use trainpi_core::snapshot::{
    STAT_COURSES_COMPLETED, STAT_ROADMAP_COMPLETION, StoredUserData, UserDataStore,
    sync_plan_metrics,
};
use trainpi_core::storage::KeyValueStore;
use trainpi_core::user::UserIdentity;

#[derive(Default)]
struct MemoryKv {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryKv {
    fn with(key: &str, value: &str) -> Self {
        let kv = Self::default();
        kv.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        kv
    }
}

impl KeyValueStore for MemoryKv {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.lock().unwrap().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[test]
fn test_round_trip_without_plan() {
    let store = UserDataStore::new(Arc::new(MemoryKv::default()));
    let identity = UserIdentity::Guest;

    let read = store.read_user_data(&identity);
    let written = store.write_user_data(&identity, read.clone());
    assert_eq!(written, read);

    // Persisted content reads back identically too.
    assert_eq!(store.read_user_data(&identity), read);
}

#[test]
fn test_malformed_storage_reads_as_empty() {
    for raw in ["{not json", "", "   ", "[1,2,3]"] {
        let kv = MemoryKv::with("trainpi-user-guest", raw);
        let store = UserDataStore::new(Arc::new(kv));

        let data = store.read_user_data(&UserIdentity::Guest);
        assert_eq!(data, sync_plan_metrics(StoredUserData::default()));
    }
}

#[test]
fn test_sync_idempotent_on_stored_documents() {
    let raw = r#"{
        "stats": {"roadmap_completion": "17", "custom": 5},
        "jobApplications": [
            {"company": "Initech", "role": "Analyst", "stage": "Offer",
             "appliedAt": "2024-01-02T03:04:05Z"}
        ],
        "favouriteColour": "teal"
    }"#;
    let parsed: StoredUserData = serde_json::from_str(raw).unwrap();

    let once = sync_plan_metrics(parsed);
    assert_eq!(once.job_applications[0].id, "job-1");
    assert_eq!(once.stat_number("interviews_scheduled"), 1.0);
    assert_eq!(sync_plan_metrics(once.clone()), once);
}

#[test]
fn test_course_completion_through_store() {
    let store = UserDataStore::new(Arc::new(MemoryKv::default()));
    let identity = UserIdentity::user("42");
    let plan = build_learning_plan("Data Scientist", &["Data"], &["Python", "Statistics"]);
    let before = store.save_plan_snapshot(&identity, plan, None);

    let pending = before
        .courses
        .iter()
        .find(|course| course.status != CourseStatus::Completed)
        .unwrap()
        .id
        .clone();
    store.update_course_status(&identity, &pending, CourseStatus::Completed);

    let after = store.read_user_data(&identity);
    let completed = before.stat_number(STAT_COURSES_COMPLETED) + 1.0;
    assert_eq!(after.stat_number(STAT_COURSES_COMPLETED), completed);
    let total = after.courses.len() as f64;
    assert_eq!(
        after.stat_number(STAT_ROADMAP_COMPLETION),
        (completed / total * 100.0).round().min(100.0)
    );
}

#[test]
fn test_scores_stay_in_bounds() {
    let interests = ["Technology", "Design", "Data", "Research"];
    let skills = ["JavaScript", "Python", "Figma", "SQL"];
    for blueprint in CAREER_BLUEPRINTS.iter() {
        for n in 0..=interests.len() {
            let score = score_blueprint(blueprint, &interests[..n], &skills[..n]);
            assert!((MIN_SCORE..=100).contains(&score.score));
        }
    }

    let empty: [&str; 0] = [];
    let matches = build_career_matches(&empty, &empty);
    assert!(!matches.is_empty());
}
