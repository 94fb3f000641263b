use std::fs;
use std::sync::Arc;

use tempfile::TempDir;
use trainpi_core::plan::{CourseStatus, build_learning_plan};
use trainpi_core::snapshot::{STAT_COURSES_COMPLETED, UserDataStore};
use trainpi_core::user::UserIdentity;
use trainpi_infrastructure::FileKeyValueStore;

#[test]
fn test_snapshot_survives_reopen() {
    let temp_dir = TempDir::new().unwrap();
    let identity = UserIdentity::user(5_u64);
    let plan = build_learning_plan("UI/UX Designer", &["Design"], &["Figma"]);
    let course_id = plan.courses[0].id.clone();

    {
        let store = UserDataStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
        store.save_plan_snapshot(&identity, plan, None);
        store.update_course_status(&identity, &course_id, CourseStatus::Completed);
    }

    let reopened = UserDataStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
    let data = reopened.read_user_data(&identity);
    let plan = data.plan.as_ref().unwrap();
    assert_eq!(plan.career_path, "UI/UX Designer");
    assert_eq!(plan.course(&course_id).unwrap().status, CourseStatus::Completed);
    assert!(data.stat_number(STAT_COURSES_COMPLETED) >= 1.0);
}

#[test]
fn test_corrupt_file_reads_as_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("trainpi-user-guest.json"), "{\"plan\": 12").unwrap();

    let store = UserDataStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
    let data = store.read_user_data(&UserIdentity::Guest);
    assert!(data.plan.is_none());
    assert_eq!(data.job_applications.len(), 2);
}

#[test]
fn test_unwritable_directory_still_returns_synced_data() {
    let temp_dir = TempDir::new().unwrap();
    let blocker = temp_dir.path().join("not-a-dir");
    fs::write(&blocker, "file in the way").unwrap();

    let store = UserDataStore::new(Arc::new(FileKeyValueStore::new(&blocker)));
    let plan = build_learning_plan("Data Scientist", &["Data"], &["Python"]);
    let data = store.save_plan_snapshot(&UserIdentity::Guest, plan, None);

    assert!(data.plan.is_some());
    assert!(store.read_user_data(&UserIdentity::Guest).plan.is_none());
}

#[test]
fn test_lookalike_user_ids_stay_isolated() {
    let temp_dir = TempDir::new().unwrap();
    let store = UserDataStore::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
    let plan = build_learning_plan("UI/UX Designer", &["Design"], &["Figma"]);

    store.save_plan_snapshot(&UserIdentity::user("ada@example"), plan, None);

    for other in ["ada_example", "ada.example", "ada%40example"] {
        let data = store.read_user_data(&UserIdentity::user(other));
        assert!(data.plan.is_none(), "{} sees another user's plan", other);
    }
    assert!(store.read_user_data(&UserIdentity::user("ada@example")).plan.is_some());
}
