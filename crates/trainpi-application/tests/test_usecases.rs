use std::sync::Arc;

use trainpi_application::{
    AccountUseCase, CareerUseCase, DashboardService, ExceptionService, LessonService,
};
use trainpi_core::config::LatencyConfig;
use trainpi_core::plan::CourseStatus;
use trainpi_core::snapshot::{
    EXCEPTION_CLEARED, LessonRecord, ProgressPayload, ProgressType, STAT_COURSES_COMPLETED,
    STAT_LESSONS_COMPLETED, UserDataStore,
};
use trainpi_core::user::{AccountRepository, UserIdentity};
use trainpi_infrastructure::{KvAccountRepository, MemoryKeyValueStore};

struct Harness {
    store: UserDataStore,
    accounts: Arc<KvAccountRepository>,
}

impl Harness {
    fn new() -> Self {
        let kv = Arc::new(MemoryKeyValueStore::new());
        Self {
            store: UserDataStore::new(kv.clone()),
            accounts: Arc::new(KvAccountRepository::new(kv)),
        }
    }

    fn account_usecase(&self) -> AccountUseCase {
        AccountUseCase::new(self.accounts.clone(), self.store.clone(), LatencyConfig::none())
    }

    fn career_usecase(&self) -> CareerUseCase {
        CareerUseCase::new(self.store.clone(), LatencyConfig::none())
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

#[tokio::test]
async fn test_register_seeds_default_plan() {
    let harness = Harness::new();
    let session = harness
        .account_usecase()
        .register("ada@example.com", "pw", None)
        .await
        .unwrap();

    assert_eq!(session.user.full_name, "ada");
    assert!(session.token.starts_with("mock-token-"));

    let data = harness.store.read_user_data(&session.identity());
    let plan = data.plan.expect("starter plan");
    assert_eq!(plan.career_path, "Full Stack Developer");
    let profile = data.profile.unwrap();
    assert_eq!(profile.interests, Some(strings(&["Technology"])));
    assert_eq!(profile.strengths, Some(strings(&["JavaScript"])));
}

#[tokio::test]
async fn test_register_rejects_duplicate_email() {
    let harness = Harness::new();
    let accounts = harness.account_usecase();
    accounts
        .register("ada@example.com", "pw", Some("Ada"))
        .await
        .unwrap();

    let err = accounts
        .register("ada@example.com", "other", None)
        .await
        .unwrap_err();
    assert!(err.is_already_exists());
}

#[tokio::test]
async fn test_login_creates_then_updates_account() {
    let harness = Harness::new();
    let accounts = harness.account_usecase();

    let first = accounts.login("grace@example.com", "one").await.unwrap();
    let second = accounts.login("grace@example.com", "two").await.unwrap();

    assert_eq!(first.user.id, second.user.id);
    let stored = harness.accounts.list_accounts().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].password, "two");
}

#[tokio::test]
async fn test_login_keeps_existing_plan() {
    let harness = Harness::new();
    let accounts = harness.account_usecase();
    let career = harness.career_usecase();

    let session = accounts.login("lin@example.com", "pw").await.unwrap();
    let identity = session.identity();
    let interests = strings(&["Data"]);
    let skills = strings(&["Python"]);
    let matches = career.discover_matches(&interests, &skills).await.unwrap();
    let data_match = matches
        .iter()
        .find(|m| m.career_path == "Data Scientist")
        .unwrap();
    let plan = career.preview_plan(data_match, &interests, &skills);
    career.save_plan(&identity, plan, &interests, &skills);

    accounts.login("lin@example.com", "pw").await.unwrap();

    let restored = career.restore(&identity);
    assert_eq!(restored.career_path.as_deref(), Some("Data Scientist"));
    assert_eq!(restored.interests, interests);
    assert!(!restored.matches.is_empty());
}

#[tokio::test]
async fn test_discover_requires_selection() {
    let harness = Harness::new();
    let err = harness
        .career_usecase()
        .discover_matches(&[], &[])
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_course_update_through_usecase() {
    let harness = Harness::new();
    let career = harness.career_usecase();
    let identity = UserIdentity::Guest;

    assert!(career.restore(&identity).plan.is_none());

    let interests = strings(&["Design"]);
    let matches = career.discover_matches(&interests, &[]).await.unwrap();
    assert_eq!(matches[0].career_path, "UI/UX Designer");

    let plan = career.preview_plan(&matches[0], &interests, &[]);
    let saved = career.save_plan(&identity, plan, &interests, &[]);
    let course_id = saved.courses[0].id.clone();

    let updated = career.update_course_status(&identity, &course_id, CourseStatus::Completed);
    assert_eq!(
        updated.stat_number(STAT_COURSES_COMPLETED),
        saved.stat_number(STAT_COURSES_COMPLETED) + 1.0
    );
}

#[tokio::test]
async fn test_lessons_round_trip() {
    let harness = Harness::new();
    let lessons = LessonService::new(harness.store.clone(), LatencyConfig::none());
    let identity = UserIdentity::user(9_u64);

    assert!(lessons.list_lessons(&identity).await.is_empty());
    assert!(lessons.get_lesson(&identity, 1).await.unwrap_err().is_not_found());

    lessons
        .upsert_lesson(
            &identity,
            LessonRecord {
                id: 1,
                title: "Intro to SQL".to_string(),
                modules: Vec::new(),
                quiz_questions: None,
                created_at: None,
            },
        )
        .await;

    let lesson = lessons.get_lesson(&identity, 1).await.unwrap();
    assert_eq!(lesson.title, "Intro to SQL");
    assert_eq!(lessons.list_lessons(&identity).await.len(), 1);
}

#[tokio::test]
async fn test_progress_and_exceptions() {
    let harness = Harness::new();
    let dashboard = DashboardService::new(harness.store.clone(), LatencyConfig::none());
    let exceptions = ExceptionService::new(harness.store.clone(), LatencyConfig::none());
    let identity = UserIdentity::Guest;

    let data = dashboard
        .update_progress(
            &identity,
            &ProgressPayload {
                lesson_id: 1,
                progress_type: ProgressType::Lesson,
                completion_percentage: 100.0,
                time_spent_minutes: Some(20),
            },
        )
        .await;
    assert_eq!(data.stat_number(STAT_LESSONS_COMPLETED), 1.0);
    assert_eq!(dashboard.snapshot(&identity), data);

    let listed = exceptions.get_exceptions(&identity).await;
    let id = listed[0].id.unwrap();
    let cleared = exceptions.clear_exception(&identity, id).await;
    assert_eq!(cleared[0].status, EXCEPTION_CLEARED);
    assert!(cleared[0].duration.unwrap() >= 0);
}

#[tokio::test]
async fn test_selections_fold_case_before_saving() {
    let harness = Harness::new();
    let career = harness.career_usecase();
    let identity = UserIdentity::Guest;
    let interests = strings(&["Design", "design", " Marketing "]);
    let skills = strings(&["Figma", "FIGMA"]);

    let plan = career.plan_for_career("UI/UX Designer", &interests, &skills);
    assert_eq!(plan.interests, strings(&["Design", "Marketing"]));
    assert!(plan.headline.ends_with("with a focus on Design & Marketing"));

    let saved = career.save_plan(&identity, plan, &interests, &skills);
    let profile = saved.profile.unwrap();
    assert_eq!(profile.interests, Some(strings(&["Design", "Marketing"])));
    assert_eq!(profile.skills, Some(strings(&["Figma"])));
}

#[tokio::test]
async fn test_blank_selections_are_rejected() {
    let harness = Harness::new();
    let err = harness
        .career_usecase()
        .discover_matches(&strings(&["  "]), &strings(&[""]))
        .await
        .unwrap_err();
    assert!(err.is_validation());
}

#[tokio::test]
async fn test_unknown_career_uses_default_template() {
    let harness = Harness::new();
    let career = harness.career_usecase();

    let plan = career.plan_for_career("Space Botanist", &[], &[]);
    let default_plan = career.plan_for_career("Full Stack Developer", &[], &[]);

    assert_eq!(plan.career_path, "Space Botanist");
    assert_eq!(plan.phases, default_plan.phases);
    assert_eq!(plan.courses, default_plan.courses);
}
