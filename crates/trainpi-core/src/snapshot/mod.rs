//! Per-user snapshot module.
//!
//! # Module Structure
//!
//! - `model`: `StoredUserData` and the records it carries
//! - `seed`: default statistics and seed activity lists
//! - `sync`: `sync_plan_metrics`, the pure reducer that derives all stats
//! - `store`: `UserDataStore`, persistence over a `KeyValueStore`
//! - `activity`: lesson, progress and exception edits

mod activity;
mod model;
mod seed;
mod store;
mod sync;

pub use activity::{
    EXCEPTION_CLEARED, ProgressPayload, ProgressType, apply_progress, clear_exception,
    find_lesson, upsert_lesson,
};
pub use model::{
    ClassEvent, ClassFormat, ExceptionRecord, JobApplication, JobStage, LessonModule,
    LessonRecord, MentorSession, MentorStatus, SessionFormat, StatValue, Stats, StoredUserData,
    UserProfileSnapshot,
};
pub use seed::{
    DEFAULT_STATS_CAREER_PATH, NO_MENTOR_SESSION, NO_UPCOMING_CLASS, STAT_ACTIVE_PHASE,
    STAT_CAREER_PATH, STAT_COURSES_COMPLETED, STAT_INTERVIEWS_SCHEDULED, STAT_JOBS_APPLIED,
    STAT_LESSONS_COMPLETED, STAT_LESSONS_IN_PROGRESS, STAT_MENTOR_SESSIONS, STAT_NEXT_MILESTONE,
    STAT_NEXT_SESSION, STAT_ROADMAP_COMPLETION, STAT_SKILLS_ACQUIRED, STAT_SKILLS_REQUIRED,
    STAT_UPCOMING_CLASS, default_stats,
};
pub use store::UserDataStore;
pub use sync::{
    ensure_exceptions, ensure_job_applications, ensure_mentor_sessions, ensure_upcoming_classes,
    find_active_phase, merge_stats, sync_plan_metrics,
};
