//! Default statistics and the seed activity lists shown to new learners.

use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;

use super::model::{
    ClassEvent, ClassFormat, ExceptionRecord, JobApplication, JobStage, MentorSession,
    MentorStatus, SessionFormat, StatValue, Stats,
};

pub const STAT_CAREER_PATH: &str = "career_path";
pub const STAT_ROADMAP_COMPLETION: &str = "roadmap_completion";
pub const STAT_SKILLS_ACQUIRED: &str = "skills_acquired";
pub const STAT_SKILLS_REQUIRED: &str = "skills_required";
pub const STAT_COURSES_COMPLETED: &str = "courses_completed";
pub const STAT_LESSONS_IN_PROGRESS: &str = "lessons_in_progress";
pub const STAT_LESSONS_COMPLETED: &str = "lessons_completed";
pub const STAT_NEXT_MILESTONE: &str = "next_milestone";
pub const STAT_ACTIVE_PHASE: &str = "active_phase";
pub const STAT_JOBS_APPLIED: &str = "jobs_applied";
pub const STAT_INTERVIEWS_SCHEDULED: &str = "interviews_scheduled";
pub const STAT_MENTOR_SESSIONS: &str = "mentor_sessions";
pub const STAT_UPCOMING_CLASS: &str = "upcoming_class";
pub const STAT_NEXT_SESSION: &str = "next_session";

pub const DEFAULT_STATS_CAREER_PATH: &str = "Data Scientist";
pub const NO_UPCOMING_CLASS: &str = "No classes scheduled";
pub const NO_MENTOR_SESSION: &str = "No mentor session scheduled";

/// Builds the default statistics map.
pub fn default_stats() -> Stats {
    let mut stats = Stats::new();
    stats.insert(STAT_CAREER_PATH.into(), DEFAULT_STATS_CAREER_PATH.into());
    for key in [
        STAT_ROADMAP_COMPLETION,
        STAT_SKILLS_ACQUIRED,
        STAT_SKILLS_REQUIRED,
        STAT_COURSES_COMPLETED,
        STAT_LESSONS_IN_PROGRESS,
        STAT_LESSONS_COMPLETED,
        STAT_JOBS_APPLIED,
        STAT_INTERVIEWS_SCHEDULED,
        STAT_MENTOR_SESSIONS,
    ] {
        stats.insert(key.into(), StatValue::Integer(0));
    }
    stats.insert(STAT_NEXT_MILESTONE.into(), "".into());
    stats.insert(STAT_ACTIVE_PHASE.into(), "".into());
    stats.insert(STAT_UPCOMING_CLASS.into(), NO_UPCOMING_CLASS.into());
    stats.insert(STAT_NEXT_SESSION.into(), NO_MENTOR_SESSION.into());
    stats
}

/// Seed lists, anchored to a single instant per process so that repeated
/// syncs produce identical documents.
pub(crate) struct SeedData {
    pub exceptions: Vec<ExceptionRecord>,
    pub job_applications: Vec<JobApplication>,
    pub mentor_sessions: Vec<MentorSession>,
    pub upcoming_classes: Vec<ClassEvent>,
}

pub(crate) static SEED: Lazy<SeedData> = Lazy::new(|| SeedData::anchored_at(Utc::now()));

impl SeedData {
    fn anchored_at(now: DateTime<Utc>) -> Self {
        let days = Duration::days;
        Self {
            exceptions: vec![ExceptionRecord {
                id: Some(1),
                kind: "ATT C".to_string(),
                status: "exception".to_string(),
                created_at: now,
                remarks: Some("Attendance cancelled due to medical reasons".to_string()),
                cleared_at: None,
                duration: None,
            }],
            job_applications: vec![
                JobApplication {
                    id: "job-1".to_string(),
                    company: "Acme Labs".to_string(),
                    role: "Junior Full Stack Developer".to_string(),
                    stage: JobStage::Interviewing,
                    applied_at: now - days(5),
                    next_step: Some("Technical interview scheduled for next week".to_string()),
                    notes: None,
                },
                JobApplication {
                    id: "job-2".to_string(),
                    company: "DataVerse".to_string(),
                    role: "Product Data Analyst".to_string(),
                    stage: JobStage::Applied,
                    applied_at: now - days(12),
                    next_step: Some("Awaiting recruiter response".to_string()),
                    notes: None,
                },
            ],
            mentor_sessions: vec![
                MentorSession {
                    id: "mentor-1".to_string(),
                    mentor: "Alicia Gomez".to_string(),
                    topic: "Portfolio storytelling".to_string(),
                    scheduled_at: now + days(2),
                    status: MentorStatus::Scheduled,
                    format: SessionFormat::Virtual,
                },
                MentorSession {
                    id: "mentor-2".to_string(),
                    mentor: "David Kim".to_string(),
                    topic: "Mock system design interview".to_string(),
                    scheduled_at: now - days(7),
                    status: MentorStatus::Completed,
                    format: SessionFormat::Virtual,
                },
            ],
            upcoming_classes: vec![
                ClassEvent {
                    id: "class-1".to_string(),
                    title: "Live React Lab: Component Patterns".to_string(),
                    instructor: "Coach Ben".to_string(),
                    starts_at: now + days(3),
                    format: ClassFormat::Live,
                    location: Some("Online".to_string()),
                },
                ClassEvent {
                    id: "class-2".to_string(),
                    title: "Career Studio: Interview Pitching".to_string(),
                    instructor: "Coach Priya".to_string(),
                    starts_at: now + days(6),
                    format: ClassFormat::Workshop,
                    location: Some("Campus Hub".to_string()),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_stats_shape() {
        let stats = default_stats();
        assert_eq!(stats.len(), 14);
        assert_eq!(stats[STAT_CAREER_PATH].as_text(), Some("Data Scientist"));
        assert_eq!(stats[STAT_ROADMAP_COMPLETION], StatValue::Integer(0));
        assert_eq!(stats[STAT_NEXT_SESSION].as_text(), Some(NO_MENTOR_SESSION));
    }

    #[test]
    fn test_seed_is_anchored_once() {
        let first = SEED.job_applications[0].applied_at;
        let second = SEED.job_applications[0].applied_at;
        assert_eq!(first, second);
        assert!(SEED.mentor_sessions[0].scheduled_at > SEED.exceptions[0].created_at);
    }
}
