//! Lesson, progress and exception edits applied to a snapshot before it is
//! written back.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::model::{ExceptionRecord, LessonRecord, StoredUserData};
use super::seed::{
    STAT_LESSONS_COMPLETED, STAT_LESSONS_IN_PROGRESS, STAT_ROADMAP_COMPLETION,
    STAT_SKILLS_ACQUIRED,
};
use super::sync::{ensure_exceptions, merge_stats};
use crate::error::{Result, TrainpiError};

pub const EXCEPTION_CLEARED: &str = "cleared";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressType {
    Lesson,
    Career,
    Quiz,
    Course,
}

/// A progress report from the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressPayload {
    pub lesson_id: u64,
    pub progress_type: ProgressType,
    pub completion_percentage: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_spent_minutes: Option<u32>,
}

pub fn find_lesson(data: &StoredUserData, lesson_id: u64) -> Result<&LessonRecord> {
    data.lessons
        .iter()
        .find(|lesson| lesson.id == lesson_id)
        .ok_or_else(|| TrainpiError::not_found("Lesson", lesson_id.to_string()))
}

/// Replaces the lesson with the same id, or appends it.
pub fn upsert_lesson(data: &mut StoredUserData, lesson: LessonRecord) {
    match data.lessons.iter_mut().find(|item| item.id == lesson.id) {
        Some(existing) => *existing = lesson,
        None => data.lessons.push(lesson),
    }
}

/// Folds a progress report into the stats. Only lesson progress counts.
pub fn apply_progress(data: &mut StoredUserData, payload: &ProgressPayload) {
    let mut stats = merge_stats(&data.stats);

    if payload.progress_type == ProgressType::Lesson {
        let completion = payload.completion_percentage.round().clamp(0.0, 100.0) as i64;
        let finished = completion >= 100;
        let number = |key: &str| stats.get(key).map(|v| v.as_i64()).unwrap_or(0);

        let lessons_completed = number(STAT_LESSONS_COMPLETED) + i64::from(finished);
        let skills_acquired = number(STAT_SKILLS_ACQUIRED) + i64::from(finished);
        let roadmap = number(STAT_ROADMAP_COMPLETION).max(completion);

        stats.insert(STAT_LESSONS_IN_PROGRESS.into(), i64::from(!finished).into());
        stats.insert(STAT_LESSONS_COMPLETED.into(), lessons_completed.into());
        stats.insert(STAT_SKILLS_ACQUIRED.into(), skills_acquired.into());
        stats.insert(STAT_ROADMAP_COMPLETION.into(), roadmap.into());
    }

    data.stats = stats;
}

/// Marks exception `id` as cleared at `now`. Other exceptions are untouched.
pub fn clear_exception(data: &mut StoredUserData, id: u64, now: DateTime<Utc>) {
    let exceptions = ensure_exceptions(&data.exceptions)
        .into_iter()
        .map(|item| {
            if item.id != Some(id) {
                return item;
            }
            let elapsed = (now - item.created_at).num_seconds().max(0);
            ExceptionRecord {
                status: EXCEPTION_CLEARED.to_string(),
                cleared_at: Some(now),
                duration: Some(elapsed),
                ..item
            }
        })
        .collect();
    data.exceptions = exceptions;
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;

    fn lesson(id: u64, title: &str) -> LessonRecord {
        LessonRecord {
            id,
            title: title.to_string(),
            modules: Vec::new(),
            quiz_questions: None,
            created_at: None,
        }
    }

    fn lesson_progress(completion: f64) -> ProgressPayload {
        ProgressPayload {
            lesson_id: 1,
            progress_type: ProgressType::Lesson,
            completion_percentage: completion,
            time_spent_minutes: None,
        }
    }

    #[test]
    fn test_find_lesson_not_found() {
        let data = StoredUserData::default();
        let err = find_lesson(&data, 7).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_upsert_replaces_or_appends() {
        let mut data = StoredUserData::default();
        upsert_lesson(&mut data, lesson(1, "Intro"));
        upsert_lesson(&mut data, lesson(2, "Next"));
        upsert_lesson(&mut data, lesson(1, "Intro v2"));

        assert_eq!(data.lessons.len(), 2);
        assert_eq!(find_lesson(&data, 1).unwrap().title, "Intro v2");
    }

    #[test]
    fn test_partial_lesson_progress() {
        let mut data = StoredUserData::default();
        apply_progress(&mut data, &lesson_progress(42.4));

        assert_eq!(data.stat_number(STAT_LESSONS_IN_PROGRESS), 1.0);
        assert_eq!(data.stat_number(STAT_LESSONS_COMPLETED), 0.0);
        assert_eq!(data.stat_number(STAT_ROADMAP_COMPLETION), 42.0);
    }

    #[test]
    fn test_finished_lesson_progress() {
        let mut data = StoredUserData::default();
        apply_progress(&mut data, &lesson_progress(60.0));
        apply_progress(&mut data, &lesson_progress(130.0));

        assert_eq!(data.stat_number(STAT_LESSONS_IN_PROGRESS), 0.0);
        assert_eq!(data.stat_number(STAT_LESSONS_COMPLETED), 1.0);
        assert_eq!(data.stat_number(STAT_SKILLS_ACQUIRED), 1.0);
        assert_eq!(data.stat_number(STAT_ROADMAP_COMPLETION), 100.0);
    }

    #[test]
    fn test_non_lesson_progress_ignored() {
        let mut data = StoredUserData::default();
        let mut payload = lesson_progress(100.0);
        payload.progress_type = ProgressType::Quiz;
        apply_progress(&mut data, &payload);

        assert_eq!(data.stat_number(STAT_LESSONS_COMPLETED), 0.0);
    }

    #[test]
    fn test_clear_exception_sets_duration() {
        let created = Utc::now() - Duration::seconds(90);
        let mut data = StoredUserData {
            exceptions: vec![ExceptionRecord {
                id: Some(3),
                kind: "ATT C".to_string(),
                status: "exception".to_string(),
                created_at: created,
                remarks: None,
                cleared_at: None,
                duration: None,
            }],
            ..Default::default()
        };
        let now = created + Duration::seconds(90);
        clear_exception(&mut data, 3, now);

        let cleared = &data.exceptions[0];
        assert_eq!(cleared.status, EXCEPTION_CLEARED);
        assert_eq!(cleared.cleared_at, Some(now));
        assert_eq!(cleared.duration, Some(90));
    }
}
