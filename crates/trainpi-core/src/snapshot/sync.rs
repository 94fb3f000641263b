//! The metrics reducer: recomputes every derived statistic from the plan,
//! course and activity lists of a snapshot.

use chrono::SecondsFormat;

use super::model::{
    ClassEvent, ExceptionRecord, JobApplication, MentorSession, MentorStatus, StatValue, Stats,
    StoredUserData,
};
use super::seed::{self, SEED};
use crate::plan::{CourseStatus, LearningPlan, PlanCourse, PlanPhase};

/// Default stats overlaid by whatever the document already carries.
pub fn merge_stats(stats: &Stats) -> Stats {
    let mut merged = seed::default_stats();
    merged.extend(stats.iter().map(|(key, value)| (key.clone(), value.clone())));
    merged
}

/// Falls back to the seed list when `items` is empty, then fills missing ids
/// with positional defaults.
fn ensure_list<T: Clone>(
    items: &[T],
    seed: &[T],
    fill_id: impl Fn(&mut T, usize),
) -> Vec<T> {
    let base = if items.is_empty() { seed } else { items };
    base.iter()
        .enumerate()
        .map(|(index, item)| {
            let mut item = item.clone();
            fill_id(&mut item, index);
            item
        })
        .collect()
}

fn fill_string_id(id: &mut String, prefix: &str, index: usize) {
    if id.is_empty() {
        *id = format!("{}-{}", prefix, index + 1);
    }
}

pub fn ensure_exceptions(exceptions: &[ExceptionRecord]) -> Vec<ExceptionRecord> {
    ensure_list(exceptions, &SEED.exceptions, |item, index| {
        item.id.get_or_insert(index as u64 + 1);
    })
}

pub fn ensure_job_applications(applications: &[JobApplication]) -> Vec<JobApplication> {
    ensure_list(applications, &SEED.job_applications, |item, index| {
        fill_string_id(&mut item.id, "job", index)
    })
}

pub fn ensure_mentor_sessions(sessions: &[MentorSession]) -> Vec<MentorSession> {
    ensure_list(sessions, &SEED.mentor_sessions, |item, index| {
        fill_string_id(&mut item.id, "mentor", index)
    })
}

pub fn ensure_upcoming_classes(classes: &[ClassEvent]) -> Vec<ClassEvent> {
    ensure_list(classes, &SEED.upcoming_classes, |item, index| {
        fill_string_id(&mut item.id, "class", index)
    })
}

fn overlaps_ignore_case(left: &[String], right: &[String]) -> bool {
    left.iter()
        .any(|a| right.iter().any(|b| a.to_lowercase() == b.to_lowercase()))
}

/// Picks the phase the learner is currently working through.
///
/// A phase is active when none of the courses share its focus, or when some
/// of the courses that do are not yet completed. When every phase is
/// satisfied the last one is returned. `None` only for a plan without phases.
pub fn find_active_phase<'a>(plan: &'a LearningPlan, courses: &[PlanCourse]) -> Option<&'a PlanPhase> {
    plan.phases
        .iter()
        .find(|phase| {
            let mut relevant = courses
                .iter()
                .filter(|course| overlaps_ignore_case(&phase.focus, &course.focus))
                .peekable();
            if relevant.peek().is_none() {
                return true;
            }
            !relevant.all(|course| course.status == CourseStatus::Completed)
        })
        .or_else(|| plan.phases.last())
}

fn apply_plan_metrics(stats: &mut Stats, plan: &LearningPlan, courses: &[PlanCourse]) {
    let count = |status: CourseStatus| courses.iter().filter(|c| c.status == status).count();
    let completed = count(CourseStatus::Completed);
    let in_progress = count(CourseStatus::InProgress);
    let total = courses.len();

    stats.insert(seed::STAT_CAREER_PATH.into(), plan.career_path.clone().into());
    stats.insert(seed::STAT_COURSES_COMPLETED.into(), completed.into());
    stats.insert(seed::STAT_LESSONS_IN_PROGRESS.into(), in_progress.into());
    stats.insert(seed::STAT_SKILLS_REQUIRED.into(), plan.focus_skills.len().into());
    stats.insert(
        seed::STAT_SKILLS_ACQUIRED.into(),
        plan.focus_skills.len().min(completed).into(),
    );
    // Zero-course plans keep whatever completion was stored before.
    if total > 0 {
        let percent = ((completed as f64 / total as f64) * 100.0).round() as i64;
        stats.insert(seed::STAT_ROADMAP_COMPLETION.into(), percent.min(100).into());
    }

    if let Some(phase) = find_active_phase(plan, courses) {
        stats.insert(seed::STAT_ACTIVE_PHASE.into(), phase.title.clone().into());
        stats.insert(seed::STAT_NEXT_MILESTONE.into(), phase.milestone.clone().into());
    }
}

fn apply_activity_metrics(
    stats: &mut Stats,
    applications: &[JobApplication],
    sessions: &[MentorSession],
    classes: &[ClassEvent],
) {
    let interviews = applications.iter().filter(|a| a.stage.is_interview()).count();
    let completed_sessions = sessions
        .iter()
        .filter(|s| s.status == MentorStatus::Completed)
        .count();
    let next_session = sessions
        .iter()
        .find(|s| s.status == MentorStatus::Scheduled)
        .map(|s| s.scheduled_at.to_rfc3339_opts(SecondsFormat::Millis, true))
        .unwrap_or_else(|| seed::NO_MENTOR_SESSION.to_string());
    let upcoming_class = classes
        .first()
        .map(|c| c.title.clone())
        .unwrap_or_else(|| seed::NO_UPCOMING_CLASS.to_string());

    stats.insert(seed::STAT_JOBS_APPLIED.into(), applications.len().into());
    stats.insert(seed::STAT_INTERVIEWS_SCHEDULED.into(), interviews.into());
    stats.insert(seed::STAT_MENTOR_SESSIONS.into(), completed_sessions.into());
    stats.insert(seed::STAT_NEXT_SESSION.into(), StatValue::Text(next_session));
    stats.insert(seed::STAT_UPCOMING_CLASS.into(), StatValue::Text(upcoming_class));
}

/// Recomputes all derived statistics and normalizes the activity lists.
///
/// Pure and idempotent: `sync_plan_metrics(sync_plan_metrics(x)) ==
/// sync_plan_metrics(x)`. The plan, profile, lessons and unknown fields pass
/// through unchanged. When a plan exists its courses become the top-level
/// `courses` mirror.
pub fn sync_plan_metrics(data: StoredUserData) -> StoredUserData {
    let mut stats = merge_stats(&data.stats);
    let courses = match &data.plan {
        Some(plan) => plan.courses.clone(),
        None => data.courses.clone(),
    };
    let job_applications = ensure_job_applications(&data.job_applications);
    let mentor_sessions = ensure_mentor_sessions(&data.mentor_sessions);
    let upcoming_classes = ensure_upcoming_classes(&data.upcoming_classes);

    if let Some(plan) = &data.plan {
        apply_plan_metrics(&mut stats, plan, &courses);
    }
    apply_activity_metrics(&mut stats, &job_applications, &mentor_sessions, &upcoming_classes);

    StoredUserData {
        stats,
        exceptions: ensure_exceptions(&data.exceptions),
        courses,
        job_applications,
        mentor_sessions,
        upcoming_classes,
        ..data
    }
}
