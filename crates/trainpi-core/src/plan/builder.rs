//! Instantiates plan templates for a learner.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use super::library::{DEFAULT_CAREER_PATH, template_or_default};
use super::model::{CourseStatus, LearningPlan};

/// `nextStep` used when a template has no phases or tasks.
pub const NEXT_STEP_FALLBACK: &str = "Review your plan overview.";

const SKILLS_FALLBACK: &str = "core skills";
const INTERESTS_FALLBACK: &str = "new specialisations";

/// Trims values, drops blanks and removes exact duplicates, keeping the first
/// occurrence. No case folding happens here.
fn dedupe<S: AsRef<str>>(values: &[S]) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .iter()
        .map(|value| value.as_ref().trim())
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.to_string()))
        .map(str::to_string)
        .collect()
}

/// Status of a course given the learner's skills.
///
/// Every focus tag covered (case-insensitively) means `Completed`, some means
/// `InProgress`, none or an empty focus list means `NotStarted`.
pub fn derive_course_status<F, S>(focus: &[F], skills: &[S]) -> CourseStatus
where
    F: AsRef<str>,
    S: AsRef<str>,
{
    if focus.is_empty() {
        return CourseStatus::NotStarted;
    }

    let known: HashSet<String> = skills
        .iter()
        .map(|skill| skill.as_ref().to_lowercase())
        .collect();
    let overlap = focus
        .iter()
        .filter(|tag| known.contains(&tag.as_ref().to_lowercase()))
        .count();

    if overlap == focus.len() {
        CourseStatus::Completed
    } else if overlap > 0 {
        CourseStatus::InProgress
    } else {
        CourseStatus::NotStarted
    }
}

/// Builds a learning plan stamped with the current time.
pub fn build_learning_plan<I, S>(career_path: &str, interests: &[I], skills: &[S]) -> LearningPlan
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    build_learning_plan_at(career_path, interests, skills, Utc::now())
}

/// Builds a learning plan for `career_path` with an explicit creation time.
///
/// A blank path means [`DEFAULT_CAREER_PATH`]; an unknown path uses the
/// default template but keeps the requested name as the plan's career path.
pub fn build_learning_plan_at<I, S>(
    career_path: &str,
    interests: &[I],
    skills: &[S],
    created_at: DateTime<Utc>,
) -> LearningPlan
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    let normalized_career = match career_path.trim() {
        "" => DEFAULT_CAREER_PATH,
        trimmed => trimmed,
    };
    let template = template_or_default(normalized_career);

    let interest_set = dedupe(interests);
    let skill_set = dedupe(skills);

    let courses = template
        .courses
        .iter()
        .map(|course| course.to_course(derive_course_status(course.focus, skill_set.as_slice())))
        .collect();

    let headline = if interest_set.is_empty() {
        template.headline.to_string()
    } else {
        let highlighted: Vec<&str> = interest_set.iter().take(2).map(String::as_str).collect();
        format!("{} with a focus on {}", template.headline, highlighted.join(" & "))
    };

    let strengths = if skill_set.is_empty() {
        SKILLS_FALLBACK.to_string()
    } else {
        skill_set.join(", ")
    };
    let exploring = if interest_set.is_empty() {
        INTERESTS_FALLBACK.to_string()
    } else {
        interest_set.join(", ")
    };
    let overview = format!(
        "{} You will lean on your strengths in {} while exploring {}.",
        template.overview, strengths, exploring
    );

    let next_step = template
        .phases
        .first()
        .and_then(|phase| phase.tasks.first())
        .map(|task| task.to_string())
        .unwrap_or_else(|| NEXT_STEP_FALLBACK.to_string());

    LearningPlan {
        career_path: normalized_career.to_string(),
        headline,
        overview,
        phases: template.phases.iter().map(|phase| phase.to_phase()).collect(),
        courses,
        focus_skills: template.focus_skills.iter().map(|s| s.to_string()).collect(),
        interests: interest_set,
        created_at,
        next_step,
    }
}
