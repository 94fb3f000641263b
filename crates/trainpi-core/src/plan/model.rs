//! Learning plan domain models.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TrainpiError;

/// Progress of a single course within a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "not_started",
            CourseStatus::InProgress => "in_progress",
            CourseStatus::Completed => "completed",
        }
    }
}

impl fmt::Display for CourseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CourseStatus {
    type Err = TrainpiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "not_started" => Ok(CourseStatus::NotStarted),
            "in_progress" => Ok(CourseStatus::InProgress),
            "completed" => Ok(CourseStatus::Completed),
            other => Err(TrainpiError::validation(format!(
                "Unknown course status '{}' (expected not_started, in_progress or completed)",
                other
            ))),
        }
    }
}

/// Difficulty level of a course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseLevel {
    Introductory,
    Intermediate,
    Advanced,
}

/// A course recommended by a plan.
///
/// `id` is stable across template instantiations and is the join key for
/// status updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanCourse {
    pub id: String,
    pub title: String,
    pub provider: String,
    pub duration: String,
    pub level: CourseLevel,
    #[serde(default)]
    pub status: CourseStatus,
    #[serde(default)]
    pub focus: Vec<String>,
    pub description: String,
}

/// One phase of a learning roadmap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanPhase {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub duration: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    pub milestone: String,
    #[serde(default)]
    pub focus: Vec<String>,
}

/// A learner's plan, built from a template and then persisted in their snapshot.
///
/// There is at most one plan per user; saving a new one replaces the old.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LearningPlan {
    pub career_path: String,
    pub headline: String,
    pub overview: String,
    #[serde(default)]
    pub phases: Vec<PlanPhase>,
    #[serde(default)]
    pub courses: Vec<PlanCourse>,
    #[serde(default)]
    pub focus_skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub next_step: String,
}

impl LearningPlan {
    /// Finds a course by id.
    pub fn course(&self, course_id: &str) -> Option<&PlanCourse> {
        self.courses.iter().find(|course| course.id == course_id)
    }

    /// Returns a copy of the plan with one course's status replaced.
    ///
    /// Unknown ids leave every course untouched.
    pub fn with_course_status(&self, course_id: &str, status: CourseStatus) -> LearningPlan {
        let courses = self
            .courses
            .iter()
            .map(|course| {
                if course.id == course_id {
                    PlanCourse {
                        status,
                        ..course.clone()
                    }
                } else {
                    course.clone()
                }
            })
            .collect();

        LearningPlan {
            courses,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_status_serializes_snake_case() {
        let json = serde_json::to_string(&CourseStatus::InProgress).unwrap();
        assert_eq!(json, "\"in_progress\"");
        let parsed: CourseStatus = serde_json::from_str("\"not_started\"").unwrap();
        assert_eq!(parsed, CourseStatus::NotStarted);
    }

    #[test]
    fn test_course_status_from_str() {
        assert_eq!("completed".parse::<CourseStatus>().unwrap(), CourseStatus::Completed);
        assert_eq!("In-Progress".parse::<CourseStatus>().unwrap(), CourseStatus::InProgress);
        assert!("done".parse::<CourseStatus>().unwrap_err().is_validation());
    }

    #[test]
    fn test_plan_uses_camel_case_keys() {
        let plan = LearningPlan {
            career_path: "Data Scientist".to_string(),
            headline: "h".to_string(),
            overview: "o".to_string(),
            phases: Vec::new(),
            courses: Vec::new(),
            focus_skills: vec!["Python".to_string()],
            interests: Vec::new(),
            created_at: Utc::now(),
            next_step: "n".to_string(),
        };
        let value = serde_json::to_value(&plan).unwrap();
        assert!(value.get("careerPath").is_some());
        assert!(value.get("focusSkills").is_some());
        assert!(value.get("nextStep").is_some());
        assert!(value.get("createdAt").is_some());
    }
}
