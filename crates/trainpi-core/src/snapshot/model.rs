//! Per-user snapshot document models.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::plan::{LearningPlan, PlanCourse};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A dashboard statistic: either a number or a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl StatValue {
    /// Numeric view of the value; text that does not parse counts as zero.
    pub fn as_number(&self) -> f64 {
        match self {
            StatValue::Integer(value) => *value as f64,
            StatValue::Float(value) if value.is_finite() => *value,
            StatValue::Float(_) => 0.0,
            StatValue::Text(text) => text.trim().parse::<f64>().unwrap_or(0.0),
        }
    }

    pub fn as_i64(&self) -> i64 {
        self.as_number() as i64
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            StatValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<i64> for StatValue {
    fn from(value: i64) -> Self {
        StatValue::Integer(value)
    }
}

impl From<usize> for StatValue {
    fn from(value: usize) -> Self {
        StatValue::Integer(value as i64)
    }
}

impl From<&str> for StatValue {
    fn from(value: &str) -> Self {
        StatValue::Text(value.to_string())
    }
}

impl From<String> for StatValue {
    fn from(value: String) -> Self {
        StatValue::Text(value)
    }
}

/// Statistics keyed by name. Unknown keys are preserved.
pub type Stats = BTreeMap<String, StatValue>;

/// The profile part of a snapshot. Every field is optional so a partial
/// snapshot can be used as an override.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UserProfileSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub career_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strengths: Option<Vec<String>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JobStage {
    Applied,
    Interviewing,
    Offer,
    Rejected,
}

impl JobStage {
    /// Stages that count as a scheduled interview.
    pub fn is_interview(&self) -> bool {
        matches!(self, JobStage::Interviewing | JobStage::Offer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    #[serde(default)]
    pub id: String,
    pub company: String,
    pub role: String,
    pub stage: JobStage,
    pub applied_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MentorStatus {
    Scheduled,
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionFormat {
    Virtual,
    #[serde(rename = "In-person")]
    InPerson,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MentorSession {
    #[serde(default)]
    pub id: String,
    pub mentor: String,
    pub topic: String,
    pub scheduled_at: DateTime<Utc>,
    pub status: MentorStatus,
    pub format: SessionFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClassFormat {
    Live,
    Workshop,
    Cohort,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassEvent {
    #[serde(default)]
    pub id: String,
    pub title: String,
    pub instructor: String,
    pub starts_at: DateTime<Utc>,
    pub format: ClassFormat,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

/// An attendance exception raised against the learner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionRecord {
    /// Positional default (index + 1) is filled in during sync when missing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remarks: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleared_at: Option<DateTime<Utc>>,
    /// Seconds between creation and clearing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LessonModule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_takeaways: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub modules: Vec<LessonModule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quiz_questions: Option<Vec<serde_json::Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// The whole per-user document.
///
/// After [`sync_plan_metrics`](super::sync_plan_metrics) the `stats` map is a
/// deterministic function of the plan, courses and activity lists. Top-level
/// keys this model does not know about are kept in `extra` and written back
/// unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredUserData {
    #[serde(default, deserialize_with = "null_as_default", skip_serializing_if = "Vec::is_empty")]
    pub lessons: Vec<LessonRecord>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub stats: Stats,
    #[serde(default, deserialize_with = "null_as_default")]
    pub exceptions: Vec<ExceptionRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfileSnapshot>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<LearningPlan>,
    /// Mirror of `plan.courses` once a plan exists.
    #[serde(default, deserialize_with = "null_as_default")]
    pub courses: Vec<PlanCourse>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_applications: Vec<JobApplication>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mentor_sessions: Vec<MentorSession>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub upcoming_classes: Vec<ClassEvent>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl StoredUserData {
    /// Reads a stat as a number (zero when absent or not numeric).
    pub fn stat_number(&self, key: &str) -> f64 {
        self.stats.get(key).map(StatValue::as_number).unwrap_or(0.0)
    }

    /// Reads a stat as text, if it holds text.
    pub fn stat_text(&self, key: &str) -> Option<&str> {
        self.stats.get(key).and_then(StatValue::as_text)
    }
}
