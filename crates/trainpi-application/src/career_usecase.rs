//! Career discovery use case.
//!
//! Ranks careers for a learner's selections, previews and saves learning
//! plans, and restores a previous session from the stored snapshot.

use serde::Serialize;
use trainpi_core::career::{CareerMatch, build_career_matches, collect_selections, find_blueprint};
use trainpi_core::config::LatencyConfig;
use trainpi_core::plan::{CourseStatus, LearningPlan, build_learning_plan};
use trainpi_core::snapshot::{StoredUserData, UserDataStore, UserProfileSnapshot};
use trainpi_core::user::UserIdentity;
use trainpi_core::{Result, TrainpiError};

use crate::latency::simulate;

/// What a learner had selected last time, rebuilt from their snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerSelection {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub career_path: Option<String>,
    /// Recomputed when any interest or skill was stored.
    pub matches: Vec<CareerMatch>,
    pub plan: Option<LearningPlan>,
}

pub struct CareerUseCase {
    store: UserDataStore,
    latency: LatencyConfig,
}

impl CareerUseCase {
    pub fn new(store: UserDataStore, latency: LatencyConfig) -> Self {
        Self { store, latency }
    }

    /// Ranks the career catalog against the selections.
    ///
    /// At least one non-blank interest or skill is required.
    pub async fn discover_matches(
        &self,
        interests: &[String],
        skills: &[String],
    ) -> Result<Vec<CareerMatch>> {
        let interests = collect_selections(interests);
        let skills = collect_selections(skills);
        if interests.is_empty() && skills.is_empty() {
            return Err(TrainpiError::validation(
                "Select at least one interest or skill before continuing",
            ));
        }
        simulate(self.latency.discover()).await;

        let matches = build_career_matches(&interests, &skills);
        tracing::debug!(
            "Discovered {} matches for {} interests, {} skills",
            matches.len(),
            interests.len(),
            skills.len()
        );
        Ok(matches)
    }

    /// Restores the learner's last selections and saved plan.
    pub fn restore(&self, identity: &UserIdentity) -> CareerSelection {
        let snapshot = self.store.read_user_data(identity);
        let profile = snapshot.profile.unwrap_or_default();
        let interests = profile.interests.unwrap_or_default();
        let skills = profile.skills.unwrap_or_default();

        let matches = if interests.is_empty() && skills.is_empty() {
            Vec::new()
        } else {
            build_career_matches(&interests, &skills)
        };
        let career_path = snapshot
            .plan
            .as_ref()
            .map(|plan| plan.career_path.clone())
            .or(profile.career_path);

        CareerSelection {
            interests,
            skills,
            career_path,
            matches,
            plan: snapshot.plan,
        }
    }

    /// Builds the plan a match would produce without saving it.
    ///
    /// Selections are folded the way they are entered: blanks dropped and
    /// case-insensitive repeats collapsed.
    pub fn preview_plan(
        &self,
        career_match: &CareerMatch,
        interests: &[String],
        skills: &[String],
    ) -> LearningPlan {
        self.plan_for_career(&career_match.plan_key, interests, skills)
    }

    /// Builds a plan for a career path by name.
    ///
    /// Catalog careers use their blueprint's plan key. Any other name gets
    /// the default template and keeps the requested name.
    pub fn plan_for_career(
        &self,
        career_path: &str,
        interests: &[String],
        skills: &[String],
    ) -> LearningPlan {
        let plan_key = match find_blueprint(career_path) {
            Some(blueprint) => blueprint.plan_key,
            None => {
                tracing::debug!("No blueprint for {:?}, using default template", career_path);
                career_path
            }
        };
        build_learning_plan(
            plan_key,
            &collect_selections(interests),
            &collect_selections(skills),
        )
    }

    /// Saves `plan` and the selections that produced it.
    pub fn save_plan(
        &self,
        identity: &UserIdentity,
        plan: LearningPlan,
        interests: &[String],
        skills: &[String],
    ) -> StoredUserData {
        let profile = UserProfileSnapshot {
            interests: Some(collect_selections(interests)),
            skills: Some(collect_selections(skills)),
            career_path: Some(plan.career_path.clone()),
            strengths: None,
        };
        self.store.save_plan_snapshot(identity, plan, Some(profile))
    }

    pub fn update_course_status(
        &self,
        identity: &UserIdentity,
        course_id: &str,
        status: CourseStatus,
    ) -> StoredUserData {
        self.store.update_course_status(identity, course_id, status)
    }
}
