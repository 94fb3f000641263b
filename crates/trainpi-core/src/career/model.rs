//! Career blueprint and match models.

use serde::{Deserialize, Serialize};

/// A static career record the scoring engine ranks.
///
/// Blueprints live in a `'static` table and are never mutated; identity is
/// `career_path`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerBlueprint {
    pub career_path: &'static str,
    pub salary_range: &'static str,
    pub growth_outlook: &'static str,
    pub required_skills: &'static [&'static str],
    pub summary: &'static str,
    /// Key into the plan template library.
    pub plan_key: &'static str,
    pub interest_tags: &'static [&'static str],
}

/// A blueprint scored against one set of selections.
///
/// Created per scoring run and handed to the presentation layer; never
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerMatch {
    pub career_path: String,
    pub match_score: u8,
    pub salary_range: String,
    pub growth_outlook: String,
    pub required_skills: Vec<String>,
    pub summary: String,
    pub plan_key: String,
}

impl CareerMatch {
    /// Builds a match from a blueprint and its computed score.
    pub fn from_blueprint(blueprint: &CareerBlueprint, match_score: u8) -> Self {
        Self {
            career_path: blueprint.career_path.to_string(),
            match_score,
            salary_range: blueprint.salary_range.to_string(),
            growth_outlook: blueprint.growth_outlook.to_string(),
            required_skills: blueprint
                .required_skills
                .iter()
                .map(|skill| skill.to_string())
                .collect(),
            summary: blueprint.summary.to_string(),
            plan_key: blueprint.plan_key.to_string(),
        }
    }
}
