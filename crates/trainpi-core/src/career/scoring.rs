//! Weighted-sum scoring of career blueprints.

use std::collections::HashSet;

use super::catalog::CAREER_BLUEPRINTS;
use super::model::{CareerBlueprint, CareerMatch};

/// Lowest score a blueprint can receive.
pub const MIN_SCORE: u8 = 35;
/// Highest score a blueprint can receive.
pub const MAX_SCORE: u8 = 100;
/// Synthetic scores given to the first two catalog entries when nothing overlaps.
pub const FALLBACK_SCORES: [u8; 2] = [40, 35];

const INTEREST_WEIGHT: f64 = 35.0;
const SKILL_WEIGHT: f64 = 40.0;
const ANY_SKILL_BONUS: f64 = 5.0;
const ALL_SKILLS_BONUS: f64 = 5.0;

/// Result of scoring one blueprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlueprintScore {
    /// Final score, always within `MIN_SCORE..=MAX_SCORE`.
    pub score: u8,
    pub interest_matches: usize,
    pub skill_matches: usize,
}

impl BlueprintScore {
    /// True when the selections share nothing with the blueprint.
    pub fn has_no_overlap(&self) -> bool {
        self.interest_matches == 0 && self.skill_matches == 0
    }
}

/// Trims and lower-cases a value for comparison.
pub fn normalize_value(value: &str) -> String {
    value.trim().to_lowercase()
}

fn normalized_set<S: AsRef<str>>(values: &[S]) -> HashSet<String> {
    values
        .iter()
        .map(|value| normalize_value(value.as_ref()))
        .collect()
}

fn count_matches(tags: &[&str], selected: &HashSet<String>) -> usize {
    tags.iter()
        .filter(|tag| selected.contains(&normalize_value(tag)))
        .count()
}

fn score_against(
    blueprint: &CareerBlueprint,
    interests: &HashSet<String>,
    skills: &HashSet<String>,
) -> BlueprintScore {
    let interest_matches = count_matches(blueprint.interest_tags, interests);
    let skill_matches = count_matches(blueprint.required_skills, skills);

    let interest_coverage = interest_matches as f64 / blueprint.interest_tags.len().max(1) as f64;
    let skill_coverage = skill_matches as f64 / blueprint.required_skills.len().max(1) as f64;

    let mut raw = f64::from(MIN_SCORE)
        + interest_coverage * INTEREST_WEIGHT
        + skill_coverage * SKILL_WEIGHT;
    if skill_matches > 0 {
        raw += ANY_SKILL_BONUS;
        if skill_matches == blueprint.required_skills.len() {
            raw += ALL_SKILLS_BONUS;
        }
    }

    let score = raw
        .round()
        .clamp(f64::from(MIN_SCORE), f64::from(MAX_SCORE)) as u8;

    BlueprintScore {
        score,
        interest_matches,
        skill_matches,
    }
}

/// Scores a single blueprint against the selected interests and skills.
///
/// Comparison is case-insensitive and ignores surrounding whitespace.
pub fn score_blueprint<I, S>(
    blueprint: &CareerBlueprint,
    selected_interests: &[I],
    selected_skills: &[S],
) -> BlueprintScore
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    score_against(
        blueprint,
        &normalized_set(selected_interests),
        &normalized_set(selected_skills),
    )
}

/// Ranks the built-in catalog against the selections.
///
/// See [`build_career_matches_from`].
pub fn build_career_matches<I, S>(selected_interests: &[I], selected_skills: &[S]) -> Vec<CareerMatch>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    build_career_matches_from(&CAREER_BLUEPRINTS, selected_interests, selected_skills)
}

/// Ranks `catalog` against the selections.
///
/// Blueprints with no interest and no skill overlap are dropped; the rest are
/// sorted by score, highest first, with catalog order kept for ties. When
/// nothing survives, the first two catalog entries are returned with the
/// synthetic scores in [`FALLBACK_SCORES`].
pub fn build_career_matches_from<I, S>(
    catalog: &[CareerBlueprint],
    selected_interests: &[I],
    selected_skills: &[S],
) -> Vec<CareerMatch>
where
    I: AsRef<str>,
    S: AsRef<str>,
{
    let interests = normalized_set(selected_interests);
    let skills = normalized_set(selected_skills);

    let mut matches: Vec<CareerMatch> = catalog
        .iter()
        .filter_map(|blueprint| {
            let scored = score_against(blueprint, &interests, &skills);
            if scored.has_no_overlap() {
                None
            } else {
                Some(CareerMatch::from_blueprint(blueprint, scored.score))
            }
        })
        .collect();

    // sort_by is stable, so equal scores stay in catalog order
    matches.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    if !matches.is_empty() {
        return matches;
    }

    catalog
        .iter()
        .zip(FALLBACK_SCORES)
        .map(|(blueprint, score)| CareerMatch::from_blueprint(blueprint, score))
        .collect()
}
