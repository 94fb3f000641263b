//! Career domain module.
//!
//! Static career blueprints and the scoring engine that ranks them against a
//! learner's selected interests and skills.
//!
//! # Module Structure
//!
//! - `model`: `CareerBlueprint` (static) and `CareerMatch` (derived)
//! - `catalog`: the fixed blueprint table
//! - `scoring`: `score_blueprint` and `build_career_matches`
//! - `selection`: helpers for editing interest/skill selections

mod catalog;
mod model;
mod scoring;
mod selection;

pub use catalog::{CAREER_BLUEPRINTS, find_blueprint};
pub use model::{CareerBlueprint, CareerMatch};
pub use scoring::{
    BlueprintScore, FALLBACK_SCORES, MAX_SCORE, MIN_SCORE, build_career_matches,
    build_career_matches_from, normalize_value, score_blueprint,
};
pub use selection::{collect_selections, contains_value, upsert_value};
