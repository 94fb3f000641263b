//! Learning plan domain module.
//!
//! # Module Structure
//!
//! - `model`: `LearningPlan`, `PlanPhase`, `PlanCourse` and their enums
//! - `library`: the static template table keyed by career path
//! - `builder`: `build_learning_plan`, which instantiates a template for a learner

mod builder;
mod library;
mod model;

pub use builder::{
    NEXT_STEP_FALLBACK, build_learning_plan, build_learning_plan_at, derive_course_status,
};
pub use library::{
    CourseTemplate, DEFAULT_CAREER_PATH, PLAN_LIBRARY, PhaseTemplate, PlanTemplate,
    find_template, template_or_default,
};
pub use model::{CourseLevel, CourseStatus, LearningPlan, PlanCourse, PlanPhase};
