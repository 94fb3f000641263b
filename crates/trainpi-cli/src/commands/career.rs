use anyhow::{Context, Result};
use trainpi_core::plan::{CourseStatus, LearningPlan};
use trainpi_core::user::UserIdentity;

use super::print_json;
use crate::context::AppContext;

pub async fn discover(ctx: &AppContext, interests: &[String], skills: &[String]) -> Result<()> {
    let matches = ctx.career().discover_matches(interests, skills).await?;
    print_json(&matches)
}

/// Builds the plan for `career`, or for the best match when no career is
/// named. Unknown career names fall back to the default template.
async fn build_plan(
    ctx: &AppContext,
    career: Option<&str>,
    interests: &[String],
    skills: &[String],
) -> Result<LearningPlan> {
    let career_usecase = ctx.career();
    match career {
        Some(path) => Ok(career_usecase.plan_for_career(path, interests, skills)),
        None => {
            let best = career_usecase
                .discover_matches(interests, skills)
                .await?
                .into_iter()
                .next()
                .context("No career matches found")?;
            Ok(career_usecase.preview_plan(&best, interests, skills))
        }
    }
}

pub async fn preview(
    ctx: &AppContext,
    career: Option<&str>,
    interests: &[String],
    skills: &[String],
) -> Result<()> {
    let plan = build_plan(ctx, career, interests, skills).await?;
    print_json(&plan)
}

pub async fn save(
    ctx: &AppContext,
    identity: &UserIdentity,
    career: Option<&str>,
    interests: &[String],
    skills: &[String],
) -> Result<()> {
    let plan = build_plan(ctx, career, interests, skills).await?;
    let snapshot = ctx.career().save_plan(identity, plan, interests, skills);
    print_json(&snapshot)
}

pub fn show(ctx: &AppContext, identity: &UserIdentity) -> Result<()> {
    print_json(&ctx.career().restore(identity))
}

pub fn update_course(
    ctx: &AppContext,
    identity: &UserIdentity,
    course_id: &str,
    status: CourseStatus,
) -> Result<()> {
    let snapshot = ctx.career().update_course_status(identity, course_id, status);
    if snapshot.plan.is_none() {
        tracing::warn!("No saved plan; course status unchanged");
    }
    print_json(&snapshot)
}
