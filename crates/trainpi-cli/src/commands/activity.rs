use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use trainpi_core::snapshot::{LessonRecord, ProgressPayload};
use trainpi_core::user::UserIdentity;

use super::print_json;
use crate::context::AppContext;

pub fn dashboard(ctx: &AppContext, identity: &UserIdentity) -> Result<()> {
    print_json(&ctx.dashboard().snapshot(identity))
}

pub async fn progress(
    ctx: &AppContext,
    identity: &UserIdentity,
    payload: &ProgressPayload,
) -> Result<()> {
    let snapshot = ctx.dashboard().update_progress(identity, payload).await;
    print_json(&snapshot.stats)
}

pub async fn list_lessons(ctx: &AppContext, identity: &UserIdentity) -> Result<()> {
    print_json(&ctx.lessons().list_lessons(identity).await)
}

pub async fn get_lesson(ctx: &AppContext, identity: &UserIdentity, id: u64) -> Result<()> {
    let lesson = ctx.lessons().get_lesson(identity, id).await?;
    print_json(&lesson)
}

/// Reads a lesson from a JSON file and stores it.
pub async fn upsert_lesson(ctx: &AppContext, identity: &UserIdentity, file: &Path) -> Result<()> {
    let raw = fs::read_to_string(file)
        .with_context(|| format!("Failed to read {}", file.display()))?;
    let lesson: LessonRecord = serde_json::from_str(&raw)
        .with_context(|| format!("Invalid lesson JSON in {}", file.display()))?;
    let id = lesson.id;
    ctx.lessons().upsert_lesson(identity, lesson).await;
    let stored = ctx.lessons().get_lesson(identity, id).await?;
    print_json(&stored)
}

pub async fn list_exceptions(ctx: &AppContext, identity: &UserIdentity) -> Result<()> {
    print_json(&ctx.exceptions().get_exceptions(identity).await)
}

pub async fn clear_exception(ctx: &AppContext, identity: &UserIdentity, id: u64) -> Result<()> {
    print_json(&ctx.exceptions().clear_exception(identity, id).await)
}
