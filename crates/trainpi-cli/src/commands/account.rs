use anyhow::Result;

use super::print_json;
use crate::context::AppContext;

pub async fn register(
    ctx: &AppContext,
    email: &str,
    password: &str,
    name: Option<&str>,
) -> Result<()> {
    let session = ctx.accounts().register(email, password, name).await?;
    print_json(&session)
}

pub async fn login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let session = ctx.accounts().login(email, password).await?;
    print_json(&session)
}
