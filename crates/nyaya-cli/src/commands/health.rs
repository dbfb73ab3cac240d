use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `nyaya health`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Checking backend...");
    let health = ctx.client.health().await;
    match &health {
        Ok(_) => spinner.finish_clear(),
        Err(error) => spinner.finish_err(&error.user_message()),
    }

    let health = health.with_context(|| format!("backend at {} is not healthy", ctx.client.origin()))?;
    output(&health, flags.format)
}
