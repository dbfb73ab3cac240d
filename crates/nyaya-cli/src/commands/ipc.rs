use anyhow::Context;
use nyaya_core::entities::IpcExplanation;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::IpcCommands;
use crate::context::AppContext;
use crate::output::{output, output_with};
use crate::progress::Progress;

/// Handle `nyaya ipc`.
pub async fn handle(action: &IpcCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        IpcCommands::Search { query } => {
            let query = query.join(" ");
            let spinner = Progress::spinner("Searching IPC sections...");
            let sections = ctx.client.ipc_sections(&query).await;
            spinner.finish_clear();

            let sections = sections.context("IPC section search failed")?;
            if sections.is_empty() && flags.format != OutputFormat::Json {
                println!("No IPC sections match '{query}'.");
                return Ok(());
            }
            output(&sections, flags.format)
        }
        IpcCommands::Explain { section } => {
            let spinner = Progress::spinner("Looking up section...");
            let explanation = ctx.client.explain_ipc_section(section).await;
            spinner.finish_clear();

            let explanation =
                explanation.with_context(|| format!("could not explain IPC section {section}"))?;
            output_with(&explanation, flags.format, explanation_text)
        }
    }
}

fn explanation_text(explanation: &IpcExplanation) -> String {
    format!(
        "IPC Section {}: {}\n\n{}\n\n{}",
        explanation.section, explanation.title, explanation.law_text, explanation.explanation
    )
}
