use std::fmt::Write;

use anyhow::bail;
use nyaya_analytics::format_confidence;
use nyaya_core::entities::SearchEnvelope;
use nyaya_session::Mounted;
use nyaya_session::search::{self, NO_MATCHES, SearchFailure, SearchSession};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SearchArgs;
use crate::context::AppContext;
use crate::output::output_with;
use crate::progress::Progress;

/// Handle `nyaya search`.
pub async fn handle(args: &SearchArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let question = args.question.join(" ");
    let widget = Mounted::mount(SearchSession::new());

    let spinner = Progress::spinner("Searching Supreme Court judgments...");
    let submitted = search::run(&ctx.client, &widget, &question).await;
    spinner.finish_clear();

    if let Err(reason) = submitted {
        bail!(SearchSession::rejection_message(reason));
    }
    let session = widget.snapshot();
    widget.unmount();

    match (session.results(), session.failure()) {
        (Some(envelope), _) => output_with(envelope, flags.format, results_text),
        (None, Some(SearchFailure::NoMatches)) => {
            let envelope = session.last_query().cloned().unwrap_or_default();
            output_with(&envelope, flags.format, |_| NO_MATCHES.to_string())
        }
        _ => bail!(
            "{}",
            session.error().unwrap_or("search did not complete")
        ),
    }
}

fn results_text(envelope: &SearchEnvelope) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Query: {}", envelope.query);
    let _ = writeln!(out, "Results: {}", envelope.results.len());

    for (rank, result) in envelope.results.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{}. {} ({})  confidence {}",
            rank + 1,
            result.case_name,
            result.date,
            format_confidence(result.confidence_score)
        );
        let _ = writeln!(out, "   Q: {}", result.matched_question);
        let _ = writeln!(out, "   A: {}", result.answer);
    }

    if !envelope.note.is_empty() {
        let _ = write!(out, "\n{}", envelope.note);
    }
    out.trim_end().to_string()
}
