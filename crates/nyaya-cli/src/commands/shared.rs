use nyaya_analytics::{DashboardState, DashboardView};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::output::{output, output_with};

/// Print a loaded dashboard: the view when ready, otherwise its "no data"
/// message. JSON output always carries the full state.
pub fn output_dashboard<V>(
    state: &DashboardState<V>,
    format: OutputFormat,
    text: impl FnOnce(&V) -> String,
) -> anyhow::Result<()>
where
    V: DashboardView + Serialize,
{
    match (format, state.view()) {
        (OutputFormat::Json | OutputFormat::Raw, _) => output(state, format),
        (OutputFormat::Table, Some(view)) => output_with(view, format, text),
        (OutputFormat::Table, None) => {
            println!("{}", state.message().unwrap_or_default());
            Ok(())
        }
    }
}

/// Blank line between stacked sections of table output.
pub fn sections(parts: &[String]) -> String {
    parts.join("\n\n")
}
