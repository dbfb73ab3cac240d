use nyaya_analytics::{WomenDashboardView, format_count_with, load_women_dashboard};
use nyaya_core::enums::NumberGrouping;

use crate::cli::GlobalFlags;
use crate::commands::shared::{output_dashboard, sections};
use crate::context::AppContext;
use crate::output::{Table, table_options};
use crate::progress::Progress;

/// Handle `nyaya women`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading crimes against women data...");
    let state = load_women_dashboard(&ctx.client, &ctx.config.display).await;
    spinner.finish_clear();

    let grouping = ctx.config.display.number_grouping;
    output_dashboard(&state, flags.format, |view| dashboard_text(view, grouping))
}

fn dashboard_text(view: &WomenDashboardView, grouping: NumberGrouping) -> String {
    let options = table_options();

    let mut top = Table::new(["rank", "state", "total"]);
    for (rank, point) in view.top_states.iter().enumerate() {
        top.push_row(vec![
            (rank + 1).to_string(),
            point.name.clone(),
            format_count_with(point.value, grouping),
        ]);
    }

    let mut breakdown = Table::new(["state", "total"]);
    for row in &view.breakdown {
        breakdown.push_row(vec![row.state.clone(), row.formatted.clone()]);
    }

    sections(&[
        format!("Top {} states\n{}", view.top_states.len(), top.render(options)),
        format!("State-wise breakdown\n{}", breakdown.render(options)),
    ])
}

#[cfg(test)]
mod tests {
    use nyaya_analytics::ChartPoint;
    use nyaya_analytics::dashboard::BreakdownRow;

    use super::*;

    #[test]
    fn text_ranks_top_states() {
        let view = WomenDashboardView {
            top_states: vec![
                ChartPoint {
                    name: "Uttar Pradesh".into(),
                    value: 56_011,
                },
                ChartPoint {
                    name: "Rajasthan".into(),
                    value: 40_738,
                },
            ],
            distribution: Vec::new(),
            breakdown: vec![BreakdownRow {
                state: "Goa".into(),
                total: 300,
                formatted: "300".into(),
            }],
        };
        let text = dashboard_text(&view, NumberGrouping::Western);
        assert!(text.starts_with("Top 2 states"));
        assert!(text.contains("56,011"));
        assert!(text.contains("State-wise breakdown"));
        assert!(text.contains("Goa"));
    }
}
