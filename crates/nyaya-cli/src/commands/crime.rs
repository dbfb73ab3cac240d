use nyaya_analytics::{IpcDashboardView, format_count_with, load_ipc_dashboard};
use nyaya_core::enums::NumberGrouping;

use crate::cli::GlobalFlags;
use crate::commands::shared::{output_dashboard, sections};
use crate::context::AppContext;
use crate::output::{Table, table_options};
use crate::progress::Progress;

/// Handle `nyaya crime`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let spinner = Progress::spinner("Loading IPC crime data...");
    let state = load_ipc_dashboard(&ctx.client, &ctx.config.display).await;
    spinner.finish_clear();

    let grouping = ctx.config.display.number_grouping;
    output_dashboard(&state, flags.format, |view| dashboard_text(view, grouping))
}

fn dashboard_text(view: &IpcDashboardView, grouping: NumberGrouping) -> String {
    let options = table_options();

    let mut recent = Table::new(["year", "total"]);
    for point in &view.recent {
        recent.push_row(vec![point.name.clone(), format_count_with(point.value, grouping)]);
    }

    let mut distribution = Table::new(["year", "total", "color"]);
    for slice in &view.distribution {
        distribution.push_row(vec![
            slice.name.clone(),
            format_count_with(slice.value, grouping),
            slice.color.clone(),
        ]);
    }

    sections(&[
        format!(
            "IPC crimes, last {} years\n{}",
            view.recent.len(),
            recent.render(options)
        ),
        format!("Distribution by year\n{}", distribution.render(options)),
    ])
}

#[cfg(test)]
mod tests {
    use nyaya_analytics::ChartPoint;
    use nyaya_analytics::dashboard::PieSlice;

    use super::*;

    #[test]
    fn text_has_both_sections_with_grouped_totals() {
        let view = IpcDashboardView {
            recent: vec![ChartPoint {
                name: "2012".into(),
                value: 3_389_925,
            }],
            distribution: vec![PieSlice {
                name: "2012".into(),
                value: 3_389_925,
                color: "#ff9933".into(),
            }],
        };
        let text = dashboard_text(&view, NumberGrouping::Indian);
        assert!(text.starts_with("IPC crimes, last 1 years"));
        assert!(text.contains("33,89,925"));
        assert!(text.contains("Distribution by year"));
        assert!(text.contains("#ff9933"));
    }
}
