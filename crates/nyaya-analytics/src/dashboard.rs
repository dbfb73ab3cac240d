//! Dashboard views and their fail-soft loaders.
//!
//! Each dashboard fetches its own dataset and never reports an error to the
//! caller: a failed fetch and an empty dataset both end in
//! [`DashboardState::NoData`] with the dashboard's own message.

use nyaya_client::ApiClient;
use nyaya_config::DisplayConfig;
use nyaya_core::entities::{StateCrimeTotal, YearlyCrimeTotal};
use serde::Serialize;

use crate::format::format_count_with;
use crate::palette::{IPC_PALETTE, WOMEN_PALETTE, color_for};
use crate::pipeline::{ChartPoint, project_for_chart, take_most_recent, top_n};

const UNKNOWN_LABEL: &str = "Unknown";

/// One colored pie slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PieSlice {
    pub name: String,
    pub value: u64,
    pub color: String,
}

/// Table row of the state breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub state: String,
    pub total: u64,
    pub formatted: String,
}

/// A view that can be shown in place of "no data".
pub trait DashboardView {
    /// Text rendered when the dashboard has nothing to show.
    const NO_DATA_MESSAGE: &'static str;
}

/// IPC crime trends: a bar chart of recent years and a pie of all years.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpcDashboardView {
    pub recent: Vec<ChartPoint>,
    pub distribution: Vec<PieSlice>,
}

impl DashboardView for IpcDashboardView {
    const NO_DATA_MESSAGE: &'static str = "No IPC crime data available.";
}

/// Crimes against women: top states, a pie of all states, and a table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WomenDashboardView {
    pub top_states: Vec<ChartPoint>,
    pub distribution: Vec<PieSlice>,
    pub breakdown: Vec<BreakdownRow>,
}

impl DashboardView for WomenDashboardView {
    const NO_DATA_MESSAGE: &'static str = "No crime data available.";
}

/// Why a dashboard has nothing to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", content = "detail", rename_all = "snake_case")]
pub enum NoDataReason {
    /// The backend answered with zero rows.
    Empty,
    /// The fetch failed; the detail is logged, not shown.
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "view", rename_all = "snake_case")]
pub enum DashboardState<V> {
    Loading,
    Ready(V),
    NoData(NoDataReason),
}

impl<V: DashboardView> DashboardState<V> {
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub const fn view(&self) -> Option<&V> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    /// Message shown instead of charts, if any.
    #[must_use]
    pub const fn message(&self) -> Option<&'static str> {
        match self {
            Self::NoData(_) => Some(V::NO_DATA_MESSAGE),
            Self::Loading | Self::Ready(_) => None,
        }
    }
}

fn year_label(row: &YearlyCrimeTotal) -> String {
    row.year
        .map_or_else(|| UNKNOWN_LABEL.to_string(), |year| year.to_string())
}

fn state_label(row: &StateCrimeTotal) -> String {
    row.state
        .clone()
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

fn colored(points: Vec<ChartPoint>, palette: &[&str]) -> Vec<PieSlice> {
    points
        .into_iter()
        .enumerate()
        .map(|(i, point)| PieSlice {
            name: point.name,
            value: point.value,
            color: color_for(palette, i).unwrap_or_default().to_string(),
        })
        .collect()
}

/// Build the IPC view, or `None` for an empty dataset.
#[must_use]
pub fn build_ipc_view(rows: &[YearlyCrimeTotal], display: &DisplayConfig) -> Option<IpcDashboardView> {
    if rows.is_empty() {
        return None;
    }
    let total = |row: &YearlyCrimeTotal| row.total.unwrap_or(0);

    Some(IpcDashboardView {
        recent: project_for_chart(
            take_most_recent(rows, display.recent_years),
            year_label,
            total,
        ),
        distribution: colored(project_for_chart(rows, year_label, total), IPC_PALETTE),
    })
}

/// Build the women-crime view, or `None` for an empty dataset.
#[must_use]
pub fn build_women_view(
    rows: &[StateCrimeTotal],
    display: &DisplayConfig,
) -> Option<WomenDashboardView> {
    if rows.is_empty() {
        return None;
    }
    let points = project_for_chart(rows, state_label, |row| row.total.unwrap_or(0));

    let breakdown = points
        .iter()
        .map(|point| BreakdownRow {
            state: point.name.clone(),
            total: point.value,
            formatted: format_count_with(point.value, display.number_grouping),
        })
        .collect();

    Some(WomenDashboardView {
        top_states: top_n(&points, display.top_states, |point| point.value),
        distribution: colored(points, WOMEN_PALETTE),
        breakdown,
    })
}

/// Fetch and build the IPC dashboard.
pub async fn load_ipc_dashboard(
    client: &ApiClient,
    display: &DisplayConfig,
) -> DashboardState<IpcDashboardView> {
    match client.crime_summary().await {
        Ok(rows) => build_ipc_view(&rows, display)
            .map_or(DashboardState::NoData(NoDataReason::Empty), DashboardState::Ready),
        Err(e) => {
            tracing::warn!(%e, "IPC dashboard fetch failed");
            DashboardState::NoData(NoDataReason::Unavailable(e.user_message()))
        }
    }
}

/// Fetch and build the women-crime dashboard.
pub async fn load_women_dashboard(
    client: &ApiClient,
    display: &DisplayConfig,
) -> DashboardState<WomenDashboardView> {
    match client.women_dashboard().await {
        Ok(rows) => build_women_view(&rows, display)
            .map_or(DashboardState::NoData(NoDataReason::Empty), DashboardState::Ready),
        Err(e) => {
            tracing::warn!(%e, "women dashboard fetch failed");
            DashboardState::NoData(NoDataReason::Unavailable(e.user_message()))
        }
    }
}
