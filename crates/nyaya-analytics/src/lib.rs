//! # nyaya-analytics
//!
//! Turns raw dashboard rows into chart-ready views.
//!
//! - [`pipeline`]: recency truncation, top-N ranking, chart projection
//! - [`palette`]: cycling categorical colors
//! - [`format`]: grouped counts and confidence percentages
//! - [`dashboard`]: the IPC and women-crime views and their loaders

pub mod dashboard;
pub mod format;
pub mod palette;
pub mod pipeline;

pub use dashboard::{
    DashboardState, DashboardView, IpcDashboardView, NoDataReason, WomenDashboardView,
    load_ipc_dashboard, load_women_dashboard,
};
pub use format::{format_confidence, format_count, format_count_with};
pub use palette::{assign_palette_index, color_for};
pub use pipeline::{ChartPoint, project_for_chart, take_most_recent, top_n};
