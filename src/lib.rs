//! Pulseboard — derived business metrics for the agency dashboard.
//!
//! Pure, synchronous derivations from immutable record snapshots (clients,
//! projects, subscriptions, alerts, milestones) into the chart and KPI view
//! models the dashboard renders: funnel stages, pipeline slices, monthly
//! timeline buckets, a sector × source heatmap and the KPI card scalars.
//!
//! Derivations never read the clock or any ambient state — the reference
//! date and the snapshot are explicit parameters — so the same inputs
//! always produce the same payload and calls are safe from any thread.

pub mod alerts;
pub mod dashboard;
pub mod error;
pub mod funnel;
pub mod heatmap;
pub mod json_loader;
pub mod kpi;
pub mod milestones;
pub mod pipeline;
pub mod revenue;
pub mod snapshot;
pub mod timeline;
pub mod types;
mod util;

pub use dashboard::{build_dashboard, build_dashboard_now, DashboardData};
pub use error::LoadError;
pub use snapshot::Snapshot;
