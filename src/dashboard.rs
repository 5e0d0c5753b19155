//! Dashboard composer — every derivation run against one snapshot.

use chrono::NaiveDate;
use serde::Serialize;

use crate::alerts::{summarize_alerts, AlertDigest};
use crate::funnel::{compute_funnel, ClientFunnel};
use crate::heatmap::{build_heatmap, HeatmapCell};
use crate::kpi::{compute_kpis, DashboardKpis};
use crate::milestones::{milestone_outlook, MilestoneOutlook};
use crate::pipeline::{group_pipeline, PipelineSlice};
use crate::revenue::{compute_revenue_timeline, RevenueTimeline};
use crate::snapshot::Snapshot;
use crate::timeline::{bucket_projects_for, ProjectTimeline};

/// The full dashboard payload, one field per widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardData {
    pub kpis: DashboardKpis,
    pub funnel: ClientFunnel,
    pub pipeline: Vec<PipelineSlice>,
    pub timeline: ProjectTimeline,
    pub revenue: RevenueTimeline,
    pub heatmap: Vec<HeatmapCell>,
    pub alerts: AlertDigest,
    pub milestones: MilestoneOutlook,
}

/// Derive every dashboard view model from one snapshot.
///
/// `today` anchors the overdue check, the revenue cutoff and the milestone
/// windows; passing it explicitly keeps the composition a pure function of
/// its inputs. Never fails — absent collections are empty.
pub fn build_dashboard(snapshot: &Snapshot, today: NaiveDate) -> DashboardData {
    let data = DashboardData {
        kpis: compute_kpis(
            snapshot.projects(),
            snapshot.clients(),
            snapshot.subscriptions(),
            today,
        ),
        funnel: compute_funnel(snapshot.clients()),
        pipeline: group_pipeline(snapshot.projects()),
        timeline: bucket_projects_for(snapshot.projects(), today),
        revenue: compute_revenue_timeline(snapshot.projects(), today),
        heatmap: build_heatmap(snapshot.clients()),
        alerts: summarize_alerts(snapshot.alerts()),
        milestones: milestone_outlook(snapshot.milestones(), today),
    };

    log::debug!(
        "dashboard derived: {} clients, {} projects, {} subscriptions, mrr {:.2}",
        snapshot.clients().len(),
        snapshot.projects().len(),
        snapshot.subscriptions().len(),
        data.kpis.mrr,
    );

    data
}

/// [`build_dashboard`] anchored at the local calendar date. This is the
/// only clock read in the crate.
pub fn build_dashboard_now(snapshot: &Snapshot) -> DashboardData {
    build_dashboard(snapshot, chrono::Local::now().date_naive())
}
