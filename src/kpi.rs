//! KPI aggregation — the named scalars on the dashboard's summary cards.
//!
//! All outputs are plain numbers; currency symbols, locale grouping and
//! decimal places are the consumer's concern.

use chrono::NaiveDate;
use serde::Serialize;

use crate::types::{Client, Project, Subscription, SubscriptionStatus};
use crate::util::{pct, safe_div};

/// Projected months of recurring revenue per active client (LTV horizon).
const LTV_HORIZON_MONTHS: f64 = 12.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardKpis {
    /// Monthly recurring revenue: sum of active subscription amounts.
    pub mrr: f64,
    /// Share of clients that converted to an active subscription, 0–100.
    pub conversion_rate: f64,
    pub avg_project_value: f64,
    /// Open projects whose due date has passed.
    pub overdue_projects: usize,
    /// Share of subscriptions ever cancelled, 0–100.
    pub churn_rate: f64,
    /// Projected annual recurring revenue per active client.
    pub ltv: f64,
    pub active_subscriptions: usize,
}

/// Compute the KPI card scalars from one snapshot of the three collections.
///
/// Pure: no clock reads — `today` is the caller's reference date for the
/// overdue check. Empty slices produce all-zero metrics.
pub fn compute_kpis(
    projects: &[Project],
    clients: &[Client],
    subscriptions: &[Subscription],
    today: NaiveDate,
) -> DashboardKpis {
    let mrr: f64 = subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .map(|s| s.amount)
        .sum();
    let active_subscriptions = subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Active)
        .count();
    let cancelled = subscriptions
        .iter()
        .filter(|s| s.status == SubscriptionStatus::Cancelled)
        .count();

    let active_clients = clients.iter().filter(|c| c.has_active_subscription).count();
    let prospects = clients.len() - active_clients;

    let total_project_value: f64 = projects.iter().map(|p| p.value).sum();
    let overdue_projects = projects
        .iter()
        .filter(|p| !p.status.is_closed())
        .filter(|p| p.due_date.is_some_and(|due| due < today))
        .count();

    DashboardKpis {
        mrr,
        conversion_rate: pct(active_clients as f64, (prospects + active_clients) as f64),
        avg_project_value: safe_div(total_project_value, projects.len() as f64),
        overdue_projects,
        churn_rate: pct(cancelled as f64, subscriptions.len() as f64),
        ltv: safe_div(mrr * LTV_HORIZON_MONTHS, active_clients as f64),
        active_subscriptions,
    }
}
