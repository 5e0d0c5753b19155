//! Client conversion funnel — Total → Prospects → Ativos → Inativos.

use serde::Serialize;

use crate::types::{Client, ClientStatus};
use crate::util::pct;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FunnelStage {
    pub label: &'static str,
    pub count: usize,
    /// Share of the total client base, 0–100.
    pub percentage: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientFunnel {
    /// Stages in funnel order: Total, Prospects, Ativos, Inativos.
    pub stages: Vec<FunnelStage>,
    /// Ativos over Total, 0–100.
    pub conversion_rate: f64,
}

/// Bucket the client base into funnel stages.
///
/// Prospects and Ativos partition the base by subscription state. The
/// Inativos stage counts clients with `status == inactive` explicitly —
/// a churned client keeps `has_active_subscription == false`, so Inativos
/// overlaps Prospects rather than extending the partition.
pub fn compute_funnel(clients: &[Client]) -> ClientFunnel {
    let total = clients.len();
    let ativos = clients.iter().filter(|c| c.has_active_subscription).count();
    let prospects = total - ativos;
    let inativos = clients
        .iter()
        .filter(|c| c.status == ClientStatus::Inactive)
        .count();

    let stage = |label, count, color| FunnelStage {
        label,
        count,
        percentage: pct(count as f64, total as f64),
        color,
    };

    ClientFunnel {
        stages: vec![
            stage("Total", total, "#6366f1"),
            stage("Prospects", prospects, "#f59e0b"),
            stage("Ativos", ativos, "#10b981"),
            stage("Inativos", inativos, "#ef4444"),
        ],
        conversion_rate: pct(ativos as f64, total as f64),
    }
}
