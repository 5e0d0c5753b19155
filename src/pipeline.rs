//! Pipeline proportion chart — projects grouped by execution stage.

use serde::Serialize;

use crate::types::{Project, ProjectStatus};
use crate::util::pct;

/// Pipeline stages in display order with their labels and chart colors.
const STAGES: [(ProjectStatus, &str, &str); 4] = [
    (ProjectStatus::Discovery, "Descoberta", "#6366f1"),
    (ProjectStatus::Development, "Desenvolvimento", "#f59e0b"),
    (ProjectStatus::Delivery, "Entrega", "#3b82f6"),
    (ProjectStatus::PostSale, "Pós-venda", "#10b981"),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineSlice {
    pub label: &'static str,
    pub count: usize,
    /// Share of all in-pipeline projects, 0–100.
    pub percentage: f64,
    pub color: &'static str,
}

/// Count projects per pipeline stage, omitting stages with no projects.
///
/// Completed and cancelled projects have left the pipeline and are a
/// deliberate ignored branch, not an error.
pub fn group_pipeline(projects: &[Project]) -> Vec<PipelineSlice> {
    let mut counts = [0usize; STAGES.len()];
    for project in projects {
        match project.status {
            ProjectStatus::Discovery => counts[0] += 1,
            ProjectStatus::Development => counts[1] += 1,
            ProjectStatus::Delivery => counts[2] += 1,
            ProjectStatus::PostSale => counts[3] += 1,
            // Off the pipeline — not a chart stage.
            ProjectStatus::Completed | ProjectStatus::Cancelled => {}
        }
    }

    let total: usize = counts.iter().sum();
    STAGES
        .iter()
        .zip(counts)
        .filter(|(_, count)| *count > 0)
        .map(|(&(_, label, color), count)| PipelineSlice {
            label,
            count,
            percentage: pct(count as f64, total as f64),
            color,
        })
        .collect()
}
