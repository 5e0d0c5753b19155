//! Project timeline — twelve calendar-month buckets for one year.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::types::{Project, ProjectStatus};

/// Month labels in calendar order, as rendered on the timeline axis.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fev", "Mar", "Abr", "Mai", "Jun", "Jul", "Ago", "Set", "Out", "Nov", "Dez",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthBucket {
    pub month: &'static str,
    pub total_value: f64,
    /// Projects delivered to the client (completed or in post-sale).
    pub completed_projects: usize,
    /// Projects still occupying the pipeline (not completed, not cancelled).
    pub active_projects: usize,
    pub total_projects: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectTimeline {
    pub year: i32,
    /// Always twelve buckets, Jan → Dez, regardless of input order.
    pub months: Vec<MonthBucket>,
    pub total_year_value: f64,
    pub total_completed: usize,
    pub total_active: usize,
    pub total_projects: usize,
}

/// Distribute projects into the twelve month buckets of `year` by start
/// date. Projects starting in other years are left out entirely.
pub fn bucket_projects_by_month(projects: &[Project], year: i32) -> ProjectTimeline {
    let mut months: Vec<MonthBucket> = MONTH_LABELS
        .iter()
        .map(|&month| MonthBucket {
            month,
            total_value: 0.0,
            completed_projects: 0,
            active_projects: 0,
            total_projects: 0,
        })
        .collect();

    for project in projects {
        if project.start_date.year() != year {
            continue;
        }
        let bucket = &mut months[project.start_date.month0() as usize];
        bucket.total_value += project.value;
        bucket.total_projects += 1;
        if matches!(
            project.status,
            ProjectStatus::Completed | ProjectStatus::PostSale
        ) {
            bucket.completed_projects += 1;
        }
        if !project.status.is_closed() {
            bucket.active_projects += 1;
        }
    }

    ProjectTimeline {
        year,
        total_year_value: months.iter().map(|b| b.total_value).sum(),
        total_completed: months.iter().map(|b| b.completed_projects).sum(),
        total_active: months.iter().map(|b| b.active_projects).sum(),
        total_projects: months.iter().map(|b| b.total_projects).sum(),
        months,
    }
}

/// Convenience wrapper bucketing into the year of `today`.
pub fn bucket_projects_for(projects: &[Project], today: NaiveDate) -> ProjectTimeline {
    bucket_projects_by_month(projects, today.year())
}
