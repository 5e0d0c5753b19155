//! Realized monthly revenue for the current year.
//!
//! Only months up to the reference month carry revenue — future months are
//! rendered as zero, never estimated.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::timeline::MONTH_LABELS;
use crate::types::Project;
use crate::util::pct;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenuePoint {
    pub month: &'static str,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTimeline {
    pub year: i32,
    /// Always twelve points, Jan → Dez; months after `today` are zero.
    pub points: Vec<RevenuePoint>,
    pub current_month_revenue: f64,
    /// Month-over-month growth, 0 when the previous month had no revenue.
    pub growth_pct: f64,
}

/// Compute realized revenue per month of `today`'s year.
///
/// A project contributes its value to the month its start date falls in,
/// once its status is revenue bearing (delivery, post-sale or completed).
pub fn compute_revenue_timeline(projects: &[Project], today: NaiveDate) -> RevenueTimeline {
    let year = today.year();
    let current_month = today.month0() as usize;

    let mut points: Vec<RevenuePoint> = MONTH_LABELS
        .iter()
        .map(|&month| RevenuePoint {
            month,
            revenue: 0.0,
        })
        .collect();

    for project in projects {
        if project.start_date.year() != year || !project.status.is_revenue_bearing() {
            continue;
        }
        let month = project.start_date.month0() as usize;
        if month > current_month {
            // Future months are never projected.
            continue;
        }
        points[month].revenue += project.value;
    }

    let current_month_revenue = points[current_month].revenue;
    let growth_pct = if current_month == 0 {
        0.0
    } else {
        let previous = points[current_month - 1].revenue;
        if previous > 0.0 {
            pct(current_month_revenue - previous, previous)
        } else {
            0.0
        }
    };

    RevenueTimeline {
        year,
        points,
        current_month_revenue,
        growth_pct,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ProjectStatus;

    fn project(start: &str, value: f64, status: ProjectStatus) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Projeto".to_string(),
            value,
            status,
            start_date: start.parse().unwrap(),
            due_date: None,
        }
    }

    fn mid_june() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn future_months_are_always_zero() {
        let projects = vec![
            project("2026-09-01", 5000.0, ProjectStatus::Completed),
            project("2026-12-01", 5000.0, ProjectStatus::Delivery),
        ];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        for point in &timeline.points[6..] {
            assert_eq!(point.revenue, 0.0);
        }
        assert_eq!(timeline.current_month_revenue, 0.0);
    }

    #[test]
    fn only_revenue_bearing_statuses_count() {
        let projects = vec![
            project("2026-03-01", 100.0, ProjectStatus::Discovery),
            project("2026-03-01", 200.0, ProjectStatus::Development),
            project("2026-03-01", 300.0, ProjectStatus::Delivery),
            project("2026-03-01", 400.0, ProjectStatus::PostSale),
            project("2026-03-01", 500.0, ProjectStatus::Completed),
            project("2026-03-01", 600.0, ProjectStatus::Cancelled),
        ];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        assert_eq!(timeline.points[2].revenue, 1200.0);
    }

    #[test]
    fn current_month_without_projects_reads_zero() {
        let projects = vec![project("2026-05-10", 900.0, ProjectStatus::Completed)];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        assert_eq!(timeline.current_month_revenue, 0.0);
    }

    #[test]
    fn growth_compares_current_against_previous_month() {
        let projects = vec![
            project("2026-05-10", 1000.0, ProjectStatus::Completed),
            project("2026-06-10", 1500.0, ProjectStatus::Delivery),
        ];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        assert_eq!(timeline.current_month_revenue, 1500.0);
        assert_eq!(timeline.growth_pct, 50.0);
    }

    #[test]
    fn growth_is_zero_when_previous_month_had_no_revenue() {
        let projects = vec![project("2026-06-10", 1500.0, ProjectStatus::Delivery)];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        assert_eq!(timeline.growth_pct, 0.0);
    }

    #[test]
    fn growth_is_zero_in_january() {
        let january = NaiveDate::from_ymd_opt(2026, 1, 20).unwrap();
        let projects = vec![project("2026-01-05", 800.0, ProjectStatus::Completed)];
        let timeline = compute_revenue_timeline(&projects, january);
        assert_eq!(timeline.current_month_revenue, 800.0);
        assert_eq!(timeline.growth_pct, 0.0);
    }

    #[test]
    fn other_years_do_not_leak_in() {
        let projects = vec![project("2025-06-10", 9999.0, ProjectStatus::Completed)];
        let timeline = compute_revenue_timeline(&projects, mid_june());
        assert!(timeline.points.iter().all(|p| p.revenue == 0.0));
    }
}
