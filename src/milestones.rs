//! Milestone outlook — delivery checkpoints grouped by urgency.

use chrono::{Days, NaiveDate};
use serde::Serialize;

use crate::types::Milestone;

/// Window for the "due soon" count.
const DUE_SOON_DAYS: u64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneOutlook {
    pub total: usize,
    pub completed: usize,
    /// Open milestones whose due date has passed.
    pub overdue: usize,
    /// Open milestones due within the next seven days (today inclusive).
    pub due_this_week: usize,
    /// Open milestones gated on a client sign-off.
    pub awaiting_approval: usize,
}

/// Group milestones by urgency relative to `today`.
pub fn milestone_outlook(milestones: &[Milestone], today: NaiveDate) -> MilestoneOutlook {
    let week_end = today
        .checked_add_days(Days::new(DUE_SOON_DAYS))
        .unwrap_or(NaiveDate::MAX);

    let mut outlook = MilestoneOutlook {
        total: milestones.len(),
        completed: 0,
        overdue: 0,
        due_this_week: 0,
        awaiting_approval: 0,
    };

    for milestone in milestones {
        if milestone.is_completed {
            outlook.completed += 1;
            continue;
        }
        if milestone.due_date < today {
            outlook.overdue += 1;
        } else if milestone.due_date < week_end {
            outlook.due_this_week += 1;
        }
        if milestone.requires_client_approval {
            outlook.awaiting_approval += 1;
        }
    }

    outlook
}

#[cfg(test)]
mod tests {
    use super::*;

    fn milestone(due: &str, is_completed: bool, requires_approval: bool) -> Milestone {
        Milestone {
            id: "m1".to_string(),
            title: "Entrega".to_string(),
            due_date: due.parse().unwrap(),
            is_completed,
            requires_client_approval: requires_approval,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 6, 15).unwrap()
    }

    #[test]
    fn empty_input_is_all_zero() {
        let outlook = milestone_outlook(&[], today());
        assert_eq!(outlook.total, 0);
        assert_eq!(outlook.overdue, 0);
    }

    #[test]
    fn completed_milestones_never_count_as_overdue() {
        let milestones = vec![
            milestone("2026-06-01", true, true),
            milestone("2026-06-01", false, false),
        ];
        let outlook = milestone_outlook(&milestones, today());
        assert_eq!(outlook.completed, 1);
        assert_eq!(outlook.overdue, 1);
        assert_eq!(outlook.awaiting_approval, 0);
    }

    #[test]
    fn due_this_week_window_is_seven_days_inclusive_of_today() {
        let milestones = vec![
            milestone("2026-06-15", false, false), // today
            milestone("2026-06-21", false, false), // inside window
            milestone("2026-06-22", false, false), // outside window
        ];
        let outlook = milestone_outlook(&milestones, today());
        assert_eq!(outlook.due_this_week, 2);
        assert_eq!(outlook.overdue, 0);
    }

    #[test]
    fn approval_gate_counts_only_open_milestones() {
        let milestones = vec![
            milestone("2026-07-30", false, true),
            milestone("2026-06-10", false, true), // overdue and gated
            milestone("2026-07-30", true, true),
        ];
        let outlook = milestone_outlook(&milestones, today());
        assert_eq!(outlook.awaiting_approval, 2);
        assert_eq!(outlook.overdue, 1);
    }
}
